// Copyright 2024 HerbsTrace Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use diesel::{
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
    sqlite::SqliteConnection,
};

use crate::error::InternalError;

/// How long a connection waits for another writer to release the database lock before giving up.
const BUSY_TIMEOUT_MS: u32 = 5000;

/// Prepares every pooled SQLite connection for concurrent use.
///
/// Writers wait up to `BUSY_TIMEOUT_MS` for the lock instead of failing immediately, and the
/// write-ahead log lets readers proceed while a write is in progress.
#[derive(Debug)]
struct SqliteConnectionCustomizer {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, R2d2Error> for SqliteConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), R2d2Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL;",
            self.busy_timeout_ms
        ))
        .map_err(R2d2Error::QueryError)
    }
}

/// Builds a connection pool for the SQLite database at `conn_str`.
///
/// A new database is created for each connection to the in-memory SQLite implementation; to
/// ensure that every store operates on the same database only one connection is allowed.
pub fn create_sqlite_pool(
    conn_str: &str,
) -> Result<Pool<ConnectionManager<SqliteConnection>>, InternalError> {
    let connection_manager = ConnectionManager::<SqliteConnection>::new(conn_str);
    let mut pool_builder =
        Pool::builder().connection_customizer(Box::new(SqliteConnectionCustomizer {
            busy_timeout_ms: BUSY_TIMEOUT_MS,
        }));
    if conn_str == ":memory:" {
        pool_builder = pool_builder.max_size(1);
    }
    pool_builder.build(connection_manager).map_err(|err| {
        InternalError::from_source_with_prefix(
            Box::new(err),
            "Failed to build connection pool".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use diesel::{sql_query, sql_types::Text, RunQueryDsl};
    use tempfile::TempDir;

    #[derive(QueryableByName)]
    struct JournalMode {
        #[sql_type = "Text"]
        journal_mode: String,
    }

    /// File databases are switched to the write-ahead log on every pooled connection.
    #[test]
    fn test_file_pool_uses_wal() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("herbstrace.db");
        let pool = create_sqlite_pool(&path.to_string_lossy())?;

        let modes = sql_query("PRAGMA journal_mode").load::<JournalMode>(&*pool.get()?)?;

        assert_eq!(
            modes.first().map(|mode| mode.journal_mode.as_str()),
            Some("wal")
        );

        Ok(())
    }
}
