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

//! Opens the configured database, applies migrations and builds the stores the REST API uses.

use herbstrace_sdk::error::InternalError;
#[cfg(feature = "database-postgres")]
use herbstrace_sdk::migrations::run_postgres_migrations;
#[cfg(feature = "database-sqlite")]
use herbstrace_sdk::migrations::run_sqlite_migrations;
use herbstrace_sdk::rest_api::actix_web_4::StoreState;
#[cfg(feature = "database-postgres")]
use herbstrace_sdk::store::postgres::create_pg_pool;
#[cfg(feature = "database-sqlite")]
use herbstrace_sdk::store::sqlite::create_sqlite_pool;
use herbstrace_sdk::store::ConnectionUri;

use crate::error::DaemonError;

pub fn create_store_state(database_url: &str) -> Result<StoreState, DaemonError> {
    let connection_uri: ConnectionUri = database_url
        .parse()
        .map_err(|err: InternalError| DaemonError::StartUpError(Box::new(err)))?;

    match connection_uri {
        #[cfg(feature = "database-postgres")]
        ConnectionUri::Postgres(url) => {
            let pool = create_pg_pool(&url).map_err(database_error)?;
            {
                let conn = pool.get().map_err(database_error)?;
                run_postgres_migrations(&*conn).map_err(database_error)?;
            }
            info!("Using PostgreSQL database");
            Ok(StoreState::with_pg_pool(pool))
        }
        #[cfg(feature = "database-sqlite")]
        ConnectionUri::Sqlite(conn_str) => {
            let pool = create_sqlite_pool(&conn_str).map_err(database_error)?;
            {
                let conn = pool.get().map_err(database_error)?;
                run_sqlite_migrations(&*conn).map_err(database_error)?;
            }
            info!("Using SQLite database {}", conn_str);
            Ok(StoreState::with_sqlite_pool(pool))
        }
        #[allow(unreachable_patterns)]
        _ => Err(DaemonError::UnsupportedDatabase(format!(
            "Support for the database at {} is not enabled for this binary",
            database_url
        ))),
    }
}

fn database_error<E: std::error::Error + 'static>(err: E) -> DaemonError {
    DaemonError::DatabaseError(Box::new(err))
}
