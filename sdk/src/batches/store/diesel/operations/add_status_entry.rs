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

use super::BatchStoreOperations;
use crate::batches::store::{
    diesel::{
        models::NewStatusEntryModel,
        schema::{batch_status_entry, herb_batch},
    },
    BatchStoreError, StatusEntry,
};

use diesel::{dsl::insert_into, prelude::*};

pub(in crate::batches::store::diesel) trait AddStatusEntryOperation {
    fn add_status_entry(&self, batch_id: i64, entry: StatusEntry) -> Result<(), BatchStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> AddStatusEntryOperation for BatchStoreOperations<'a, diesel::pg::PgConnection> {
    fn add_status_entry(&self, batch_id: i64, entry: StatusEntry) -> Result<(), BatchStoreError> {
        self.conn.transaction::<_, BatchStoreError, _>(|| {
            let exists = herb_batch::table
                .filter(herb_batch::batch_id.eq(batch_id))
                .count()
                .get_result::<i64>(self.conn)?
                > 0;

            if !exists {
                return Err(BatchStoreError::NotFoundError(batch_id.to_string()));
            }

            insert_into(batch_status_entry::table)
                .values(NewStatusEntryModel::from((batch_id, entry)))
                .execute(self.conn)?;

            Ok(())
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> AddStatusEntryOperation for BatchStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn add_status_entry(&self, batch_id: i64, entry: StatusEntry) -> Result<(), BatchStoreError> {
        self.conn.immediate_transaction::<_, BatchStoreError, _>(|| {
            let exists = herb_batch::table
                .filter(herb_batch::batch_id.eq(batch_id))
                .count()
                .get_result::<i64>(self.conn)?
                > 0;

            if !exists {
                return Err(BatchStoreError::NotFoundError(batch_id.to_string()));
            }

            insert_into(batch_status_entry::table)
                .values(NewStatusEntryModel::from((batch_id, entry)))
                .execute(self.conn)?;

            Ok(())
        })
    }
}
