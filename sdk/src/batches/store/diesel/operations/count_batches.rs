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
use crate::batches::store::{diesel::schema::herb_batch, BatchStoreError};

use diesel::prelude::*;

pub(in crate::batches::store::diesel) trait CountBatchesOperation {
    fn count_batches(&self) -> Result<i64, BatchStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> CountBatchesOperation for BatchStoreOperations<'a, diesel::pg::PgConnection> {
    fn count_batches(&self) -> Result<i64, BatchStoreError> {
        herb_batch::table
            .count()
            .get_result::<i64>(self.conn)
            .map_err(BatchStoreError::from)
    }
}

#[cfg(feature = "sqlite")]
impl<'a> CountBatchesOperation for BatchStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn count_batches(&self) -> Result<i64, BatchStoreError> {
        herb_batch::table
            .count()
            .get_result::<i64>(self.conn)
            .map_err(BatchStoreError::from)
    }
}
