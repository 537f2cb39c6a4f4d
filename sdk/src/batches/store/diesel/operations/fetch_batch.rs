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
        models::{CertificationModel, HerbBatchModel, StatusEntryModel},
        schema::{batch_certification, batch_status_entry, herb_batch},
    },
    Batch, BatchStoreError,
};

use diesel::{prelude::*, result::Error::NotFound};

pub(in crate::batches::store::diesel) trait FetchBatchOperation {
    fn fetch_batch(&self, batch_id: i64) -> Result<Option<Batch>, BatchStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> FetchBatchOperation for BatchStoreOperations<'a, diesel::pg::PgConnection> {
    fn fetch_batch(&self, batch_id: i64) -> Result<Option<Batch>, BatchStoreError> {
        self.conn.transaction::<_, BatchStoreError, _>(|| {
            let batch_model = match herb_batch::table
                .filter(herb_batch::batch_id.eq(batch_id))
                .first::<HerbBatchModel>(self.conn)
                .map(Some)
                .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?
            {
                Some(batch_model) => batch_model,
                None => return Ok(None),
            };

            let status_models = batch_status_entry::table
                .filter(batch_status_entry::batch_id.eq(batch_id))
                .order(batch_status_entry::id.asc())
                .load::<StatusEntryModel>(self.conn)?;

            let certification_models = batch_certification::table
                .filter(batch_certification::batch_id.eq(batch_id))
                .order(batch_certification::id.asc())
                .load::<CertificationModel>(self.conn)?;

            Ok(Some(Batch::from((
                batch_model,
                status_models,
                certification_models,
            ))))
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> FetchBatchOperation for BatchStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn fetch_batch(&self, batch_id: i64) -> Result<Option<Batch>, BatchStoreError> {
        self.conn.transaction::<_, BatchStoreError, _>(|| {
            let batch_model = match herb_batch::table
                .filter(herb_batch::batch_id.eq(batch_id))
                .first::<HerbBatchModel>(self.conn)
                .map(Some)
                .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?
            {
                Some(batch_model) => batch_model,
                None => return Ok(None),
            };

            let status_models = batch_status_entry::table
                .filter(batch_status_entry::batch_id.eq(batch_id))
                .order(batch_status_entry::id.asc())
                .load::<StatusEntryModel>(self.conn)?;

            let certification_models = batch_certification::table
                .filter(batch_certification::batch_id.eq(batch_id))
                .order(batch_certification::id.asc())
                .load::<CertificationModel>(self.conn)?;

            Ok(Some(Batch::from((
                batch_model,
                status_models,
                certification_models,
            ))))
        })
    }
}
