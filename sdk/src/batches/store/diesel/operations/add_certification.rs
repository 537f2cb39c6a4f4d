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
        models::NewCertificationModel,
        schema::{batch_certification, herb_batch},
    },
    BatchStoreError, Certification,
};

use diesel::{dsl::insert_into, prelude::*};

pub(in crate::batches::store::diesel) trait AddCertificationOperation {
    fn add_certification(
        &self,
        batch_id: i64,
        certification: Certification,
    ) -> Result<(), BatchStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> AddCertificationOperation for BatchStoreOperations<'a, diesel::pg::PgConnection> {
    fn add_certification(
        &self,
        batch_id: i64,
        certification: Certification,
    ) -> Result<(), BatchStoreError> {
        self.conn.transaction::<_, BatchStoreError, _>(|| {
            let exists = herb_batch::table
                .filter(herb_batch::batch_id.eq(batch_id))
                .count()
                .get_result::<i64>(self.conn)?
                > 0;

            if !exists {
                return Err(BatchStoreError::NotFoundError(batch_id.to_string()));
            }

            insert_into(batch_certification::table)
                .values(NewCertificationModel::from((batch_id, certification)))
                .execute(self.conn)?;

            Ok(())
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> AddCertificationOperation
    for BatchStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn add_certification(
        &self,
        batch_id: i64,
        certification: Certification,
    ) -> Result<(), BatchStoreError> {
        self.conn.immediate_transaction::<_, BatchStoreError, _>(|| {
            let exists = herb_batch::table
                .filter(herb_batch::batch_id.eq(batch_id))
                .count()
                .get_result::<i64>(self.conn)?
                > 0;

            if !exists {
                return Err(BatchStoreError::NotFoundError(batch_id.to_string()));
            }

            insert_into(batch_certification::table)
                .values(NewCertificationModel::from((batch_id, certification)))
                .execute(self.conn)?;

            Ok(())
        })
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use diesel::sqlite::SqliteConnection;

    use crate::batches::store::BatchBuilder;
    use crate::migrations::run_sqlite_migrations;

    use super::super::{add_batch::AddBatchOperation, fetch_batch::FetchBatchOperation};

    /// Certifications uploaded after collection are appended after the ones given at intake.
    #[test]
    fn test_add_certification_appends() -> Result<(), Box<dyn std::error::Error>> {
        let conn = SqliteConnection::establish(":memory:")?;
        run_sqlite_migrations(&conn)?;

        let uploaded_at = NaiveDate::from_ymd(2024, 4, 1).and_hms(12, 0, 0);
        let first = Certification {
            name: "organic.pdf".to_string(),
            file_url: "/uploads/cert-11-0-organic.pdf".to_string(),
            uploaded_at,
            uploaded_by: "farmer".to_string(),
        };
        let second = Certification {
            name: "Quality Certificate".to_string(),
            file_url: "/uploads/cert-1711972800000-lab.pdf".to_string(),
            uploaded_at,
            uploaded_by: "manufacturer".to_string(),
        };

        let ops = BatchStoreOperations::new(&conn);
        ops.add_batch(
            BatchBuilder::new()
                .with_batch_id(11)
                .with_herb_name("Neem".to_string())
                .with_quantity("3 kg".to_string())
                .with_image_url("/uploads/11-neem.jpg".to_string())
                .with_certifications(vec![first.clone()])
                .build()?,
        )?;
        ops.add_certification(11, second.clone())?;

        let batch = ops.fetch_batch(11)?.expect("batch should exist");
        assert_eq!(batch.certifications, vec![first, second]);

        match ops.add_certification(12, batch.certifications[0].clone()) {
            Err(BatchStoreError::NotFoundError(id)) => assert_eq!(id, "12"),
            other => panic!("expected NotFoundError, got {:?}", other),
        }

        Ok(())
    }
}
