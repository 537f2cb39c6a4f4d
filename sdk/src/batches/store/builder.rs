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

use chrono::{NaiveDateTime, Utc};

use super::error::BatchBuilderError;
use super::{Batch, Certification, StatusEntry, INITIAL_STATUS};

const DEFAULT_FARMER_NAME: &str = "Unknown Farmer";

/// Builder used to create a newly collected Batch
///
/// The built batch always starts with a single "Collected" status entry stamped with the
/// collection time.
#[derive(Clone, Debug, Default)]
pub struct BatchBuilder {
    batch_id: Option<i64>,
    herb_name: Option<String>,
    quantity: Option<String>,
    geo_location: Option<String>,
    image_url: Option<String>,
    farmer_name: Option<String>,
    farmer_email: Option<String>,
    collection_timestamp: Option<NaiveDateTime>,
    certifications: Vec<Certification>,
}

impl BatchBuilder {
    /// Creates a new Batch builder
    pub fn new() -> Self {
        BatchBuilder::default()
    }

    /// Set the id of the Batch
    ///
    /// # Arguments
    ///
    /// * `batch_id` - The id of the Batch being built
    pub fn with_batch_id(mut self, batch_id: i64) -> Self {
        self.batch_id = Some(batch_id);
        self
    }

    /// Set the name of the collected herb
    pub fn with_herb_name(mut self, herb_name: String) -> Self {
        self.herb_name = Some(herb_name);
        self
    }

    /// Set the collected quantity, as entered by the farmer (e.g. "20 kg")
    pub fn with_quantity(mut self, quantity: String) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_geo_location(mut self, geo_location: String) -> Self {
        self.geo_location = Some(geo_location);
        self
    }

    /// Set the url of the stored batch image
    pub fn with_image_url(mut self, image_url: String) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_farmer_name(mut self, farmer_name: String) -> Self {
        self.farmer_name = Some(farmer_name);
        self
    }

    pub fn with_farmer_email(mut self, farmer_email: String) -> Self {
        self.farmer_email = Some(farmer_email);
        self
    }

    /// Set the collection time; defaults to the time `build` is called
    pub fn with_collection_timestamp(mut self, collection_timestamp: NaiveDateTime) -> Self {
        self.collection_timestamp = Some(collection_timestamp);
        self
    }

    /// Set the certifications uploaded together with the batch
    ///
    /// # Arguments
    ///
    /// * `certifications` - The certifications, in upload order
    pub fn with_certifications(mut self, certifications: Vec<Certification>) -> Self {
        self.certifications = certifications;
        self
    }

    pub fn build(self) -> Result<Batch, BatchBuilderError> {
        let batch_id = self.batch_id.ok_or_else(|| {
            BatchBuilderError::MissingRequiredField("Missing batch_id".to_string())
        })?;
        let herb_name = self.herb_name.ok_or_else(|| {
            BatchBuilderError::MissingRequiredField("Missing herb_name".to_string())
        })?;
        let quantity = self.quantity.ok_or_else(|| {
            BatchBuilderError::MissingRequiredField("Missing quantity".to_string())
        })?;
        let image_url = self.image_url.ok_or_else(|| {
            BatchBuilderError::MissingRequiredField("Missing image_url".to_string())
        })?;
        let collection_timestamp = self
            .collection_timestamp
            .unwrap_or_else(|| Utc::now().naive_utc());

        Ok(Batch {
            batch_id,
            herb_name,
            quantity,
            geo_location: self.geo_location.unwrap_or_default(),
            image_url,
            farmer_name: self
                .farmer_name
                .unwrap_or_else(|| DEFAULT_FARMER_NAME.to_string()),
            farmer_email: self.farmer_email.unwrap_or_default(),
            collection_timestamp,
            status_history: vec![StatusEntry {
                status: INITIAL_STATUS.to_string(),
                timestamp: collection_timestamp,
                updated_by: None,
            }],
            certifications: self.certifications,
        })
    }
}

/// Builder used to create a Certification
#[derive(Clone, Debug, Default)]
pub struct CertificationBuilder {
    name: Option<String>,
    file_url: Option<String>,
    uploaded_at: Option<NaiveDateTime>,
    uploaded_by: Option<String>,
}

impl CertificationBuilder {
    pub fn new() -> Self {
        CertificationBuilder::default()
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_file_url(mut self, file_url: String) -> Self {
        self.file_url = Some(file_url);
        self
    }

    pub fn with_uploaded_at(mut self, uploaded_at: NaiveDateTime) -> Self {
        self.uploaded_at = Some(uploaded_at);
        self
    }

    pub fn with_uploaded_by(mut self, uploaded_by: String) -> Self {
        self.uploaded_by = Some(uploaded_by);
        self
    }

    pub fn build(self) -> Result<Certification, BatchBuilderError> {
        let name = self.name.ok_or_else(|| {
            BatchBuilderError::MissingRequiredField("Missing name".to_string())
        })?;
        let file_url = self.file_url.ok_or_else(|| {
            BatchBuilderError::MissingRequiredField("Missing file_url".to_string())
        })?;
        let uploaded_by = self.uploaded_by.ok_or_else(|| {
            BatchBuilderError::MissingRequiredField("Missing uploaded_by".to_string())
        })?;

        Ok(Certification {
            name,
            file_url,
            uploaded_at: self
                .uploaded_at
                .unwrap_or_else(|| Utc::now().naive_utc()),
            uploaded_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A built batch has a single "Collected" entry and the farmer defaults filled in.
    #[test]
    fn test_build_batch_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let batch = BatchBuilder::new()
            .with_batch_id(1_700_000_000_000)
            .with_herb_name("Tulsi".to_string())
            .with_quantity("20 kg".to_string())
            .with_image_url("/uploads/1700000000000-tulsi.jpg".to_string())
            .build()?;

        assert_eq!(batch.farmer_name, "Unknown Farmer");
        assert_eq!(batch.farmer_email, "");
        assert_eq!(batch.geo_location, "");
        assert_eq!(batch.status_history.len(), 1);
        assert_eq!(batch.status_history[0].status, INITIAL_STATUS);
        assert_eq!(batch.status_history[0].timestamp, batch.collection_timestamp);
        assert_eq!(batch.current_status(), "Collected");
        assert!(batch.certifications.is_empty());

        Ok(())
    }

    #[test]
    fn test_build_batch_missing_image() {
        let result = BatchBuilder::new()
            .with_batch_id(1)
            .with_herb_name("Ashwagandha".to_string())
            .with_quantity("5 kg".to_string())
            .build();

        match result {
            Err(BatchBuilderError::MissingRequiredField(field)) => {
                assert_eq!(field, "Missing image_url")
            }
            other => panic!("expected a missing field error, got {:?}", other),
        }
    }

    #[test]
    fn test_build_certification_missing_uploaded_by() {
        assert!(CertificationBuilder::new()
            .with_name("organic.pdf".to_string())
            .with_file_url("/uploads/cert-1-0-organic.pdf".to_string())
            .build()
            .is_err());
    }
}
