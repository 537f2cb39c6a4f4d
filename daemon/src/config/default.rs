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

//! `PartialHerbsTraceConfig` builder using default values.

use herbstrace_sdk::rest_api::actix_web_4::DEFAULT_MAX_UPLOAD_SIZE;

use super::{
    error::ConfigurationError, HerbsTraceConfigSource, PartialHerbsTraceConfig,
    PartialHerbsTraceConfigBuilder,
};

const BIND: &str = "localhost:3001";
const DATABASE_URL: &str = "herbstrace.db";
const UPLOAD_DIR: &str = "uploads";
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Default)]
pub struct DefaultPartialHerbsTraceConfigBuilder;

impl DefaultPartialHerbsTraceConfigBuilder {
    pub fn new() -> Self {
        DefaultPartialHerbsTraceConfigBuilder {}
    }
}

impl PartialHerbsTraceConfigBuilder for DefaultPartialHerbsTraceConfigBuilder {
    fn build(self) -> Result<PartialHerbsTraceConfig, ConfigurationError> {
        Ok(PartialHerbsTraceConfig::new(HerbsTraceConfigSource::Default)
            .with_bind(Some(String::from(BIND)))
            .with_database_url(Some(String::from(DATABASE_URL)))
            .with_upload_dir(Some(String::from(UPLOAD_DIR)))
            .with_allowed_origins(Some(
                ALLOWED_ORIGINS.iter().map(|origin| origin.to_string()).collect(),
            ))
            .with_max_upload_size(Some(DEFAULT_MAX_UPLOAD_SIZE))
            .with_verbosity(Some(log::Level::Info)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Verifies that a `PartialHerbsTraceConfig` object is accurately constructed from default
    /// values.
    fn test_default_config() {
        let generated_default_config = DefaultPartialHerbsTraceConfigBuilder::new()
            .build()
            .expect("Unable to build default config object");

        assert_eq!(
            generated_default_config.source(),
            HerbsTraceConfigSource::Default
        );
        assert_eq!(generated_default_config.bind(), Some(String::from(BIND)));
        assert_eq!(
            generated_default_config.database_url(),
            Some(String::from(DATABASE_URL))
        );
        assert_eq!(
            generated_default_config.allowed_origins(),
            Some(vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string()
            ])
        );
        assert_eq!(
            generated_default_config.max_upload_size(),
            Some(10 * 1024 * 1024)
        );
        assert_eq!(generated_default_config.verbosity(), Some(log::Level::Info));
    }
}
