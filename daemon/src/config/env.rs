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

//! `PartialHerbsTraceConfig` builder using values from the environment.

use std::env;

use super::{
    error::ConfigurationError, HerbsTraceConfigSource, PartialHerbsTraceConfig,
    PartialHerbsTraceConfigBuilder,
};

const BIND_ENV: &str = "HERBSTRACE_BIND";
const DATABASE_URL_ENV: &str = "HERBSTRACE_DATABASE_URL";
const UPLOAD_DIR_ENV: &str = "HERBSTRACE_UPLOAD_DIR";
const ALLOWED_ORIGINS_ENV: &str = "HERBSTRACE_ALLOWED_ORIGINS";
const MAX_UPLOAD_SIZE_ENV: &str = "HERBSTRACE_MAX_UPLOAD_SIZE";

/// Trait to outline a basic read-only environment variable store
pub trait EnvStore {
    /// Returns an environment variable for a given key
    ///
    /// # Arguments
    ///
    /// * `key` - A string slice of the name of the environment variable
    fn get(&self, key: &str) -> Option<String>;
}

/// Implementation of `EnvStore` for OS environment variables
pub struct OsEnvStore;

impl EnvStore for OsEnvStore {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

pub struct EnvPartialHerbsTraceConfigBuilder<S: EnvStore> {
    store: S,
}

impl EnvPartialHerbsTraceConfigBuilder<OsEnvStore> {
    pub fn new() -> Self {
        EnvPartialHerbsTraceConfigBuilder { store: OsEnvStore }
    }
}

impl<S: EnvStore> EnvPartialHerbsTraceConfigBuilder<S> {
    /// Returns an `EnvPartialHerbsTraceConfigBuilder` that will fetch data from the given store.
    #[cfg(test)]
    pub fn from_store(store: S) -> Self {
        EnvPartialHerbsTraceConfigBuilder { store }
    }
}

impl<S: EnvStore> PartialHerbsTraceConfigBuilder for EnvPartialHerbsTraceConfigBuilder<S> {
    fn build(self) -> Result<PartialHerbsTraceConfig, ConfigurationError> {
        // a comma separated list; blank entries are ignored
        let allowed_origins = self.store.get(ALLOWED_ORIGINS_ENV).map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        });

        let max_upload_size = self
            .store
            .get(MAX_UPLOAD_SIZE_ENV)
            .map(|size| {
                size.trim().parse::<usize>().map_err(|_| {
                    ConfigurationError::InvalidArgument(format!(
                        "{} must be a number of bytes, found '{}'",
                        MAX_UPLOAD_SIZE_ENV, size
                    ))
                })
            })
            .transpose()?;

        Ok(
            PartialHerbsTraceConfig::new(HerbsTraceConfigSource::Environment)
                .with_bind(self.store.get(BIND_ENV))
                .with_database_url(self.store.get(DATABASE_URL_ENV))
                .with_upload_dir(self.store.get(UPLOAD_DIR_ENV))
                .with_allowed_origins(allowed_origins)
                .with_max_upload_size(max_upload_size),
        )
    }
}

#[cfg(test)]
pub(in crate::config) mod tests {
    use super::*;

    use std::collections::HashMap;

    /// Implementation of `EnvStore` that supports arbitrary hashmaps
    pub(in crate::config) struct HashmapEnvStore {
        internal: HashMap<String, String>,
    }

    impl HashmapEnvStore {
        pub fn new(internal: HashMap<String, String>) -> HashmapEnvStore {
            HashmapEnvStore { internal }
        }
    }

    impl EnvStore for HashmapEnvStore {
        fn get(&self, key: &str) -> Option<String> {
            self.internal.get(key).map(ToOwned::to_owned)
        }
    }

    #[test]
    /// Validate a `PartialHerbsTraceConfig` is built from the environment, with unset variables
    /// left empty.
    fn test_environment_config() {
        let mut internal = HashMap::new();
        internal.insert(BIND_ENV.to_string(), "0.0.0.0:8080".to_string());
        internal.insert(
            ALLOWED_ORIGINS_ENV.to_string(),
            "https://herbs.example.com, ,http://localhost:5173".to_string(),
        );
        internal.insert(MAX_UPLOAD_SIZE_ENV.to_string(), "2048".to_string());

        let config = EnvPartialHerbsTraceConfigBuilder::from_store(HashmapEnvStore::new(internal))
            .build()
            .expect("Unable to build environment config");

        assert_eq!(config.source(), HerbsTraceConfigSource::Environment);
        assert_eq!(config.bind(), Some("0.0.0.0:8080".to_string()));
        assert_eq!(config.database_url(), None);
        assert_eq!(config.upload_dir(), None);
        assert_eq!(
            config.allowed_origins(),
            Some(vec![
                "https://herbs.example.com".to_string(),
                "http://localhost:5173".to_string()
            ])
        );
        assert_eq!(config.max_upload_size(), Some(2048));
        assert_eq!(config.verbosity(), None);
    }

    #[test]
    fn test_environment_config_invalid_upload_size() {
        let mut internal = HashMap::new();
        internal.insert(MAX_UPLOAD_SIZE_ENV.to_string(), "ten megabytes".to_string());

        let result =
            EnvPartialHerbsTraceConfigBuilder::from_store(HashmapEnvStore::new(internal)).build();

        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidArgument(_))
        ));
    }
}
