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

//! Combines `PartialHerbsTraceConfig` layers into the final `HerbsTraceConfig`.

use super::{
    error::ConfigurationError, HerbsTraceConfig, HerbsTraceConfigSource, PartialHerbsTraceConfig,
};

/// Builds a `HerbsTraceConfig` from partial configs added in order of precedence.
///
/// The first partial config to provide a value wins, so partial configs should be added from the
/// highest precedence (command line) to the lowest (defaults).
#[derive(Default)]
pub struct HerbsTraceConfigBuilder {
    partial_configs: Vec<PartialHerbsTraceConfig>,
}

impl HerbsTraceConfigBuilder {
    pub fn with_partial_config(mut self, partial: PartialHerbsTraceConfig) -> Self {
        self.partial_configs.push(partial);
        self
    }

    pub fn build(self) -> Result<HerbsTraceConfig, ConfigurationError> {
        Ok(HerbsTraceConfig {
            bind: self.first_value("bind", PartialHerbsTraceConfig::bind)?,
            database_url: self.first_value("database_url", PartialHerbsTraceConfig::database_url)?,
            upload_dir: self.first_value("upload_dir", PartialHerbsTraceConfig::upload_dir)?,
            allowed_origins: self
                .first_value("allowed_origins", PartialHerbsTraceConfig::allowed_origins)?,
            max_upload_size: self
                .first_value("max_upload_size", PartialHerbsTraceConfig::max_upload_size)?,
            verbosity: self.first_value("verbosity", PartialHerbsTraceConfig::verbosity)?,
        })
    }

    fn first_value<T, F>(
        &self,
        name: &str,
        value: F,
    ) -> Result<(T, HerbsTraceConfigSource), ConfigurationError>
    where
        F: Fn(&PartialHerbsTraceConfig) -> Option<T>,
    {
        self.partial_configs
            .iter()
            .find_map(|partial| value(partial).map(|v| (v, partial.source())))
            .ok_or_else(|| ConfigurationError::MissingValue(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use crate::config::env::tests::HashmapEnvStore;
    use crate::config::{
        DefaultPartialHerbsTraceConfigBuilder, EnvPartialHerbsTraceConfigBuilder,
        PartialHerbsTraceConfigBuilder,
    };

    #[test]
    /// Command line values win over environment values, which win over defaults.
    fn test_layered_config() {
        let command_line = PartialHerbsTraceConfig::new(HerbsTraceConfigSource::CommandLine)
            .with_bind(Some("0.0.0.0:9000".to_string()));

        let mut internal = HashMap::new();
        internal.insert("HERBSTRACE_BIND".to_string(), "0.0.0.0:8080".to_string());
        internal.insert(
            "HERBSTRACE_DATABASE_URL".to_string(),
            "/var/lib/herbstrace/herbs.db".to_string(),
        );
        let environment = EnvPartialHerbsTraceConfigBuilder::from_store(HashmapEnvStore::new(
            internal,
        ))
        .build()
        .expect("Unable to build environment config");

        let defaults = DefaultPartialHerbsTraceConfigBuilder::new()
            .build()
            .expect("Unable to build default config");

        let config = HerbsTraceConfigBuilder::default()
            .with_partial_config(command_line)
            .with_partial_config(environment)
            .with_partial_config(defaults)
            .build()
            .expect("Unable to build config");

        assert_eq!(config.bind(), "0.0.0.0:9000");
        assert_eq!(config.bind_source(), &HerbsTraceConfigSource::CommandLine);
        assert_eq!(config.database_url(), "/var/lib/herbstrace/herbs.db");
        assert_eq!(
            config.database_url_source(),
            &HerbsTraceConfigSource::Environment
        );
        assert_eq!(config.upload_dir(), "uploads");
        assert_eq!(config.upload_dir_source(), &HerbsTraceConfigSource::Default);
        assert_eq!(config.verbosity(), log::Level::Info);
    }

    #[test]
    fn test_missing_value() {
        let result = HerbsTraceConfigBuilder::default()
            .with_partial_config(
                PartialHerbsTraceConfig::new(HerbsTraceConfigSource::CommandLine)
                    .with_bind(Some("0.0.0.0:9000".to_string())),
            )
            .build();

        assert_eq!(
            result.map(|_| ()),
            Err(ConfigurationError::MissingValue("database_url".to_string()))
        );
    }
}
