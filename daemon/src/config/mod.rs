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

//! Configuration to provide the necessary values to start up the HerbsTrace daemon.
//!
//! These values may be sourced from command line arguments, environment variables or pre-defined
//! defaults. This module allows for configuration values from each of these sources to be combined
//! into a final `HerbsTraceConfig` object.

mod builder;
mod clap;
mod default;
mod env;
pub mod error;
mod partial;

pub use self::builder::HerbsTraceConfigBuilder;
pub use self::clap::{verbosity, ClapPartialHerbsTraceConfigBuilder};
pub use self::default::DefaultPartialHerbsTraceConfigBuilder;
pub use self::env::EnvPartialHerbsTraceConfigBuilder;
pub use self::partial::{HerbsTraceConfigSource, PartialHerbsTraceConfig};

use self::error::ConfigurationError;

/// A builder for one layer of configuration values
pub trait PartialHerbsTraceConfigBuilder {
    fn build(self) -> Result<PartialHerbsTraceConfig, ConfigurationError>;
}

#[derive(Debug)]
pub struct HerbsTraceConfig {
    bind: (String, HerbsTraceConfigSource),
    database_url: (String, HerbsTraceConfigSource),
    upload_dir: (String, HerbsTraceConfigSource),
    allowed_origins: (Vec<String>, HerbsTraceConfigSource),
    max_upload_size: (usize, HerbsTraceConfigSource),
    verbosity: (log::Level, HerbsTraceConfigSource),
}

impl HerbsTraceConfig {
    pub fn bind(&self) -> &str {
        &self.bind.0
    }

    pub fn bind_source(&self) -> &HerbsTraceConfigSource {
        &self.bind.1
    }

    pub fn database_url(&self) -> &str {
        &self.database_url.0
    }

    pub fn database_url_source(&self) -> &HerbsTraceConfigSource {
        &self.database_url.1
    }

    pub fn upload_dir(&self) -> &str {
        &self.upload_dir.0
    }

    pub fn upload_dir_source(&self) -> &HerbsTraceConfigSource {
        &self.upload_dir.1
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins.0
    }

    pub fn allowed_origins_source(&self) -> &HerbsTraceConfigSource {
        &self.allowed_origins.1
    }

    pub fn max_upload_size(&self) -> usize {
        self.max_upload_size.0
    }

    pub fn max_upload_size_source(&self) -> &HerbsTraceConfigSource {
        &self.max_upload_size.1
    }

    pub fn verbosity(&self) -> log::Level {
        self.verbosity.0
    }

    pub fn verbosity_source(&self) -> &HerbsTraceConfigSource {
        &self.verbosity.1
    }

    pub fn log_as_debug(&self) {
        debug!(
            "HerbsTrace Config: bind: {} (source: {:?})",
            self.bind(),
            self.bind_source(),
        );
        debug!(
            "HerbsTrace Config: database_url: {} (source: {:?})",
            self.database_url(),
            self.database_url_source(),
        );
        debug!(
            "HerbsTrace Config: upload_dir: {} (source: {:?})",
            self.upload_dir(),
            self.upload_dir_source(),
        );
        debug!(
            "HerbsTrace Config: allowed_origins: {:?} (source: {:?})",
            self.allowed_origins(),
            self.allowed_origins_source(),
        );
        debug!(
            "HerbsTrace Config: max_upload_size: {} (source: {:?})",
            self.max_upload_size(),
            self.max_upload_size_source(),
        );
        debug!(
            "HerbsTrace Config: verbosity: {} (source: {:?})",
            self.verbosity(),
            self.verbosity_source(),
        );
    }
}
