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

//! An intermediate representation of the configuration values used by the daemon, taken from
//! different sources into a common representation.

/// Displays the source of the configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HerbsTraceConfigSource {
    Default,
    Environment,
    CommandLine,
}

#[derive(Debug)]
pub struct PartialHerbsTraceConfig {
    source: HerbsTraceConfigSource,
    bind: Option<String>,
    database_url: Option<String>,
    upload_dir: Option<String>,
    allowed_origins: Option<Vec<String>>,
    max_upload_size: Option<usize>,
    verbosity: Option<log::Level>,
}

impl PartialHerbsTraceConfig {
    pub fn new(source: HerbsTraceConfigSource) -> Self {
        PartialHerbsTraceConfig {
            source,
            bind: None,
            database_url: None,
            upload_dir: None,
            allowed_origins: None,
            max_upload_size: None,
            verbosity: None,
        }
    }

    pub fn source(&self) -> HerbsTraceConfigSource {
        self.source.clone()
    }

    pub fn bind(&self) -> Option<String> {
        self.bind.clone()
    }

    pub fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }

    pub fn upload_dir(&self) -> Option<String> {
        self.upload_dir.clone()
    }

    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        self.allowed_origins.clone()
    }

    pub fn max_upload_size(&self) -> Option<usize> {
        self.max_upload_size
    }

    pub fn verbosity(&self) -> Option<log::Level> {
        self.verbosity
    }

    /// Adds a `bind` value to the `PartialHerbsTraceConfig` object.
    ///
    /// # Arguments
    ///
    /// * `bind` - Endpoint that the REST API will bind to
    ///
    pub fn with_bind(mut self, bind: Option<String>) -> Self {
        self.bind = bind;
        self
    }

    /// Adds a `database_url` value to the `PartialHerbsTraceConfig` object.
    ///
    /// # Arguments
    ///
    /// * `database_url` - A `postgres://` url or the path of a SQLite database
    ///
    pub fn with_database_url(mut self, database_url: Option<String>) -> Self {
        self.database_url = database_url;
        self
    }

    /// Adds an `upload_dir` value to the `PartialHerbsTraceConfig` object.
    ///
    /// # Arguments
    ///
    /// * `upload_dir` - Directory that uploaded images and certificates are written to
    ///
    pub fn with_upload_dir(mut self, upload_dir: Option<String>) -> Self {
        self.upload_dir = upload_dir;
        self
    }

    /// Adds an `allowed_origins` value to the `PartialHerbsTraceConfig` object.
    ///
    /// # Arguments
    ///
    /// * `allowed_origins` - Browser origins permitted to call the REST API
    ///
    pub fn with_allowed_origins(mut self, allowed_origins: Option<Vec<String>>) -> Self {
        self.allowed_origins = allowed_origins;
        self
    }

    /// Adds a `max_upload_size` value to the `PartialHerbsTraceConfig` object.
    ///
    /// # Arguments
    ///
    /// * `max_upload_size` - Largest accepted multipart request body, in bytes
    ///
    pub fn with_max_upload_size(mut self, max_upload_size: Option<usize>) -> Self {
        self.max_upload_size = max_upload_size;
        self
    }

    /// Adds a `verbosity` value to the `PartialHerbsTraceConfig` object.
    ///
    /// # Arguments
    ///
    /// * `verbosity` - Level of logging to be performed
    ///
    pub fn with_verbosity(mut self, verbosity: Option<log::Level>) -> Self {
        self.verbosity = verbosity;
        self
    }
}
