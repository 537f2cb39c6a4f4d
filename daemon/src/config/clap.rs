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

//! `PartialHerbsTraceConfig` builder using values from the daemon's command line arguments.

use clap::ArgMatches;

use super::{
    error::ConfigurationError, HerbsTraceConfigSource, PartialHerbsTraceConfig,
    PartialHerbsTraceConfigBuilder,
};

/// `PartialHerbsTraceConfig` builder using command line arguments, represented as clap
/// `ArgMatches`.
pub struct ClapPartialHerbsTraceConfigBuilder<'a> {
    matches: ArgMatches<'a>,
}

impl<'a> ClapPartialHerbsTraceConfigBuilder<'a> {
    pub fn new(matches: ArgMatches<'a>) -> Self {
        ClapPartialHerbsTraceConfigBuilder { matches }
    }
}

/// Returns the log level requested with `-q` or `-v`, if any.
///
/// Only the verbosity flags are read, so the logger can be started before the remaining
/// arguments are validated.
pub fn verbosity(matches: &ArgMatches) -> Option<log::Level> {
    if matches.is_present("quiet") {
        Some(log::Level::Error)
    } else {
        match matches.occurrences_of("verbose") {
            0 => None,
            1 => Some(log::Level::Debug),
            _ => Some(log::Level::Trace),
        }
    }
}

impl PartialHerbsTraceConfigBuilder for ClapPartialHerbsTraceConfigBuilder<'_> {
    fn build(self) -> Result<PartialHerbsTraceConfig, ConfigurationError> {
        let max_upload_size = self
            .matches
            .value_of("max_upload_size")
            .map(|size| {
                size.parse::<usize>().map_err(|_| {
                    ConfigurationError::InvalidArgument(format!(
                        "--max-upload-size must be a number of bytes, found '{}'",
                        size
                    ))
                })
            })
            .transpose()?;

        let verbosity = verbosity(&self.matches);

        Ok(
            PartialHerbsTraceConfig::new(HerbsTraceConfigSource::CommandLine)
                .with_bind(self.matches.value_of("bind").map(String::from))
                .with_database_url(self.matches.value_of("database_url").map(String::from))
                .with_upload_dir(self.matches.value_of("upload_dir").map(String::from))
                .with_allowed_origins(
                    self.matches
                        .values_of("allowed_origin")
                        .map(|origins| origins.map(String::from).collect()),
                )
                .with_max_upload_size(max_upload_size)
                .with_verbosity(verbosity),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::{App, Arg};

    static EXAMPLE_BIND: &str = "127.0.0.1:8000";
    static EXAMPLE_DATABASE_URL: &str = "postgres://herbs:herbs@db:5432/herbstrace";

    // Create an `ArgMatches` object to construct a `ClapPartialHerbsTraceConfigBuilder`
    fn create_arg_matches(args: Vec<&str>) -> ArgMatches<'static> {
        App::new("HerbsTrace-Config-Test")
            .arg(Arg::with_name("verbose").short("v").multiple(true))
            .arg(Arg::with_name("quiet").short("q").long("quiet"))
            .arg(Arg::with_name("bind").short("b").long("bind").takes_value(true))
            .arg(
                Arg::with_name("database_url")
                    .long("database-url")
                    .takes_value(true),
            )
            .arg(Arg::with_name("upload_dir").long("upload-dir").takes_value(true))
            .arg(
                Arg::with_name("allowed_origin")
                    .long("allowed-origin")
                    .takes_value(true)
                    .multiple(true)
                    .number_of_values(1),
            )
            .arg(
                Arg::with_name("max_upload_size")
                    .long("max-upload-size")
                    .takes_value(true),
            )
            .get_matches_from(args)
    }

    #[test]
    /// Validate a `PartialHerbsTraceConfig` object can be constructed using command line
    /// arguments.
    fn test_setup_command_line_config() {
        let matches = create_arg_matches(vec![
            "HerbsTrace-Config-Test",
            "-vv",
            "-b",
            EXAMPLE_BIND,
            "--database-url",
            EXAMPLE_DATABASE_URL,
            "--allowed-origin",
            "https://a.example.com",
            "--allowed-origin",
            "https://b.example.com",
            "--max-upload-size",
            "1024",
        ]);

        let config = ClapPartialHerbsTraceConfigBuilder::new(matches)
            .build()
            .expect("Unable to build command line config");

        assert_eq!(config.source(), HerbsTraceConfigSource::CommandLine);
        assert_eq!(config.bind(), Some(EXAMPLE_BIND.to_string()));
        assert_eq!(config.database_url(), Some(EXAMPLE_DATABASE_URL.to_string()));
        assert_eq!(config.upload_dir(), None);
        assert_eq!(
            config.allowed_origins(),
            Some(vec![
                "https://a.example.com".to_string(),
                "https://b.example.com".to_string()
            ])
        );
        assert_eq!(config.max_upload_size(), Some(1024));
        assert_eq!(config.verbosity(), Some(log::Level::Trace));
    }

    #[test]
    fn test_quiet_and_unset_arguments() {
        let matches = create_arg_matches(vec!["HerbsTrace-Config-Test", "-q"]);

        let config = ClapPartialHerbsTraceConfigBuilder::new(matches)
            .build()
            .expect("Unable to build command line config");

        assert_eq!(config.verbosity(), Some(log::Level::Error));
        assert_eq!(config.bind(), None);
        assert_eq!(config.allowed_origins(), None);
    }

    /// An unparsable upload size is rejected, while the verbosity flags still resolve so the
    /// error can be logged.
    #[test]
    fn test_invalid_max_upload_size() {
        let matches = create_arg_matches(vec![
            "HerbsTrace-Config-Test",
            "-v",
            "--max-upload-size",
            "abc",
        ]);

        assert_eq!(verbosity(&matches), Some(log::Level::Debug));

        match ClapPartialHerbsTraceConfigBuilder::new(matches).build() {
            Err(ConfigurationError::InvalidArgument(msg)) => assert_eq!(
                msg,
                "--max-upload-size must be a number of bytes, found 'abc'"
            ),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}
