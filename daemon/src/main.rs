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

#[macro_use]
extern crate log;

mod config;
mod database;
mod error;

use std::process;

use clap::{App, Arg};
use flexi_logger::{LogSpecBuilder, Logger};
use herbstrace_sdk::rest_api::actix_web_4::{self, RestApiSettings, ServiceState};
use herbstrace_sdk::uploads::UploadDirectory;

use crate::config::{
    verbosity, ClapPartialHerbsTraceConfigBuilder, DefaultPartialHerbsTraceConfigBuilder,
    EnvPartialHerbsTraceConfigBuilder, HerbsTraceConfigBuilder, PartialHerbsTraceConfigBuilder,
};
use crate::database::create_store_state;
use crate::error::DaemonError;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

async fn run() -> Result<(), DaemonError> {
    let matches = App::new(APP_NAME)
        .version(VERSION)
        .author("HerbsTrace Contributors")
        .about("REST API daemon for HerbsTrace")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log verbosely"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .arg(
            Arg::with_name("bind")
                .short("b")
                .long("bind")
                .takes_value(true)
                .help("Connection endpoint for the REST API"),
        )
        .arg(
            Arg::with_name("database_url")
                .long("database-url")
                .takes_value(true)
                .help("PostgreSQL url or SQLite database path"),
        )
        .arg(
            Arg::with_name("upload_dir")
                .long("upload-dir")
                .takes_value(true)
                .help("Directory uploaded files are written to and served from"),
        )
        .arg(
            Arg::with_name("allowed_origin")
                .long("allowed-origin")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Browser origin allowed to call the REST API; may be repeated"),
        )
        .arg(
            Arg::with_name("max_upload_size")
                .long("max-upload-size")
                .takes_value(true)
                .help("Largest accepted multipart request body, in bytes"),
        )
        .get_matches();

    let log_level = verbosity(&matches)
        .unwrap_or(log::Level::Info)
        .to_level_filter();
    let mut log_spec_builder = LogSpecBuilder::new();
    log_spec_builder.default(log_level);
    log_spec_builder.module("actix_http", log::LevelFilter::Warn);
    log_spec_builder.module("mio", log::LevelFilter::Warn);
    log_spec_builder.module("tokio", log::LevelFilter::Warn);

    let _logger = Logger::with(log_spec_builder.build()).start()?;

    let command_line_config = ClapPartialHerbsTraceConfigBuilder::new(matches).build()?;

    let config = HerbsTraceConfigBuilder::default()
        .with_partial_config(command_line_config)
        .with_partial_config(EnvPartialHerbsTraceConfigBuilder::new().build()?)
        .with_partial_config(DefaultPartialHerbsTraceConfigBuilder::new().build()?)
        .build()?;
    config.log_as_debug();

    let store_state = create_store_state(config.database_url())?;
    let service_state = ServiceState::new(UploadDirectory::new(config.upload_dir()))
        .with_max_upload_size(config.max_upload_size());

    info!("Starting HerbsTrace REST API on {}", config.bind());

    actix_web_4::run(
        RestApiSettings {
            bind: config.bind().to_string(),
            allowed_origins: config.allowed_origins().to_vec(),
        },
        store_state,
        service_state,
    )
    .await
    .map_err(DaemonError::RestApiError)
}

#[actix_web::main]
async fn main() {
    match run().await {
        Ok(()) => (),
        // No logger is installed when it failed to start
        Err(err @ DaemonError::LoggingInitializationError(_)) => {
            eprintln!("{}", err);
            process::exit(1);
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
