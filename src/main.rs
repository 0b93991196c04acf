use std::env;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use log::debug;

mod cli;
mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod utils;

use cli::Cli;
use config::KeyConfig;
use handlers::{report_error, Status};
use routes::Route;
use services::KeyStore;

fn main() -> ExitCode {
    dotenv().ok();

    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(log_level));

    let route = Cli::parse().route();
    debug!("Dispatching {:?}", route);

    let result = match route {
        Route::Help => routes::show_help(),
        route => KeyConfig::load().and_then(|config| routes::dispatch(route, &KeyStore::new(config))),
    };

    match result {
        Ok(Status::Completed) => ExitCode::SUCCESS,
        Ok(Status::CompletedWithErrors) => ExitCode::FAILURE,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
