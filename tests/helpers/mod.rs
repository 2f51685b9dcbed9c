#![allow(dead_code)]
mod app;
mod database;
mod reqwest;

pub use self::reqwest::*;
pub use app::{spawn_app, spawn_app_with, TestApp};
pub use database::*;
pub use postgres::{configure_database, test_database_settings};

use lazy_static::lazy_static;
use serde_json::json;

use customers::telemetry::{generate_subscriber, init_subscriber};

lazy_static! {
    /// To ensure logs are only outputted in tests when required, by default
    /// tests run with no logs being captured
    ///
    /// In order to set logs to be captured during tests run them with:
    /// `TEST_LOG=true cargo test | bunyan`
    pub static ref TRACING: () = {
        let filter = String::from("debug");
        let name = String::from("test");
        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(generate_subscriber(name, filter, std::io::stdout));
        } else {
            init_subscriber(generate_subscriber(name, filter, std::io::sink));
        }
    };

    pub static ref DEFAULT_CUSTOMER: serde_json::Value = {
        json!({
            "name": "Michael",
            "age": 50,
            "active": false
        })
    };
}
