pub mod configuration;
pub mod database;
mod error;
pub mod models;
pub mod routes;
mod startup;
pub mod telemetry;

pub use configuration::get_configuration;
pub use error::CustomersError;
pub use startup::build_app;

pub type Result<T> = std::result::Result<T, CustomersError>;
