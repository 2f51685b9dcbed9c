use customers::{
    build_app,
    configuration::StoreBackend,
    database::{CustomerDatabase, InMemoryCustomerDatabase},
    get_configuration,
    telemetry::{generate_subscriber, init_subscriber},
};
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use tracing::info;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let subscriber = generate_subscriber(
        String::from("customers"),
        String::from("info"),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("failed to read configuration");

    let listener = TcpListener::bind(configuration.application.address())?;
    info!(
        address = %configuration.application.address(),
        store = ?configuration.application.store,
        "starting customers service"
    );

    match configuration.application.store {
        StoreBackend::Postgres => {
            let connection = PgPoolOptions::new()
                .acquire_timeout(std::time::Duration::from_secs(2))
                .connect_lazy_with(configuration.database.with_db());

            sqlx::migrate!("./migrations")
                .run(&connection)
                .await
                .expect("failed to run database migrations");

            build_app(listener, Arc::new(CustomerDatabase::new(connection)))?.await
        }
        StoreBackend::Memory => {
            build_app(listener, Arc::new(InMemoryCustomerDatabase::default()))?.await
        }
    }
}
