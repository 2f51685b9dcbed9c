use std::net::TcpListener;
use std::sync::Arc;

use customers::database::{CustomerRepository, InMemoryCustomerDatabase};

use crate::helpers::TRACING;

pub struct TestApp<R> {
    pub address: String,
    pub db: Arc<R>,
}

/// Spawns the app against an empty in-memory store
pub async fn spawn_app() -> TestApp<InMemoryCustomerDatabase> {
    spawn_app_with(InMemoryCustomerDatabase::default()).await
}

pub async fn spawn_app_with<R: CustomerRepository>(db: R) -> TestApp<R> {
    lazy_static::initialize(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let db = Arc::new(db);
    let server = customers::build_app(listener, Arc::clone(&db)).expect("failed to bind address");

    let _ = tokio::spawn(server);
    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        db,
    }
}

impl<R> TestApp<R> {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
