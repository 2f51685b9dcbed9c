use actix_cors::Cors;
use actix_web::{
    dev::Server,
    http::header::{ACCEPT, CONTENT_TYPE},
    web, App, HttpServer,
};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::{database::CustomerRepository, routes::*};

const CORS_MAX_AGE_SECONDS: usize = 3600;

/// Builds the server against an already bound listener and a store handle
/// shared by every worker for the lifetime of the process
pub fn build_app<R: CustomerRepository>(
    listener: TcpListener,
    db: Arc<R>,
) -> Result<Server, std::io::Error> {
    let db = web::Data::from(db);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                Cors::default()
                    .allowed_origin_fn(|origin, _req_head| {
                        origin.as_bytes().starts_with(b"http://localhost")
                            || origin.as_bytes().starts_with(b"http://127.0.0.1")
                    })
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                    .allowed_headers(vec![ACCEPT, CONTENT_TYPE])
                    .max_age(CORS_MAX_AGE_SECONDS),
            )
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(db.clone())
            .route("/health_check", web::get().to(health_check))
            .service(web::scope("/customers").configure(customer_routes::<R>))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
