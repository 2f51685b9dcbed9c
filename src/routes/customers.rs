use actix_web::{http::header::LOCATION, web, HttpResponse};

use crate::{
    database::CustomerRepository,
    models::{Customer, CustomerData},
    CustomersError,
};

/// Registers the customer endpoints against the store `R`
///
/// Literal segments are registered ahead of `/{id}` so that
/// `DELETE /delete` is never read as an id.
pub fn customer_routes<R: CustomerRepository>(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_customers::<R>))
        .route("/age", web::get().to(get_customers_by_any_age::<R>))
        .route("/age/{age}", web::get().to(get_customers_by_age::<R>))
        .route("/create", web::post().to(create_customer::<R>))
        .route("/seed", web::post().to(seed_customers::<R>))
        .route("/delete", web::delete().to(delete_all_customers::<R>))
        .route("/{id}", web::get().to(get_customer_by_id::<R>))
        .route("/{id}", web::put().to(update_customer::<R>))
        .route("/{id}", web::delete().to(delete_customer::<R>));
}

#[tracing::instrument(name = "list_customers", skip(db))]
pub async fn list_customers<R: CustomerRepository>(
    db: web::Data<R>,
) -> Result<HttpResponse, CustomersError> {
    let customers = Customer::find_all(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(customers))
}

#[tracing::instrument(name = "get_customer_by_id", skip(db))]
pub async fn get_customer_by_id<R: CustomerRepository>(
    db: web::Data<R>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CustomersError> {
    let customer = Customer::find_by_id(id.into_inner(), db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

#[tracing::instrument(name = "get_customers_by_age", skip(db))]
pub async fn get_customers_by_age<R: CustomerRepository>(
    db: web::Data<R>,
    age: web::Path<i32>,
) -> Result<HttpResponse, CustomersError> {
    let customers = Customer::find_by_age(Some(age.into_inner()), db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(customers))
}

#[tracing::instrument(name = "get_customers_by_any_age", skip(db))]
pub async fn get_customers_by_any_age<R: CustomerRepository>(
    db: web::Data<R>,
) -> Result<HttpResponse, CustomersError> {
    let customers = Customer::find_by_age(None, db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(customers))
}

#[tracing::instrument(name = "create_customer", skip(db, body))]
pub async fn create_customer<R: CustomerRepository>(
    db: web::Data<R>,
    body: web::Json<CustomerData>,
) -> Result<HttpResponse, CustomersError> {
    let customer = Customer::new(body.into_inner(), db.get_ref()).await?;
    Ok(created(customer))
}

#[tracing::instrument(name = "seed_customers", skip(db))]
pub async fn seed_customers<R: CustomerRepository>(
    db: web::Data<R>,
) -> Result<HttpResponse, CustomersError> {
    let customer = Customer::seed(db.get_ref()).await?;
    Ok(created(customer))
}

#[tracing::instrument(name = "update_customer", skip(db, body))]
pub async fn update_customer<R: CustomerRepository>(
    db: web::Data<R>,
    id: web::Path<i64>,
    body: web::Json<CustomerData>,
) -> Result<HttpResponse, CustomersError> {
    let customer = Customer::update(id.into_inner(), body.into_inner(), db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

#[tracing::instrument(name = "delete_customer", skip(db))]
pub async fn delete_customer<R: CustomerRepository>(
    db: web::Data<R>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CustomersError> {
    Customer::delete(id.into_inner(), db.get_ref()).await?;
    Ok(HttpResponse::Ok().body("Successfully deleted customer"))
}

#[tracing::instrument(name = "delete_all_customers", skip(db))]
pub async fn delete_all_customers<R: CustomerRepository>(
    db: web::Data<R>,
) -> Result<HttpResponse, CustomersError> {
    let removed = Customer::delete_all(db.get_ref()).await?;
    tracing::info!(removed, "deleted all customers");
    Ok(HttpResponse::Ok().body("Deleted All Customers"))
}

fn created(customer: Customer) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((LOCATION, format!("/customers/{}", customer.id)))
        .json(customer)
}
