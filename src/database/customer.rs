use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, PgPool};

use crate::{
    models::{Customer, CustomerData},
    CustomersError, Result,
};

/// Postgres `serialization_failure`
const SERIALIZATION_FAILURE: &str = "40001";

/// The record store backing the customer endpoints
///
/// Every call is expected to be atomic on its own, nothing here spans
/// more than a single statement.
#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    async fn insert(&self, data: CustomerData) -> Result<Customer>;
    async fn find_all(&self) -> Result<Vec<Customer>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;
    async fn find_by_age(&self, age: i32) -> Result<Vec<Customer>>;
    /// Returns `CustomersError::Conflict` when nothing was written
    async fn update(&self, customer: &Customer) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn delete_all(&self) -> Result<u64>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[derive(Debug, Clone)]
pub struct CustomerDatabase {
    pool: PgPool,
}

impl CustomerDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerDatabase {
    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn insert(&self, data: CustomerData) -> Result<Customer> {
        let customer = query_as::<_, Customer>(
            r#"
            INSERT INTO customers ( name, age, active )
            VALUES ( $1, $2, $3 )
            RETURNING id, name, age, active
            "#,
        )
        .bind(&data.name)
        .bind(data.age)
        .bind(data.active)
        .fetch_one(&self.pool)
        .await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn find_all(&self) -> Result<Vec<Customer>> {
        let customers = query_as::<_, Customer>(
            r#"
            SELECT id, name, age, active FROM customers ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customer = query_as::<_, Customer>(
            r#"
            SELECT id, name, age, active FROM customers WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn find_by_age(&self, age: i32) -> Result<Vec<Customer>> {
        let customers = query_as::<_, Customer>(
            r#"
            SELECT id, name, age, active FROM customers WHERE age = $1 ORDER BY id
            "#,
        )
        .bind(age)
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn update(&self, customer: &Customer) -> Result<()> {
        let result = query(
            r#"
            UPDATE customers
            SET name = $1, age = $2, active = $3
            WHERE id = $4
            "#,
        )
        .bind(&customer.name)
        .bind(customer.age)
        .bind(customer.active)
        .bind(customer.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_serialization_failure(&e) {
                CustomersError::Conflict(customer.id)
            } else {
                e.into()
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(CustomersError::Conflict(customer.id));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn delete(&self, id: i64) -> Result<bool> {
        let result = query(
            r#"
            DELETE FROM customers WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn delete_all(&self) -> Result<u64> {
        let result = query(
            r#"
            DELETE FROM customers
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn exists(&self, id: i64) -> Result<bool> {
        let exists = query_scalar::<_, bool>(
            r#"
            SELECT EXISTS ( SELECT 1 FROM customers WHERE id = $1 )
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

fn is_serialization_failure(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db_error| db_error.code())
        .map_or(false, |code| code == SERIALIZATION_FAILURE)
}
