use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::warn;

use crate::{database::CustomerRepository, CustomersError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub active: bool,
}

/// The client supplied part of a customer
///
/// Any `id` sent alongside these fields is ignored, ids are always assigned
/// by the store or taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerData {
    pub name: String,
    pub age: i32,
    pub active: bool,
}

impl CustomerData {
    /// The demo record inserted by `POST /customers/seed`
    pub fn seed() -> Self {
        Self {
            name: "Mason".to_string(),
            age: 30,
            active: false,
        }
    }
}

impl Customer {
    #[tracing::instrument(skip(db), fields(model = "Customer"))]
    pub async fn find_all<DB: CustomerRepository>(db: &DB) -> Result<Vec<Self>> {
        db.find_all().await
    }

    #[tracing::instrument(skip(db), fields(model = "Customer"))]
    pub async fn find_by_id<DB: CustomerRepository>(id: i64, db: &DB) -> Result<Self> {
        db.find_by_id(id).await?.ok_or(CustomersError::NotFound)
    }

    /// With no age this is the same as [`Customer::find_all`]
    #[tracing::instrument(skip(db), fields(model = "Customer"))]
    pub async fn find_by_age<DB: CustomerRepository>(
        age: Option<i32>,
        db: &DB,
    ) -> Result<Vec<Self>> {
        match age {
            Some(age) => db.find_by_age(age).await,
            None => db.find_all().await,
        }
    }

    #[tracing::instrument(name = "new_customer", skip(db), fields(model = "Customer"))]
    pub async fn new<DB: CustomerRepository>(data: CustomerData, db: &DB) -> Result<Self> {
        db.insert(data).await
    }

    #[tracing::instrument(skip(db), fields(model = "Customer"))]
    pub async fn seed<DB: CustomerRepository>(db: &DB) -> Result<Self> {
        Self::new(CustomerData::seed(), db).await
    }

    /// Replaces every non-key field of the customer with `data`
    ///
    /// If the write conflicts with another request the customer is looked up
    /// again: a customer that has since been deleted is reported as
    /// `NotFound`, otherwise the conflict is returned to the caller.
    #[tracing::instrument(skip(db), fields(model = "Customer"))]
    pub async fn update<DB: CustomerRepository>(
        id: i64,
        data: CustomerData,
        db: &DB,
    ) -> Result<Self> {
        if !db.exists(id).await? {
            return Err(CustomersError::NotFound);
        }

        let mut customer = Self::find_by_id(id, db).await?;
        customer.overwrite(data);

        match db.update(&customer).await {
            Ok(()) => Ok(customer),
            Err(CustomersError::Conflict(id)) => {
                if !db.exists(id).await? {
                    return Err(CustomersError::NotFound);
                }
                warn!(id, "customer update conflicted with a concurrent write");
                Err(CustomersError::Conflict(id))
            }
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(skip(db), fields(model = "Customer"))]
    pub async fn delete<DB: CustomerRepository>(id: i64, db: &DB) -> Result<()> {
        if db.find_by_id(id).await?.is_none() {
            return Err(CustomersError::NotFound);
        }
        if !db.delete(id).await? {
            return Err(CustomersError::NotFound);
        }
        Ok(())
    }

    #[tracing::instrument(skip(db), fields(model = "Customer"))]
    pub async fn delete_all<DB: CustomerRepository>(db: &DB) -> Result<u64> {
        db.delete_all().await
    }

    fn overwrite(&mut self, data: CustomerData) {
        self.name = data.name;
        self.age = data.age;
        self.active = data.active;
    }
}
