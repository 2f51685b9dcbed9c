use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use customers::{
    database::{CustomerRepository, InMemoryCustomerDatabase},
    models::{Customer, CustomerData},
    CustomersError, Result,
};

pub fn customer(id: i64, name: &str, age: i32, active: bool) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        age,
        active,
    }
}

/// `{1, Barney, 25}` and `{2, Alice, 23}`, both inactive
pub fn barney_and_alice() -> InMemoryCustomerDatabase {
    InMemoryCustomerDatabase::with_customers(vec![
        customer(1, "Barney", 25, false),
        customer(2, "Alice", 23, false),
    ])
}

/// A store where every call fails, counting how often it was reached
#[derive(Default)]
pub struct FailingCustomerDatabase {
    pub calls: AtomicUsize,
}

impl FailingCustomerDatabase {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CustomersError::DatabaseError)
    }
}

#[async_trait]
impl CustomerRepository for FailingCustomerDatabase {
    async fn insert(&self, _data: CustomerData) -> Result<Customer> {
        self.fail()
    }
    async fn find_all(&self) -> Result<Vec<Customer>> {
        self.fail()
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Customer>> {
        self.fail()
    }
    async fn find_by_age(&self, _age: i32) -> Result<Vec<Customer>> {
        self.fail()
    }
    async fn update(&self, _customer: &Customer) -> Result<()> {
        self.fail()
    }
    async fn delete(&self, _id: i64) -> Result<bool> {
        self.fail()
    }
    async fn delete_all(&self) -> Result<u64> {
        self.fail()
    }
    async fn exists(&self, _id: i64) -> Result<bool> {
        self.fail()
    }
}

/// Wraps the in-memory store but reports every update as conflicting
///
/// With `delete_before_conflict` the record is removed first, which is what
/// a concurrent `DELETE` between the existence check and the write looks like.
pub struct ConflictingCustomerDatabase {
    pub inner: InMemoryCustomerDatabase,
    pub delete_before_conflict: bool,
}

#[async_trait]
impl CustomerRepository for ConflictingCustomerDatabase {
    async fn insert(&self, data: CustomerData) -> Result<Customer> {
        self.inner.insert(data).await
    }
    async fn find_all(&self) -> Result<Vec<Customer>> {
        self.inner.find_all().await
    }
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        self.inner.find_by_id(id).await
    }
    async fn find_by_age(&self, age: i32) -> Result<Vec<Customer>> {
        self.inner.find_by_age(age).await
    }
    async fn update(&self, customer: &Customer) -> Result<()> {
        if self.delete_before_conflict {
            self.inner.delete(customer.id).await?;
        }
        Err(CustomersError::Conflict(customer.id))
    }
    async fn delete(&self, id: i64) -> Result<bool> {
        self.inner.delete(id).await
    }
    async fn delete_all(&self) -> Result<u64> {
        self.inner.delete_all().await
    }
    async fn exists(&self, id: i64) -> Result<bool> {
        self.inner.exists(id).await
    }
}
