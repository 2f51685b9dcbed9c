use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::{
    database::CustomerRepository,
    models::{Customer, CustomerData},
    CustomersError, Result,
};

/// Process local customer store
///
/// Ids are handed out from an atomic sequence starting at 1 and are never
/// reused, mirroring a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDatabase {
    customers: RwLock<BTreeMap<i64, Customer>>,
    last_id: AtomicI64,
}

impl InMemoryCustomerDatabase {
    /// Creates a store already holding `customers`, new ids continue after
    /// the largest id provided.
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let customers: BTreeMap<i64, Customer> =
            customers.into_iter().map(|c| (c.id, c)).collect();
        let last_id = customers.keys().next_back().copied().unwrap_or(0);
        Self {
            customers: RwLock::new(customers),
            last_id: AtomicI64::new(last_id),
        }
    }

    fn next_id(&self) -> i64 {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerDatabase {
    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn insert(&self, data: CustomerData) -> Result<Customer> {
        let customer = Customer {
            id: self.next_id(),
            name: data.name,
            age: data.age,
            active: data.active,
        };
        self.customers
            .write()
            .await
            .insert(customer.id, customer.clone());
        Ok(customer)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn find_all(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.read().await.values().cloned().collect())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn find_by_age(&self, age: i32) -> Result<Vec<Customer>> {
        Ok(self
            .customers
            .read()
            .await
            .values()
            .filter(|c| c.age == age)
            .cloned()
            .collect())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn update(&self, customer: &Customer) -> Result<()> {
        match self.customers.write().await.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer.clone();
                Ok(())
            }
            None => Err(CustomersError::Conflict(customer.id)),
        }
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.customers.write().await.remove(&id).is_some())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn delete_all(&self) -> Result<u64> {
        let mut customers = self.customers.write().await;
        let removed = customers.len() as u64;
        customers.clear();
        Ok(removed)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer_memory"))]
    async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.customers.read().await.contains_key(&id))
    }
}
