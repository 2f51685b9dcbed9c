mod customer;
mod memory;

pub use customer::{CustomerDatabase, CustomerRepository};
pub use memory::InMemoryCustomerDatabase;
