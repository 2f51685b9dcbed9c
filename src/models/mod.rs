mod customer;

pub use customer::{Customer, CustomerData};
