pub mod customers;

pub use customers as customer_entity;
