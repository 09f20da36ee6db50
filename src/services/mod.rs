pub mod customer_file_service;
pub mod customer_service;

pub use customer_file_service::*;
pub use customer_service::*;
