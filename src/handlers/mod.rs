pub mod customer;
pub mod health;

pub use customer::{customer_v1_config, customer_v2_config};
pub use health::health_config;
