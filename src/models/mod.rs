pub mod common;
pub mod customer;
pub mod pagination;

pub use common::*;
pub use customer::*;
pub use pagination::*;
