pub mod adapters;
pub mod core;
pub mod error;
#[cfg(any(test, feature = "mocks"))]
pub mod memory;
pub mod utils;
