// Common test utilities
pub mod harness;

pub use harness::*;
