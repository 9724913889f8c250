//! Core logic — types, AppScalefile storage, parsing, invocation building.

pub mod error;
pub mod invocation;
pub mod parser;
pub mod store;
pub mod types;
