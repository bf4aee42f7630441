//! Shared domain types, errors, and validation helpers for the Ceiba
//! research registry.

pub mod error;
pub mod types;
pub mod validation;
