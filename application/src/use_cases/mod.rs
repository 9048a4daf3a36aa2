//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod check_service;
pub mod run_prediction;

#[cfg(test)]
pub(crate) mod test_support;
