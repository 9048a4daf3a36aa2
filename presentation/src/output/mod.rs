//! Report formatters
//!
//! - [`newspaper`]: the full edition, section by section
//! - [`brief`]: one-paragraph summary
//! - [`json`]: raw payload
//! - [`alerts`]: blocking messages shown instead of a report

pub mod alerts;
pub mod brief;
pub mod formatter;
pub mod json;
pub mod newspaper;

#[cfg(test)]
pub(crate) mod test_support;
