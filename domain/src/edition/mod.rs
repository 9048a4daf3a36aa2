//! Putting a report on the page
//!
//! - [`animation`]: typewriter counter and staggered entrances
//! - [`dateline`]: masthead date and report time

pub mod animation;
pub mod dateline;
