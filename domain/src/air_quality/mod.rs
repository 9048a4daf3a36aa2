//! Air quality classification
//!
//! - [`index`]: AQI bands, headline text, print colors and scale positions
//! - [`pollutant`]: per-pollutant breakpoint tables and severity levels

pub mod index;
pub mod pollutant;
