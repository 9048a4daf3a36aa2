//! Reader inputs
//!
//! - [`profile::ReaderProfile`]: validated age, gender and parent status
//! - [`profile::PredictRequest`]: the wire body sent to `/predict`

pub mod profile;
