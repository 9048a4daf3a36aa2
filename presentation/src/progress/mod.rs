//! Progress reporting while a prediction is in flight

pub mod reporter;
