//! Flight records, the named conditions over them, and the demo dataset.

pub mod builder;
pub mod filters;
pub mod model;

pub use filters::FlightFilter;
pub use model::{Flight, Segment};
