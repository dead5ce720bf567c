//! Filter in-memory record collections with composable predicates.
//!
//! Callers pass filter lists: predicates inside one list are combined with AND,
//! and the lists themselves are combined with OR. A [`FilterEngine`] owns a
//! non-empty dataset and applies the combined predicate either on the calling
//! thread or across a rayon worker pool, always returning matches in source
//! order.

pub mod error;
pub mod filter;
pub mod flight;

pub use error::{FilterError, Result};
pub use filter::config::FilterConfig;
pub use filter::engine::FilterEngine;
pub use filter::predicate::{always, combine, negate, predicate, FilterList, Predicate};
