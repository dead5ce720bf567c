//! Filter layer: predicate combination and dataset evaluation.
//!
//! Architecture:
//! ```text
//!   [[p1, p2], [p3]]          filter lists supplied per call
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ predicate  │  AND within a list, OR across lists → one predicate
//!   └───────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │  engine    │  owned dataset, sequential or pooled evaluation
//!   └───────────┘
//!        │
//!        ▼
//!   Vec<T> in source order
//! ```

pub mod config;
pub mod engine;
pub mod predicate;
