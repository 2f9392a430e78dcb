//! Core calculator logic.
//!
//! - [`normalize`] - Parse command-line tokens into a [`Query`]
//! - [`compute`] - Derive the subnet fields for a query

mod engine;
mod normalize;

// Re-export public functions
pub use engine::{compute, compute_query, private_overflow};
pub use normalize::{normalize, Query, Request};
