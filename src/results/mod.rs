//! Result types and normalization
//!
//! Provider records are heterogeneous; everything past the gateway works with
//! the fixed-shape [`SearchResultItem`].

mod normalizer;
mod types;

pub use normalizer::{normalize, normalize_all};
pub use types::*;
