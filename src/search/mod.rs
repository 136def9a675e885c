//! Search orchestration module
//!
//! Turns a user query plus preset into provider parameters, runs the
//! provider call and shapes the response.

mod builder;
mod executor;
mod models;

pub use builder::RequestBuilder;
pub use executor::SearchService;
pub use models::*;
