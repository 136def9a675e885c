//! Web server module
//!
//! Provides the HTTP API and the search page.

mod error;
mod handlers;
mod routes;
mod state;
mod templates;

pub use handlers::SearchRequest;
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
