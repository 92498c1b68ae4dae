//! HTTP surface for the encouragement classifier.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
