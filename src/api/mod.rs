//! API module
//!
//! HTTP endpoints and the customer lookup guard.

pub mod extract;
pub mod routes;

pub use routes::create_router;
