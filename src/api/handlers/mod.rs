//! HTTP request handlers.

pub mod health_handler;
pub mod roster_handler;

pub use health_handler::health_routes;
pub use roster_handler::roster_routes;
