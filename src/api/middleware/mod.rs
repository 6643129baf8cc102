//! API middleware.

mod pagination;

pub use pagination::pagination_middleware;
