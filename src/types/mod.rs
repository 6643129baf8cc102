//! Shared types used across the API layer.

mod pagination;
mod response;

pub use pagination::{Pagination, PaginationQuery};
pub use response::MessageResponse;
