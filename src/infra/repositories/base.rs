//! Query helpers shared by all repositories.

use sea_orm::QuerySelect;

use crate::types::Pagination;

/// Applies a resolved [`Pagination`] window to any select query.
pub trait PaginateQuery: QuerySelect + Sized {
    /// Add OFFSET, and LIMIT unless the window is unbounded.
    fn page_window(self, pagination: Pagination) -> Self {
        let query = self.offset(pagination.offset);
        match pagination.limit {
            Some(limit) => query.limit(limit),
            None => query,
        }
    }
}

impl<Q: QuerySelect> PaginateQuery for Q {}
