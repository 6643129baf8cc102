//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
pub mod entities;
mod roster_repository;

pub use base::PaginateQuery;
pub use roster_repository::{RosterRepository, RosterStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use roster_repository::MockRosterRepository;
