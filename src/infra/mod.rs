//! Infrastructure layer - External systems integration
//!
//! Database connection handling and the repositories that query it.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{RosterRepository, RosterStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockRosterRepository;
