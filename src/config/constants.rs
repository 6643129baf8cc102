//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Default starting page number (1-indexed, 0 means "fetch all")
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const SIZE_PARAM: &str = "size";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Message returned by the root endpoint
pub const ROOT_MESSAGE: &str = "API server is running";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://db/dev.db?mode=ro";
