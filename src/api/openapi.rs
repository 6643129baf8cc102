//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, roster_handler};
use crate::domain::{
    BandSummary, BandWithMusicians, InstrumentWithMusicians, MusicianSummary, MusicianWithBand,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the roster API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Band Roster API",
        version = "0.1.0",
        description = "Read-only paginated listing of musicians, bands and instruments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        health_handler::root,
        roster_handler::list_musicians,
        roster_handler::list_bands,
        roster_handler::list_instruments,
    ),
    components(
        schemas(
            MessageResponse,
            BandSummary,
            MusicianSummary,
            MusicianWithBand,
            BandWithMusicians,
            InstrumentWithMusicians,
        )
    ),
    tags(
        (name = "Health", description = "Server status"),
        (name = "Roster", description = "Musicians, bands and instruments")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_roster_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/musicians", "/bands", "/instruments"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
