//! Roster domain types: the public shape of musicians, bands and instruments.
//!
//! Each type carries exactly the attributes the API exposes. Storage-only
//! columns (timestamps, foreign keys, join rows) never reach these structs.

use serde::Serialize;
use utoipa::ToSchema;

/// Band as nested inside a musician
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BandSummary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "The Falling Box")]
    pub name: String,
}

/// Musician as nested inside a band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MusicianSummary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Adam")]
    pub first_name: String,
    #[schema(example = "Appleby")]
    pub last_name: String,
}

/// Musician with the band they belong to, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MusicianWithBand {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "Band")]
    pub band: Option<BandSummary>,
}

/// Band with its members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BandWithMusicians {
    pub id: i32,
    pub name: String,
    #[serde(rename = "Musicians")]
    pub musicians: Vec<MusicianSummary>,
}

/// Instrument with the musicians who play it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct InstrumentWithMusicians {
    pub id: i32,
    #[serde(rename = "type")]
    #[schema(example = "piano")]
    pub instrument_type: String,
    #[serde(rename = "Musicians")]
    pub musicians: Vec<MusicianWithBand>,
}
