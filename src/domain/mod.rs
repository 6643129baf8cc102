//! Domain layer - Core entities as the API exposes them
//!
//! These types are independent of the storage schema; repositories map
//! query rows into them.

pub mod roster;

pub use roster::{
    BandSummary, BandWithMusicians, InstrumentWithMusicians, MusicianSummary, MusicianWithBand,
};
