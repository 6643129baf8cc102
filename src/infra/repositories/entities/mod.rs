//! SeaORM entity definitions
//!
//! These mirror the existing relational schema and are separate from the
//! domain types the API serializes.

pub mod band;
pub mod instrument;
pub mod musician;
pub mod musician_instrument;

pub use band::Entity as BandEntity;
pub use instrument::Entity as InstrumentEntity;
pub use musician::Entity as MusicianEntity;
pub use musician_instrument::Entity as MusicianInstrumentEntity;
