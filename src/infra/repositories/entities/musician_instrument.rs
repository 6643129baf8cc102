//! Musician/instrument join table. Its columns are never exposed by the API.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "MusicianInstruments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "musicianId")]
    pub musician_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "instrumentId")]
    pub instrument_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::musician::Entity",
        from = "Column::MusicianId",
        to = "super::musician::Column::Id"
    )]
    Musician,
    #[sea_orm(
        belongs_to = "super::instrument::Entity",
        from = "Column::InstrumentId",
        to = "super::instrument::Column::Id"
    )]
    Instrument,
}

impl Related<super::musician::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Musician.def()
    }
}

impl Related<super::instrument::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instrument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
