//! Instrument database entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Instruments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub instrument_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::musician_instrument::Entity")]
    MusicianInstrument,
}

impl Related<super::musician::Entity> for Entity {
    fn to() -> RelationDef {
        super::musician_instrument::Relation::Musician.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::musician_instrument::Relation::Instrument.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
