//! Musician database entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Musicians")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "firstName")]
    pub first_name: String,
    #[sea_orm(column_name = "lastName")]
    pub last_name: String,
    /// NULL when the musician is not in a band
    #[sea_orm(column_name = "bandId")]
    pub band_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::band::Entity",
        from = "Column::BandId",
        to = "super::band::Column::Id"
    )]
    Band,
    #[sea_orm(has_many = "super::musician_instrument::Entity")]
    MusicianInstrument,
}

impl Related<super::band::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Band.def()
    }
}

impl Related<super::instrument::Entity> for Entity {
    fn to() -> RelationDef {
        super::musician_instrument::Relation::Instrument.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::musician_instrument::Relation::Musician.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
