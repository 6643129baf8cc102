//! Band database entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Bands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::musician::Entity")]
    Musician,
}

impl Related<super::musician::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Musician.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
