use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "solution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::erreur_solution::Entity")]
    ErreurSolution,
}

impl Related<super::erreur_solution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ErreurSolution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
