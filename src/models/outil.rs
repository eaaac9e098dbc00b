use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "outil")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::erreur_outil::Entity")]
    ErreurOutil,
}

impl Related<super::erreur_outil::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ErreurOutil.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
