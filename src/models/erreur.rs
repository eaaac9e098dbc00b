use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "erreur")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::erreur_outil::Entity")]
    ErreurOutil,

    #[sea_orm(has_many = "super::erreur_solution::Entity")]
    ErreurSolution,
}

impl Related<super::erreur_outil::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ErreurOutil.def()
    }
}

impl Related<super::erreur_solution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ErreurSolution.def()
    }
}

// N↔N: erreur -> erreur_outil -> outil
impl Related<super::outil::Entity> for Entity {
    fn to() -> RelationDef {
        super::erreur_outil::Relation::Outil.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::erreur_outil::Relation::Erreur.def().rev())
    }
}

// N↔N: erreur -> erreur_solution -> solution
impl Related<super::solution::Entity> for Entity {
    fn to() -> RelationDef {
        super::erreur_solution::Relation::Solution.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::erreur_solution::Relation::Erreur.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
