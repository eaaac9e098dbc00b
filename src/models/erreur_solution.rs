use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "erreur_solution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub erreur_id: i32,
    pub solution_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::erreur::Entity",
        from = "Column::ErreurId",
        to = "super::erreur::Column::Id",
        on_delete = "Restrict"
    )]
    Erreur,

    #[sea_orm(
        belongs_to = "super::solution::Entity",
        from = "Column::SolutionId",
        to = "super::solution::Column::Id",
        on_delete = "Restrict"
    )]
    Solution,
}

impl Related<super::erreur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Erreur.def()
    }
}

impl Related<super::solution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Solution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
