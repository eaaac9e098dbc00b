use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

// Table de liaison erreur <-> outil.
// La clé composite (erreur_id, outil_id) garantit l'unicité de la paire.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "erreur_outil")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub erreur_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub outil_id: i32,
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
        belongs_to = "super::outil::Entity",
        from = "Column::OutilId",
        to = "super::outil::Column::Id",
        on_delete = "Restrict"
    )]
    Outil,
}

impl Related<super::erreur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Erreur.def()
    }
}

impl Related<super::outil::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outil.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
