use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "utilisateur")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)] // Ne jamais exposer le hash en JSON
    pub mdp: String, // Format: pbkdf2:sha256:iterations$salt$hash
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::conversation::Entity")]
    Conversation,

    #[sea_orm(has_many = "super::logs_interaction::Entity")]
    LogsInteraction,

    #[sea_orm(has_many = "super::requete::Entity")]
    Requete,
}

impl Related<super::conversation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conversation.def()
    }
}

impl Related<super::logs_interaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LogsInteraction.def()
    }
}

impl Related<super::requete::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requete.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
