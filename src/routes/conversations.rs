use actix_web::{delete, get, post, web, HttpResponse};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;
use tracing::info;

use crate::db::Store;
use crate::error::AppError;
use crate::models::conversation::{self, ActiveModel as ConversationActiveModel};
use crate::models::utilisateur;

#[derive(Deserialize)]
pub struct CreateConversationRequest {
    pub utilisateur_id: i32,
}

/// POST /conversations - Ouvrir une conversation pour un utilisateur existant
#[post("")]
pub async fn create_conversation(
    body: web::Json<CreateConversationRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.ensure_exists::<utilisateur::Entity>(body.utilisateur_id).await?;

    let conversation = store
        .insert(ConversationActiveModel {
            utilisateur_id: Set(body.utilisateur_id),
            timestamp: Set(Utc::now()),
            ..Default::default()
        })
        .await?;
    info!("Conversation {} créée pour l'utilisateur {}", conversation.id, conversation.utilisateur_id);

    Ok(super::created("Conversation créée avec succès", &conversation))
}

#[get("")]
pub async fn get_conversations(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let conversations = store.list::<conversation::Entity>().await?;
    Ok(HttpResponse::Ok().json(conversations))
}

#[get("/{id}")]
pub async fn get_conversation(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let conversation = store.get::<conversation::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(conversation))
}

#[delete("/{id}")]
pub async fn delete_conversation(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete::<conversation::Entity, _>(path.into_inner()).await?;
    Ok(super::confirmed("Conversation supprimée avec succès"))
}

pub fn conversations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/conversations")
            .service(create_conversation)
            .service(get_conversations)
            .service(get_conversation)
            .service(delete_conversation)
    );
}
