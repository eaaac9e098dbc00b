use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use validator::Validate;

use crate::db::Store;
use crate::error::AppError;
use crate::models::conversation;
use crate::models::message::{self, ActiveModel as MessageActiveModel, Sender};

// `sender` hors de "user" | "bot" est refusé dès la désérialisation
#[derive(Deserialize, Validate)]
pub struct CreateMessageRequest {
    pub conversation_id: i32,
    pub sender: Sender,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateMessageRequest {
    pub sender: Option<Sender>,
    #[validate(length(min = 1))]
    pub message: Option<String>,
}

/// POST /messages - Ajouter un message à une conversation existante
#[post("")]
pub async fn create_message(
    body: web::Json<CreateMessageRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let body = body.into_inner();

    store.ensure_exists::<conversation::Entity>(body.conversation_id).await?;

    let message = store
        .insert(MessageActiveModel {
            conversation_id: Set(body.conversation_id),
            sender: Set(body.sender),
            message: Set(body.message),
            timestamp: Set(Utc::now()),
            ..Default::default()
        })
        .await?;

    Ok(super::created("Message créé avec succès", &message))
}

#[get("")]
pub async fn get_messages(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let messages = store.list::<message::Entity>().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[get("/{id}")]
pub async fn get_message(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let message = store.get::<message::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(message))
}

/// PUT /messages/{id} - Corriger le texte et/ou l'auteur d'un message
#[put("/{id}")]
pub async fn update_message(
    path: web::Path<i32>,
    body: web::Json<UpdateMessageRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let body = body.into_inner();

    let message = store.get::<message::Entity, _>(path.into_inner()).await?;
    let mut active_model: MessageActiveModel = message.into();

    if let Some(sender) = body.sender {
        active_model.sender = Set(sender);
    }
    if let Some(text) = body.message {
        active_model.message = Set(text);
    }

    if active_model.is_changed() {
        store.update(active_model).await?;
    }
    Ok(super::confirmed("Message mis à jour avec succès"))
}

#[delete("/{id}")]
pub async fn delete_message(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete::<message::Entity, _>(path.into_inner()).await?;
    Ok(super::confirmed("Message supprimé avec succès"))
}

pub fn messages_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/messages")
            .service(create_message)
            .service(get_messages)
            .service(get_message)
            .service(update_message)
            .service(delete_message)
    );
}
