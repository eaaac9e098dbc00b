use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

use crate::db::Store;
use crate::error::AppError;
use crate::models::logs_interaction::{self, ActiveModel as LogsInteractionActiveModel};
use crate::models::utilisateur;

#[derive(Deserialize, Validate)]
pub struct CreateInteractionLogRequest {
    pub utilisateur_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub action: String,
}

// Journal append-only: pas de PUT ni de DELETE
#[post("")]
pub async fn create_interaction_log(
    body: web::Json<CreateInteractionLogRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let body = body.into_inner();

    store.ensure_exists::<utilisateur::Entity>(body.utilisateur_id).await?;

    let log = store
        .insert(LogsInteractionActiveModel {
            utilisateur_id: Set(body.utilisateur_id),
            action: Set(body.action),
            timestamp: Set(Utc::now()),
            ..Default::default()
        })
        .await?;

    Ok(super::created("Interaction enregistrée avec succès", &log))
}

#[get("")]
pub async fn get_interaction_logs(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let logs = store.list::<logs_interaction::Entity>().await?;
    Ok(HttpResponse::Ok().json(logs))
}

#[get("/{id}")]
pub async fn get_interaction_log(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let log = store.get::<logs_interaction::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(log))
}

pub fn interaction_logs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/interaction-logs")
            .service(create_interaction_log)
            .service(get_interaction_logs)
            .service(get_interaction_log)
    );
}
