use actix_web::{delete, get, post, web, HttpResponse};
use chrono::Utc;
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

use crate::db::Store;
use crate::error::AppError;
use crate::models::requete::{self, ActiveModel as RequeteActiveModel};
use crate::models::utilisateur;

#[derive(Deserialize, Validate)]
pub struct CreateRequestRequest {
    pub utilisateur_id: i32,
    #[validate(length(min = 1))]
    pub description: String,
}

#[post("")]
pub async fn create_request(
    body: web::Json<CreateRequestRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let body = body.into_inner();

    store.ensure_exists::<utilisateur::Entity>(body.utilisateur_id).await?;

    let requete = store
        .insert(RequeteActiveModel {
            utilisateur_id: Set(body.utilisateur_id),
            description: Set(body.description),
            timestamp: Set(Utc::now()),
            ..Default::default()
        })
        .await?;

    Ok(super::created("Requête créée avec succès", &requete))
}

#[get("")]
pub async fn get_requests(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let requetes = store.list::<requete::Entity>().await?;
    Ok(HttpResponse::Ok().json(requetes))
}

#[get("/{id}")]
pub async fn get_request(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let requete = store.get::<requete::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(requete))
}

#[delete("/{id}")]
pub async fn delete_request(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete::<requete::Entity, _>(path.into_inner()).await?;
    Ok(super::confirmed("Requête supprimée avec succès"))
}

pub fn requests_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/requests")
            .service(create_request)
            .service(get_requests)
            .service(get_request)
            .service(delete_request)
    );
}
