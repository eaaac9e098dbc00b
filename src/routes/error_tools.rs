use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::Set;
use serde::Deserialize;

use crate::db::Store;
use crate::error::AppError;
use crate::models::erreur_outil::{self, ActiveModel as ErreurOutilActiveModel};
use crate::models::{erreur, outil};

// Lien erreur <-> outil, identifié par la paire (erreur_id, outil_id)
#[derive(Deserialize)]
pub struct CreateErrorToolRequest {
    pub erreur_id: i32,
    pub outil_id: i32,
}

/// POST /error-tools - Lier un outil à une erreur (paire unique)
#[post("")]
pub async fn create_error_tool(
    body: web::Json<CreateErrorToolRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.ensure_exists::<erreur::Entity>(body.erreur_id).await?;
    store.ensure_exists::<outil::Entity>(body.outil_id).await?;

    let link = store
        .insert(ErreurOutilActiveModel {
            erreur_id: Set(body.erreur_id),
            outil_id: Set(body.outil_id),
        })
        .await?;

    Ok(super::created("Lien erreur-outil créé avec succès", &link))
}

#[get("")]
pub async fn get_error_tools(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let links = store.list::<erreur_outil::Entity>().await?;
    Ok(HttpResponse::Ok().json(links))
}

#[get("/{erreur_id}/{outil_id}")]
pub async fn get_error_tool(
    path: web::Path<(i32, i32)>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let link = store.get::<erreur_outil::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(link))
}

#[delete("/{erreur_id}/{outil_id}")]
pub async fn delete_error_tool(
    path: web::Path<(i32, i32)>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete::<erreur_outil::Entity, _>(path.into_inner()).await?;
    Ok(super::confirmed("Lien erreur-outil supprimé avec succès"))
}

pub fn error_tools_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/error-tools")
            .service(create_error_tool)
            .service(get_error_tools)
            .service(get_error_tool)
            .service(delete_error_tool)
    );
}
