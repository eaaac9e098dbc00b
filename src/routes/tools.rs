use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

use crate::db::Store;
use crate::error::AppError;
use crate::models::outil::{self, ActiveModel as OutilActiveModel};

#[derive(Deserialize, Validate)]
pub struct CreateToolRequest {
    #[validate(length(min = 1))]
    pub nom: String,
    pub description: Option<String>, // Optionnel, NULL en base
}

#[post("")]
pub async fn create_tool(
    body: web::Json<CreateToolRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let body = body.into_inner();

    let outil = store
        .insert(OutilActiveModel {
            nom: Set(body.nom),
            description: Set(body.description),
            ..Default::default()
        })
        .await?;

    Ok(super::created("Outil créé avec succès", &outil))
}

#[get("")]
pub async fn get_tools(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let outils = store.list::<outil::Entity>().await?;
    Ok(HttpResponse::Ok().json(outils))
}

#[get("/{id}")]
pub async fn get_tool(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let outil = store.get::<outil::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outil))
}

#[delete("/{id}")]
pub async fn delete_tool(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete::<outil::Entity, _>(path.into_inner()).await?;
    Ok(super::confirmed("Outil supprimé avec succès"))
}

pub fn tools_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tools")
            .service(create_tool)
            .service(get_tools)
            .service(get_tool)
            .service(delete_tool)
    );
}
