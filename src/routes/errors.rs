use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::{ModelTrait, Set};
use serde::Deserialize;
use validator::Validate;

use crate::db::Store;
use crate::error::AppError;
use crate::models::erreur::{self, ActiveModel as ErreurActiveModel};
use crate::models::{outil, solution};

#[derive(Deserialize, Validate)]
pub struct CreateErrorRequest {
    #[validate(length(min = 1))]
    pub description: String,
}

#[post("")]
pub async fn create_error(
    body: web::Json<CreateErrorRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let erreur = store
        .insert(ErreurActiveModel {
            description: Set(body.into_inner().description),
            ..Default::default()
        })
        .await?;

    Ok(super::created("Erreur créée avec succès", &erreur))
}

#[get("")]
pub async fn get_errors(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let erreurs = store.list::<erreur::Entity>().await?;
    Ok(HttpResponse::Ok().json(erreurs))
}

#[get("/{id}")]
pub async fn get_error(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let erreur = store.get::<erreur::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(erreur))
}

/// GET /errors/{id}/tools - Outils liés via erreur_outil
#[get("/{id}/tools")]
pub async fn get_error_tools(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let erreur = store.get::<erreur::Entity, _>(path.into_inner()).await?;
    let outils = erreur.find_related(outil::Entity).all(store.conn()).await?;
    Ok(HttpResponse::Ok().json(outils))
}

/// GET /errors/{id}/solutions - Solutions liées via erreur_solution
#[get("/{id}/solutions")]
pub async fn get_error_solutions(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let erreur = store.get::<erreur::Entity, _>(path.into_inner()).await?;
    let solutions = erreur.find_related(solution::Entity).all(store.conn()).await?;
    Ok(HttpResponse::Ok().json(solutions))
}

#[delete("/{id}")]
pub async fn delete_error(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete::<erreur::Entity, _>(path.into_inner()).await?;
    Ok(super::confirmed("Erreur supprimée avec succès"))
}

pub fn errors_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/errors")
            .service(create_error)
            .service(get_errors)
            .service(get_error)
            .service(get_error_tools)
            .service(get_error_solutions)
            .service(delete_error)
    );
}
