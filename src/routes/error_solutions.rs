use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::Set;
use serde::Deserialize;

use crate::db::Store;
use crate::error::AppError;
use crate::models::erreur_solution::{self, ActiveModel as ErreurSolutionActiveModel};
use crate::models::{erreur, solution};

#[derive(Deserialize)]
pub struct CreateErrorSolutionRequest {
    pub erreur_id: i32,
    pub solution_id: i32,
}

#[post("")]
pub async fn create_error_solution(
    body: web::Json<CreateErrorSolutionRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.ensure_exists::<erreur::Entity>(body.erreur_id).await?;
    store.ensure_exists::<solution::Entity>(body.solution_id).await?;

    let link = store
        .insert(ErreurSolutionActiveModel {
            erreur_id: Set(body.erreur_id),
            solution_id: Set(body.solution_id),
            ..Default::default()
        })
        .await?;

    Ok(super::created("Lien erreur-solution créé avec succès", &link))
}

#[get("")]
pub async fn get_error_solutions(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let links = store.list::<erreur_solution::Entity>().await?;
    Ok(HttpResponse::Ok().json(links))
}

#[get("/{id}")]
pub async fn get_error_solution(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let link = store.get::<erreur_solution::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(link))
}

#[delete("/{id}")]
pub async fn delete_error_solution(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete::<erreur_solution::Entity, _>(path.into_inner()).await?;
    Ok(super::confirmed("Lien erreur-solution supprimé avec succès"))
}

pub fn error_solutions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/error-solutions")
            .service(create_error_solution)
            .service(get_error_solutions)
            .service(get_error_solution)
            .service(delete_error_solution)
    );
}
