use actix_web::{delete, get, post, web, HttpResponse};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

use crate::db::Store;
use crate::error::AppError;
use crate::models::solution::{self, ActiveModel as SolutionActiveModel};

#[derive(Deserialize, Validate)]
pub struct CreateSolutionRequest {
    #[validate(length(min = 1))]
    pub description: String,
}

#[post("")]
pub async fn create_solution(
    body: web::Json<CreateSolutionRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let solution = store
        .insert(SolutionActiveModel {
            description: Set(body.into_inner().description),
            ..Default::default()
        })
        .await?;

    Ok(super::created("Solution créée avec succès", &solution))
}

#[get("")]
pub async fn get_solutions(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let solutions = store.list::<solution::Entity>().await?;
    Ok(HttpResponse::Ok().json(solutions))
}

#[get("/{id}")]
pub async fn get_solution(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let solution = store.get::<solution::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(solution))
}

#[delete("/{id}")]
pub async fn delete_solution(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    store.delete::<solution::Entity, _>(path.into_inner()).await?;
    Ok(super::confirmed("Solution supprimée avec succès"))
}

pub fn solutions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/solutions")
            .service(create_solution)
            .service(get_solutions)
            .service(get_solution)
            .service(delete_solution)
    );
}
