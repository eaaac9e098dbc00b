use actix_web::{delete, get, post, put, web, HttpResponse};
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::db::Store;
use crate::error::AppError;
use crate::models::utilisateur::{self, ActiveModel as UtilisateurActiveModel};
use crate::utils::password::PasswordHasher;

// DTO pour la création
#[derive(Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub nom: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub mdp: String,
}

// DTO pour la mise à jour partielle: les champs absents gardent leur valeur
#[derive(Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub nom: Option<String>,
    #[validate(length(min = 1))]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub mdp: Option<String>,
}

/// POST /users - Créer un utilisateur (mot de passe hashé)
#[post("")]
pub async fn create_user(
    body: web::Json<CreateUserRequest>,
    store: web::Data<Store>,
    hasher: web::Data<PasswordHasher>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let body = body.into_inner();

    let new_user = UtilisateurActiveModel {
        nom: Set(body.nom),
        email: Set(body.email),
        mdp: Set(hasher.hash_password(&body.mdp)?),
        ..Default::default()
    };

    let user = store.insert(new_user).await?;
    info!("Utilisateur {} créé", user.id);

    Ok(super::created("Utilisateur créé avec succès", &user))
}

#[get("")]
pub async fn get_users(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let users = store.list::<utilisateur::Entity>().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/{id}")]
pub async fn get_user(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user = store.get::<utilisateur::Entity, _>(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /users/{id} - Mise à jour de nom, email et/ou mdp
#[put("/{id}")]
pub async fn update_user(
    path: web::Path<i32>,
    body: web::Json<UpdateUserRequest>,
    store: web::Data<Store>,
    hasher: web::Data<PasswordHasher>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let body = body.into_inner();

    let user = store.get::<utilisateur::Entity, _>(path.into_inner()).await?;
    let mut active_model: UtilisateurActiveModel = user.into();

    if let Some(nom) = body.nom {
        active_model.nom = Set(nom);
    }
    if let Some(email) = body.email {
        active_model.email = Set(email);
    }
    if let Some(mdp) = body.mdp {
        active_model.mdp = Set(hasher.hash_password(&mdp)?);
    }

    if active_model.is_changed() {
        store.update(active_model).await?;
    }
    Ok(super::confirmed("Utilisateur mis à jour avec succès"))
}

#[delete("/{id}")]
pub async fn delete_user(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    store.delete::<utilisateur::Entity, _>(id).await?;
    info!("Utilisateur {} supprimé", id);

    Ok(super::confirmed("Utilisateur supprimé avec succès"))
}

pub fn users_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(create_user)
            .service(get_users)
            .service(get_user)
            .service(update_user)
            .service(delete_user)
    );
}
