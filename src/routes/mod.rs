pub mod health;
pub mod users;
pub mod conversations;
pub mod messages;
pub mod errors;
pub mod solutions;
pub mod tools;
pub mod error_tools;
pub mod error_solutions;
pub mod interaction_logs;
pub mod requests;

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::db::Store;
use crate::error::AppError;
use crate::utils::password::PasswordHasher;

/// GET / - Message d'accueil
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the FixItBot API"
    }))
}

// 201 + ligne créée, même enveloppe pour toutes les entités
pub(crate) fn created<T: Serialize>(message: &str, data: &T) -> HttpResponse {
    HttpResponse::Created().json(serde_json::json!({
        "message": message,
        "data": data
    }))
}

pub(crate) fn confirmed(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": message
    }))
}

/// Body JSON invalide ou champ manquant -> 400 avec le texte brut de l'erreur
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health::health_check)
        .configure(users::users_routes)
        .configure(conversations::conversations_routes)
        .configure(messages::messages_routes)
        .configure(errors::errors_routes)
        .configure(solutions::solutions_routes)
        .configure(tools::tools_routes)
        .configure(error_tools::error_tools_routes)
        .configure(error_solutions::error_solutions_routes)
        .configure(interaction_logs::interaction_logs_routes)
        .configure(requests::requests_routes);
}

/// Données partagées + routes: utilisé par main et par les tests d'intégration
pub fn configure_app(store: Store, hasher: PasswordHasher) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(store))
            .app_data(web::Data::new(hasher))
            .app_data(json_config());
        configure_routes(cfg);
    }
}
