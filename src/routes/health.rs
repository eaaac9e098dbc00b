use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::db::Store;
use crate::models::health::HealthResponse;

#[get("/health")]
pub async fn health_check(store: web::Data<Store>) -> HttpResponse {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "ok".to_string(),
            database: "ok".to_string(),
            time: Utc::now(),
        }),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "degraded".to_string(),
                database: e.to_string(),
                time: Utc::now(),
            })
        }
    }
}
