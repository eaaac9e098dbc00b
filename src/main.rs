use actix_web::{middleware::Logger, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fixitbot::config::Config;
use fixitbot::db::Store;
use fixitbot::routes;
use fixitbot::utils::password::PasswordHasher;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    // Les logs `log` d'actix (Logger) passent aussi par tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("Connecting to database...");
    let store = Store::connect(&config.database_url)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e))?;

    let hasher = PasswordHasher::new(config.password_iterations);

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes::configure_app(store.clone(), hasher.clone()))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
