use std::io;

use actix_web::{middleware::Logger, App, HttpServer};
use chrono::Utc;
use dotenvy::dotenv;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use mock_api::repositories::in_memory::InMemoryOrderRepository;
use mock_api::routes;
use mock_api::state::{seed_orders, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let bind = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());
    let seed = seed_orders(std::env::var("SEED_ORDERS").ok().as_deref()).map_err(|e| {
        tracing::error!(err = %e, "SEED_ORDERS must be a non-negative count");
        io::Error::new(io::ErrorKind::InvalidInput, format!("SEED_ORDERS: {e}"))
    })?;

    let state = AppState::new(InMemoryOrderRepository::seeded(seed, Utc::now()));

    tracing::info!(orders = seed, "mock restaurant api listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(bind)?
    .run()
    .await
}
