use std::net::SocketAddr;
use std::sync::Arc;

use qa_pet_api::api;
use qa_pet_api::pets::service::PetService;
use qa_pet_api::storage::memory::PetStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(3000);

    // 1. Storage layer, pre-seeded with the fixture pets:
    let store = Arc::new(PetStore::new());
    store.seed();

    // 2. Business layer:
    let service = Arc::new(PetService::new(store));

    // 3. HTTP router:
    let app = api::router(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("QA Pet API listening on http://{}", addr);
    tracing::info!("Swagger docs at http://localhost:{}/api-docs", port);
    tracing::info!("Health check at http://localhost:{}/health", port);
    tracing::info!(
        "Routes: POST /pets | GET /pets | GET /pets/:id | PUT /pets/:id | DELETE /pets/:id"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
