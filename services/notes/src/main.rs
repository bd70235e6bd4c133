use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use notes_core::tracing::init_tracing;
use notes_service::config::NotesConfig;
use notes_service::router::build_router;
use notes_service::state::AppState;
use notes_service::usecase::seed::SeedDemoDataUseCase;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let config = NotesConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    let state = AppState::new(db);

    if config.seed_demo_data {
        let users = state.user_service();
        let seeder = SeedDemoDataUseCase { users: &users };
        if let Err(e) = seeder.execute().await {
            tracing::error!(error = ?e, "demo data generation failed");
        }
    }

    let router = build_router(state, config.cors_allowed_origin.clone());
    let http_addr = format!("0.0.0.0:{}", config.notes_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("notes service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
