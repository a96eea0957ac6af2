use tracing_subscriber::{EnvFilter, fmt};

use nuber_eats::shared::config::environment::{EnvironmentProfile, RunMode};
use nuber_eats::shared::infrastructure::database;
use nuber_eats::shell::app_module::AppModule;
use nuber_eats::shell::graphql::{build_schema, export_sdl};
use nuber_eats::shell::http::router;
use nuber_eats::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mode = RunMode::from_env();
    tracing::info!(%mode, env_file = mode.env_file_path(), "starting");
    let profile = EnvironmentProfile::load(mode)?;
    let app_module = AppModule::compose(mode, &profile)?;
    let config = app_module.config();

    let pool = database::connect(&config.database).await?;
    if config.database.synchronize {
        database::synchronize(&pool, &app_module.entities()).await?;
    }

    let schema = build_schema(AppState::postgres(pool));
    export_sdl(&schema, &config.graphql).await?;

    let app = router(schema, &config.graphql);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("GraphQL endpoint: http://{}{}", addr, config.graphql.path);
    axum::serve(listener, app).await?;
    Ok(())
}
