use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use warehouse_sections::{
    api,
    config::{database, server},
    core::SectionService,
    db::SectionRepository,
    errors::Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env file first so RUST_LOG from it reaches the filter
    dotenv().ok();

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 3. Server settings: config.toml, then HOST/PORT overrides
    let config = server::load_default_config()
        .and_then(|c| c.server.with_env_overrides())
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Database connection and schema
    let database_url = database::get_database_url();
    let db = database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Wire repository -> service -> router and serve
    let service = SectionService::new(SectionRepository::new(db));
    let app = api::router(service, &config.cors_origins);

    api::serve(&config, app).await
}
