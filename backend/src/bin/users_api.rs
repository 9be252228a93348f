use backend_app::{config::UsersConfig, server, startup, users_router, UsersState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    server::init_tracing();

    let config = UsersConfig::from_env()?;

    info!("users-api starting (SQL-backed)");

    // Blocks until the schema exists or the attempts run out; the latter ends the process.
    let pool = startup::prepare_store(&config).await?;

    let app = users_router(UsersState { db: pool });

    server::serve(app, &config.server.addr()).await
}
