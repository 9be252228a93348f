use backend_app::{
    config::ProvidersConfig, providers_router, server, store::ProviderStore, ProvidersState,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    server::init_tracing();

    let config = ProvidersConfig::from_env()?;

    let store = if config.seed {
        ProviderStore::seeded()
    } else {
        ProviderStore::new()
    };
    info!(providers = store.len(), "providers-api starting (in-memory)");

    let app = providers_router(ProvidersState::new(store));

    server::serve(app, &config.server.addr()).await
}
