use std::sync::Arc;
use tokio::net::TcpListener;
use seo_meta_generator::{
    AppState,
    api::routes::create_router,
    cache::RequestCache,
    config::Config,
    extractor::HttpPageFetcher,
    llm::OpenRouterClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // Create application state
    let app_state = AppState {
        cache: RequestCache::new(),
        fetcher: Arc::new(HttpPageFetcher),
        generator: Arc::new(OpenRouterClient::new(&config)),
    };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    log::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
