use synonym_search::config::ServiceConfig;
use synonym_search::search::engine::SearchService;
use synonym_search::search::handlers::router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = ServiceConfig::load(&args)?;

    tracing::info!(
        "Synonym service: {} (lookup {:?}, timeout {:?})",
        config.synonym_base_url,
        config.lookup_strategy,
        config.lookup_timeout
    );
    tracing::info!(
        "Fanout: {} over {} template(s), max {} variation(s)",
        config.fanout_policy,
        config.templates.len(),
        config.max_variations
    );

    let service = Arc::new(SearchService::from_config(&config)?);

    for e in service.fanout().validate() {
        tracing::warn!("{}; links for this template will be omitted", e);
    }

    let app = router(service);

    tracing::info!("HTTP server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
