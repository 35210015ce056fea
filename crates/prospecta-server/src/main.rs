use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use prospecta_extract::TesseractOcr;
use prospecta_llm::OpenAiClient;
use prospecta_server::config::AppConfig;
use prospecta_server::router;
use prospecta_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = AppConfig::from_env()?;

    let reports_dir = config.reports_dir();
    std::fs::create_dir_all(&reports_dir)?;

    let generator = OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_timeout,
    )?;
    if !generator.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set; every report section will use the error placeholder");
    }
    let ocr = TesseractOcr::new(config.tesseract_bin.clone());
    let addr = config.bind_addr();

    let state = AppState::new(config, Arc::new(generator), Arc::new(ocr));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, reports_dir = %reports_dir.display(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
