use tower_http::trace::TraceLayer;

use movies_api::shell::config::AppConfig;
use movies_api::shell::http::router;
use movies_api::shell::state::AppState;
use movies_api::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    telemetry::init(config.log_format);

    // In-memory store for now
    let app = router(AppState::in_memory()).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!("Movies API: http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
