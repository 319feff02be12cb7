//! Smart Stadium operations console
//!
//! With the `server` feature this binary serves the server-rendered console
//! plus a health endpoint. The WASM build hydrates the same `App` in the browser.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::routing::get;
    use smart_stadium::{api, app::App, config};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_stadium=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!("Starting Smart Stadium console");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    // Server-rendered pages and /healthz share these settings
    if !config.client.clone().install() {
        tracing::warn!("Client settings were already installed");
    }

    let app = dioxus::server::router(App)
        .route(
            "/healthz",
            get(api::status_handler).with_state(api::AppState::new(config.client.clone())),
        )
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(smart_stadium::app::App);
}
