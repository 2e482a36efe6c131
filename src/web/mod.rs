mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::Method;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::telegram::{ChannelClient, ChannelPost};
use crate::youtube::{ChannelVideo, VideoClient};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub channel_client: ChannelClient,
    pub video_client: VideoClient,
    pub post_cache: Arc<TtlCache<Vec<ChannelPost>>>,
    pub video_cache: Arc<TtlCache<Vec<ChannelVideo>>>,
}

impl AppState {
    /// Build clients and empty caches from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let channel_client =
            ChannelClient::from_config(&config).context("Failed to build channel client")?;
        let video_client =
            VideoClient::from_config(&config).context("Failed to build video client")?;

        Ok(Self {
            post_cache: Arc::new(TtlCache::new(config.telegram_cache_ttl)),
            video_cache: Arc::new(TtlCache::new(config.youtube_cache_ttl)),
            config: Arc::new(config),
            channel_client,
            video_client,
        })
    }
}

/// Start the web server and run until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(
    config: Config,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(AppState::new(config)?);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .merge(routes::router())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
