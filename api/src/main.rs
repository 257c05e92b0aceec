use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use warbler::bootstrap::app_context::{AppContext, AppServices};
use warbler::bootstrap::config::Config;
use warbler::infrastructure::db::repositories::follow_repository_sqlx::SqlxFollowRepository;
use warbler::infrastructure::db::repositories::like_repository_sqlx::SqlxLikeRepository;
use warbler::infrastructure::db::repositories::message_repository_sqlx::SqlxMessageRepository;
use warbler::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;

fn cors_layer(cfg: &Config) -> CorsLayer {
    let methods = [http::Method::GET, http::Method::POST, http::Method::OPTIONS];
    let headers = [http::header::CONTENT_TYPE];
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
        _ if cfg.is_production => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                "http://invalid",
            )))
            .allow_methods(methods)
            .allow_headers(headers),
        // Development convenience
        _ => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "shutdown_signal_failed");
    }
    info!("shutdown_requested");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "warbler=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(port = cfg.api_port, production = cfg.is_production, "Starting Warbler");

    // Database
    let pool = warbler::infrastructure::db::connect_pool(&cfg.database_url).await?;
    warbler::infrastructure::db::migrate(&pool).await?;

    let services = AppServices::new(
        Arc::new(SqlxUserRepository::new(pool.clone())),
        Arc::new(SqlxMessageRepository::new(pool.clone())),
        Arc::new(SqlxFollowRepository::new(pool.clone())),
        Arc::new(SqlxLikeRepository::new(pool.clone())),
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let app = Router::new()
        .nest("/api", warbler::presentation::http::health::routes(pool.clone()))
        .nest_service("/static", ServeDir::new(&cfg.static_dir))
        .merge(warbler::presentation::http::router(ctx))
        .layer(cors_layer(&cfg))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%addr, "HTTP listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
