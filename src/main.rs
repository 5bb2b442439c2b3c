mod catalog;
mod config;
mod db;
mod entities;
mod error;
mod models;
mod ranking;
mod routes;
mod store;
mod templates;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{catalog::Catalog, config::Config, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub catalog: Arc<Catalog>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/edit/{movie_id}", get(routes::edit_form).post(routes::edit_submit))
        .route("/delete/{movie_id}", get(routes::delete))
        .route("/select", get(routes::select))
        .route("/add/{movie_id}", get(routes::add))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelrank=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let http = reqwest::Client::builder()
        .user_agent("reelrank/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);

    // The catalog is fetched exactly once; a failure here aborts startup.
    let catalog = catalog::fetch(&http, &config.movie_api_url, &config.movie_api_key)
        .await
        .context("fetching movie catalog")?;
    if catalog.is_empty() {
        tracing::warn!("movie catalog came back empty; nothing to offer on /select");
    }
    tracing::info!(candidates = catalog.len(), "fetched movie catalog");

    let state = Arc::new(AppState { config: config.clone(), store, catalog: Arc::new(catalog) });

    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
