use crate::assets;
use crate::config;
use crate::roster::{self, Roster, SeedError};
use crate::state;

use axum::Router;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower_http::trace::TraceLayer;

mod activities;
mod error;

/// Builds the router, loading the roster from `config.seed` when set.
pub fn app(config: config::AppConfig) -> Result<Router, SeedError> {
    let roster = match config.seed.as_deref() {
        Some(path) => {
            let roster = roster::load_seed(path)?;
            tracing::info!(seed = %path.display(), activities = roster.len(), "loaded roster seed");
            roster
        }
        None => {
            let roster = Roster::seeded();
            tracing::info!(activities = roster.len(), "using built-in roster seed");
            roster
        }
    };
    Ok(app_with_roster(config, roster))
}

pub fn app_with_roster(config: config::AppConfig, roster: Roster) -> Router {
    let state = state::AppState::new(config, roster);
    Router::new()
        .route("/", get(root))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity}/signup", post(activities::signup))
        .route(
            "/activities/{activity}/participants",
            delete(activities::unregister),
        )
        .route("/static/index.html", get(assets::index_page))
        .route("/static/app.js", get(assets::app_script))
        .route("/static/styles.css", get(assets::stylesheet))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
