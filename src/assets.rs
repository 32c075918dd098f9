use crate::state::AppState;
use crate::templates;

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

pub(crate) async fn index_page(State(state): State<AppState>) -> templates::IndexTemplate {
    templates::IndexTemplate {
        school_name: state.config.school_name,
    }
}

pub(crate) async fn stylesheet() -> Response {
    const CSS_CONTENT: &str = include_str!("../static/styles.css");
    (
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        CSS_CONTENT,
    )
        .into_response()
}

pub(crate) async fn app_script() -> Response {
    const APP_JS_CONTENT: &str = include_str!("../static/app.js");
    (
        [
            (CONTENT_TYPE, "application/javascript"),
            (CACHE_CONTROL, "no-cache"),
        ],
        APP_JS_CONTENT,
    )
        .into_response()
}
