use crate::app::error::ApiError;
use crate::roster::{RosterChange, RosterError};
use crate::state;
use crate::types::activity::RosterSnapshot;

use axum::Json;
use axum::extract::Path as AxumPath;
use axum::extract::Query;
use axum::extract::State;
use axum::extract::rejection::{PathRejection, QueryRejection};
use serde::Deserialize;
use serde::Serialize;

type PathParam = Result<AxumPath<String>, PathRejection>;
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Query parameters of the participant routes. A repeated `email` key
/// resolves to its last value.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ParticipantQuery {
    pub(crate) email: Option<String>,
}

impl ParticipantQuery {
    pub(crate) fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }

    fn email(&self) -> Result<&str, ApiError> {
        self.email.as_deref().ok_or_else(ApiError::missing_email)
    }
}

fn participant_request(
    path: PathParam,
    query: QueryPairs,
) -> Result<(String, ParticipantQuery), ApiError> {
    let AxumPath(activity) = path?;
    let Query(pairs) = query?;
    Ok((activity, ParticipantQuery::from_pairs(pairs)))
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

pub(crate) async fn list_activities(State(state): State<state::AppState>) -> Json<RosterSnapshot> {
    let snapshot = state.roster.lock().expect("roster lock").list();
    Json(snapshot)
}

pub(crate) async fn signup(
    State(state): State<state::AppState>,
    path: PathParam,
    query: QueryPairs,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity, query) = participant_request(path, query)?;
    let email = query.email()?;
    let result = state
        .roster
        .lock()
        .expect("roster lock")
        .signup(&activity, email);
    respond("signup", result)
}

pub(crate) async fn unregister(
    State(state): State<state::AppState>,
    path: PathParam,
    query: QueryPairs,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity, query) = participant_request(path, query)?;
    let email = query.email()?;
    let result = state
        .roster
        .lock()
        .expect("roster lock")
        .unregister(&activity, email);
    respond("unregister", result)
}

fn respond(
    operation: &'static str,
    result: Result<RosterChange, RosterError>,
) -> Result<Json<MessageResponse>, ApiError> {
    match result {
        Ok(change) => {
            let message = change.message();
            tracing::info!(operation, "{message}");
            Ok(Json(MessageResponse { message }))
        }
        Err(err) => {
            tracing::warn!(operation, error = %err, "roster operation rejected");
            Err(err.into())
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn participant_query__should_take_last_email_value() {
        // When
        let query = ParticipantQuery::from_pairs(pairs(&[
            ("email", "first@mergington.edu"),
            ("other", "x"),
            ("email", "last@mergington.edu"),
        ]));

        // Then
        assert_eq!(query.email.as_deref(), Some("last@mergington.edu"));
    }

    #[test]
    fn participant_query__should_accept_empty_but_require_key() {
        // Then
        let empty = ParticipantQuery::from_pairs(pairs(&[("email", "")]));
        assert_eq!(empty.email().ok(), Some(""));
        let missing = ParticipantQuery::from_pairs(pairs(&[("mail", "a@mergington.edu")]));
        assert!(missing.email().is_err());
    }
}
