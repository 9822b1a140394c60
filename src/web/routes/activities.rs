use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::services::activity_service;
use crate::store::{ActivityDirectory, DirectoryError};

pub async fn list_activities_handler(
    State(directory): State<ActivityDirectory>,
) -> impl IntoResponse {
    Json(activity_service::list_activities(&directory))
}

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<ActivityDirectory>,
) -> Response {
    match activity_service::sign_up(&directory, &activity_name, &query.email) {
        Ok(message) => Json(json!({ "message": message })).into_response(),
        Err(e) => {
            warn!("Signup rejected for {} / {}: {}", activity_name, query.email, e);
            error_response(e)
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<ActivityDirectory>,
) -> Response {
    match activity_service::unregister(&directory, &activity_name, &query.email) {
        Ok(message) => Json(json!({ "message": message })).into_response(),
        Err(e) => {
            warn!(
                "Unregister rejected for {} / {}: {}",
                activity_name, query.email, e
            );
            error_response(e)
        }
    }
}

// Error payloads use a `detail` field, which is what the frontend reads.
fn error_response(err: DirectoryError) -> Response {
    let status = match err {
        DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
        DirectoryError::AlreadyRegistered | DirectoryError::NotRegistered => {
            StatusCode::BAD_REQUEST
        }
    };
    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}
