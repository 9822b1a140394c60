pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::store::ActivityDirectory;

/// The API routes around an injected directory handle. Kept out of main so
/// tests can drive the exact production router in process.
pub fn router(directory: ActivityDirectory) -> Router {
    Router::new()
        .route("/activities", get(routes::activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(routes::activities::unregister_handler),
        )
        .with_state(directory)
}
