use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Activity;
use crate::registry::{ActivityRegistry, RegistryError};
use crate::services::activities_service;

#[derive(Debug, Deserialize)]
pub struct MembershipQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// Error body field is `detail` for compatibility with the original API.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        let status = match err {
            RegistryError::ActivityNotFound => StatusCode::NOT_FOUND,
            RegistryError::AlreadySignedUp { .. } | RegistryError::NotRegistered { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let payload = Json(ErrorResponse {
            detail: self.detail,
        });
        (self.status, payload).into_response()
    }
}

pub async fn list_activities_handler(
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<HashMap<String, Activity>> {
    Json(activities_service::list_activities(&registry))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<MembershipQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = match activities_service::signup(&registry, &activity_name, &query.email) {
        Ok(m) => m,
        Err(e) => {
            warn!("Signup rejected for {}: {}", activity_name, e);
            return Err(e.into());
        }
    };
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<MembershipQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = match activities_service::unregister(&registry, &activity_name, &query.email) {
        Ok(m) => m,
        Err(e) => {
            warn!("Unregister rejected for {}: {}", activity_name, e);
            return Err(e.into());
        }
    };
    Ok(Json(MessageResponse { message }))
}
