//! API error model
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pramana_validators::{UnknownKind, UnknownVerificationType};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    UnknownKind(#[from] UnknownKind),

    #[error("{0}")]
    UnknownVerificationType(#[from] UnknownVerificationType),

    #[error("SERIALIZE/{0}")]
    Serialize(#[from] serde_json::Error),

    #[error("METRICS/{0}")]
    Metrics(#[from] prometheus::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::UnknownKind(_) | Self::UnknownVerificationType(_) => StatusCode::NOT_FOUND,
            Self::Serialize(_) | Self::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
