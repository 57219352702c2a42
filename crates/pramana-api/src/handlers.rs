//! API Handlers
//!
//! Request bodies carry `value` as raw JSON: anything other than a string
//! (null, numbers, objects) is simply an invalid identifier.
use crate::{error::ApiError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use pramana_privacy::{scrub_pii, ScrubOptions};
use pramana_validators::{
    aadhaar_info, gstin_info, ifsc_info, pan_info, pincode_info, IdKind, VerificationType,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub kind: IdKind,
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeepVerifyResponse {
    #[serde(rename = "type")]
    pub kind: VerificationType,
    pub valid: bool,
}

#[derive(Debug, Deserialize)]
pub struct ScrubRequest {
    pub text: String,
    #[serde(default)]
    pub options: Option<ScrubOptions>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScrubResponse {
    pub text: String,
}

pub async fn validate(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Json(payload): Json<ValueRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let kind: IdKind = kind.parse()?;
    let valid = payload.value.as_str().is_some_and(|v| kind.validate(v));

    state.metrics.record_validation(kind, valid);
    Ok(Json(ValidateResponse { kind, valid }))
}

pub async fn info(
    Path(kind): Path<String>,
    Json(payload): Json<ValueRequest>,
) -> Result<Json<Value>, ApiError> {
    let kind: IdKind = kind.parse()?;
    let value = match payload.value.as_str() {
        Some(value) => value,
        None => return Ok(Json(json!({ "valid": false }))),
    };

    let info = match kind {
        IdKind::Aadhaar => serde_json::to_value(aadhaar_info(value))?,
        IdKind::Pan => serde_json::to_value(pan_info(value))?,
        IdKind::Gstin => serde_json::to_value(gstin_info(value))?,
        IdKind::Ifsc => serde_json::to_value(ifsc_info(value))?,
        IdKind::Pincode => serde_json::to_value(pincode_info(value))?,
    };
    Ok(Json(info))
}

pub async fn deep_verify(
    Path(kind): Path<String>,
    Json(payload): Json<ValueRequest>,
) -> Result<Json<DeepVerifyResponse>, ApiError> {
    let kind: VerificationType = kind.parse()?;
    let valid = payload
        .value
        .as_str()
        .is_some_and(|v| pramana_validators::deep_verify(v, kind));

    Ok(Json(DeepVerifyResponse { kind, valid }))
}

pub async fn scrub(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ScrubRequest>,
) -> Json<ScrubResponse> {
    let options = payload.options.as_ref().unwrap_or(&state.scrub_defaults);
    Json(ScrubResponse {
        text: scrub_pii(&payload.text, options),
    })
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    Ok(state.metrics.encode()?)
}
