use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::relay::upstream::{UpstreamReply, UsdaUpstream};

pub type RelayState = Arc<UsdaUpstream>;

pub fn router(upstream: RelayState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/usda/search", post(search))
        .route("/api/usda/food", post(food))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(upstream)
}

async fn health(State(upstream): State<RelayState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "apiKeyPresent": upstream.has_api_key(),
    }))
}

fn error_response(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn missing_key() -> Response {
    error!("USDA API key not configured");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "API key not configured",
            "hint": "Set USDA_API_KEY in the environment",
        }),
    )
}

fn internal_error(message: String) -> Response {
    error!(%message, "relay request failed");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Internal server error", "message": message }),
    )
}

/// Upstream success bodies pass through untouched; failures are wrapped.
fn relay_reply(reply: UpstreamReply) -> Response {
    if reply.is_success() {
        return (StatusCode::OK, Json(reply.body)).into_response();
    }

    warn!(status = reply.status, "USDA API error");
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    error_response(
        status,
        json!({
            "error": "USDA API error",
            "status": reply.status,
            "details": reply.body,
        }),
    )
}

/// Read a string field from a JSON body. Numbers are accepted and stringified.
fn body_field(body: &[u8], field: &str) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let text = match value.get(field)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

async fn search(State(upstream): State<RelayState>, body: Bytes) -> Response {
    let Some(query) = body_field(&body, "query") else {
        return error_response(StatusCode::BAD_REQUEST, json!({ "error": "Query required" }));
    };
    let Some(api_key) = upstream.api_key() else {
        return missing_key();
    };

    info!(%query, "searching foods");
    match upstream.search(api_key, &query).await {
        Ok(reply) => {
            if reply.is_success() {
                let found = reply.body["foods"].as_array().map_or(0, Vec::len);
                info!(found, "search complete");
            }
            relay_reply(reply)
        }
        Err(e) => internal_error(e.to_string()),
    }
}

async fn food(State(upstream): State<RelayState>, body: Bytes) -> Response {
    let Some(food_id) = body_field(&body, "food_id") else {
        return error_response(
            StatusCode::BAD_REQUEST,
            json!({ "error": "food_id required" }),
        );
    };
    // The id becomes a path segment of the upstream URL.
    if !food_id.bytes().all(|b| b.is_ascii_digit()) {
        warn!(%food_id, "rejecting non-numeric food id");
        return error_response(
            StatusCode::BAD_REQUEST,
            json!({ "error": "food_id must be numeric" }),
        );
    }
    let Some(api_key) = upstream.api_key() else {
        return missing_key();
    };

    info!(%food_id, "fetching food details");
    match upstream.food(api_key, &food_id).await {
        Ok(reply) => relay_reply(reply),
        Err(e) => internal_error(e.to_string()),
    }
}
