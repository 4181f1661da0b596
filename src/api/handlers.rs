// src/api/handlers.rs

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::{types::*, ApiState};
use crate::catalog::types::CoinRecord;
use crate::core::types::Reply;

/// POST /api/v1/chat — One conversational turn.
pub async fn chat(
    State(state): State<ApiState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<Reply>, (StatusCode, Json<ErrorResponse>)> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(bad_request("Send me a message to get started!"));
    }
    let session_id = body.session_id.trim();
    if session_id.is_empty() {
        return Err(bad_request("A session_id is required"));
    }

    Ok(Json(state.bot.process(message, session_id)))
}

/// GET /api/v1/coins/{id} — Advice projection for one coin.
pub async fn coin_advice(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<CoinAdviceResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.bot.coin_advice(&id) {
        Some(record) => Ok(Json(CoinAdviceResponse::from_record(&record))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("'{id}'? Never heard of it. Are you making up coins now? 😅"),
            }),
        )),
    }
}

/// POST /api/v1/coins — Upsert a coin and drop its cache entries.
pub async fn add_coin(
    State(state): State<ApiState>,
    Json(body): Json<AddCoinRequest>,
) -> Result<(StatusCode, Json<CoinAddedResponse>), (StatusCode, Json<ErrorResponse>)> {
    for (field, value) in [
        ("name", &body.name),
        ("trend", &body.trend),
        ("verdict", &body.verdict),
        ("advice", &body.advice),
    ] {
        if value.trim().is_empty() {
            return Err(bad_request(&format!("Field '{field}' cannot be empty")));
        }
    }

    let record = CoinRecord::new(
        body.name.trim(),
        body.trend.trim(),
        body.verdict.as_str(),
        body.advice.as_str(),
    )
    .with_market_cap(body.market_cap)
    .with_sustainability(body.sustainability_score)
    .with_tags(body.tags);

    let name = record.name().to_string();
    state.bot.add_coin(record);

    Ok((
        StatusCode::CREATED,
        Json(CoinAddedResponse {
            message: format!("Successfully added {name}!"),
            crypto: name,
        }),
    ))
}

/// GET /api/v1/health — Simple health check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
