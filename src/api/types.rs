// src/api/types.rs

use serde::{Deserialize, Serialize};

use crate::catalog::types::{CoinRecord, MarketCap, RiskLevel};

fn default_sustainability() -> f64 {
    5.0
}

/// Request body for the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Issued by the fronting transport (cookie, header, whatever suits it);
    /// the bot treats it as an opaque key.
    pub session_id: String,
}

/// Request body for the coin upsert endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCoinRequest {
    pub name: String,
    pub trend: String,
    pub verdict: String,
    pub advice: String,
    #[serde(default)]
    pub market_cap: MarketCap,
    #[serde(default = "default_sustainability")]
    pub sustainability_score: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Response for a successful coin upsert.
#[derive(Debug, Serialize)]
pub struct CoinAddedResponse {
    pub message: String,
    pub crypto: String,
}

/// Projection of a `CoinRecord` for the advice endpoint.
#[derive(Debug, Serialize)]
pub struct CoinAdviceResponse {
    pub coin: String,
    pub trend: String,
    pub verdict: String,
    pub advice: String,
    pub risk_level: RiskLevel,
    pub tags: Vec<String>,
    pub sustainability_score: f64,
}

impl CoinAdviceResponse {
    pub fn from_record(record: &CoinRecord) -> Self {
        Self {
            coin: record.name().to_uppercase(),
            trend: record.trend.clone(),
            verdict: record.verdict.clone(),
            advice: record.advice.clone(),
            risk_level: record.risk_level(),
            tags: record.tags().to_vec(),
            sustainability_score: record.sustainability_score,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
