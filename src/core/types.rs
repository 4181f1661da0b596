// src/core/types.rs — Reply types for one conversational turn

use serde::{Deserialize, Serialize};

/// Intent category tag attached to every reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Greeting,
    CryptoAnalysis,
    Clarification,
    Error,
    PortfolioSummary,
    PortfolioEmpty,
    MarketOverview,
    Default,
}

/// Body markup marker. Plain-text replies carry no marker at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyFormat {
    Html,
}

/// One turn's structured reply, serialized over the boundary as
/// `{response, type, format?, coin?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(rename = "response")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ReplyFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
}

impl Reply {
    pub fn plain(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            format: None,
            coin: None,
        }
    }

    pub fn html(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            format: Some(ReplyFormat::Html),
            coin: None,
        }
    }

    pub fn with_coin(mut self, coin: impl Into<String>) -> Self {
        self.coin = Some(coin.into());
        self
    }
}
