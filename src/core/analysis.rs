// src/core/analysis.rs — Coin analysis intent

use std::sync::{Arc, LazyLock};

use rand::seq::SliceRandom;
use regex::Regex;

use super::compile_pattern;
use super::fuzzy;
use super::types::{Reply, ReplyKind};
use crate::catalog::types::{CoinRecord, RiskLevel};
use crate::catalog::CoinProvider;
use crate::infra::errors::HodlbotError;
use crate::session::SessionContext;

/// Fuzzy confidence at or above this resolves a coin; below it the user is
/// asked to clarify.
pub const MATCH_THRESHOLD: u8 = 70;

static QUESTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"what about|tell me about|how about|info on",
        r"should i buy|worth buying",
        r"price prediction|will.*go up|will.*moon",
        // Matched for routing only; compare questions get the general body.
        r"compare.*to|vs|versus",
    ]
    .iter()
    .map(|p| compile_pattern(p))
    .collect()
});

static BUY_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile_pattern(r"should i buy|worth buying"));
static PREDICTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(r"price prediction|will.*go up|will.*moon"));

const DISCLAIMERS: &[&str] = &[
    "🔮 Crystal ball says... nobody knows!",
    "📈 Past performance ≠ future results",
    "🎰 This is not financial advice!",
    "🚀 To the moon? Maybe, maybe not!",
];

pub struct AnalysisMatcher {
    provider: Arc<dyn CoinProvider>,
}

impl AnalysisMatcher {
    pub fn new(provider: Arc<dyn CoinProvider>) -> Self {
        Self { provider }
    }

    pub fn can_handle(&self, input: &str, _ctx: &SessionContext) -> bool {
        let input = input.to_lowercase();
        if QUESTION_PATTERNS.iter().any(|p| p.is_match(&input)) {
            return true;
        }
        fuzzy::best_match(&input, self.provider.coin_ids())
            .is_some_and(|m| m.meets(MATCH_THRESHOLD))
    }

    pub fn respond(&self, input: &str, ctx: &mut SessionContext) -> Result<Reply, HodlbotError> {
        let input = input.to_lowercase();

        let matched = fuzzy::best_match(&input, self.provider.coin_ids())
            .filter(|m| m.meets(MATCH_THRESHOLD));
        let Some(matched) = matched else {
            return Ok(Reply::plain(
                ReplyKind::Clarification,
                "Hmm, I'm not sure which crypto you're asking about. \
                 Try asking about Bitcoin, Ethereum or Solana!",
            ));
        };

        let Some(record) = self.provider.coin(&matched.candidate) else {
            // Listed id without a backing record: catalog and cache disagree.
            return Ok(Reply::plain(
                ReplyKind::Error,
                format!(
                    "I know {} exists, but I don't have current data on it. My bad!",
                    matched.candidate
                ),
            ));
        };

        let body = if BUY_PATTERN.is_match(&input) {
            buy_advice(&record)
        } else if PREDICTION_PATTERN.is_match(&input) {
            prediction(&record)
        } else {
            general_analysis(&record)
        };

        if !ctx.favorite_coins.contains(&matched.candidate) {
            ctx.favorite_coins.push(matched.candidate.clone());
        }

        Ok(Reply::html(ReplyKind::CryptoAnalysis, body).with_coin(matched.candidate))
    }
}

fn buy_advice(record: &CoinRecord) -> String {
    let risk_note = match record.risk_level() {
        RiskLevel::Low => "This looks pretty safe for your risk level.",
        RiskLevel::Medium => "Moderate risk - matches your profile well.",
        RiskLevel::High => "This might be too spicy for your risk tolerance!",
        RiskLevel::VeryHigh => "⚠️ HIGH RISK ALERT! Only if you can afford to lose it all.",
    };

    format!(
        "<strong>{name} Buy Analysis</strong><br>\
         <span class='trend'>Current Trend: {trend}</span><br>\
         <span class='risk'>Risk Level: {risk}</span><br>\
         <span class='verdict'>Take: {verdict}</span><br>\
         <span class='advice'>My Advice: {risk_note} {advice}</span>",
        name = record.name().to_uppercase(),
        trend = record.trend,
        risk = record.risk_level(),
        verdict = record.verdict,
        advice = record.advice,
    )
}

fn prediction(record: &CoinRecord) -> String {
    let mut rng = rand::thread_rng();
    let disclaimer = DISCLAIMERS.choose(&mut rng).copied().unwrap_or(DISCLAIMERS[0]);

    format!(
        "<strong>{name} Price Prediction</strong><br>\
         <span class='disclaimer'>{disclaimer}</span><br>\
         <span class='trend'>Current Trend: {trend}</span><br>\
         <span class='verdict'>Market Vibe: {verdict}</span><br>\
         <span class='advice'>Strategy: {advice}</span>",
        name = record.name().to_uppercase(),
        trend = record.trend,
        verdict = record.verdict,
        advice = record.advice,
    )
}

fn general_analysis(record: &CoinRecord) -> String {
    let freshness = if record.is_stale() {
        "Slightly stale data"
    } else {
        "Fresh data"
    };
    let tags = record
        .tags()
        .iter()
        .take(3)
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" . ");

    format!(
        "<strong>{name}</strong> {freshness}<br>\
         <span class='trend'>📊 Trend: {trend}</span><br>\
         <span class='verdict'>💭 Verdict: {verdict}</span><br>\
         <span class='advice'>💡 Advice: {advice}</span><br>\
         <span class='tags'>🏷️ Tags: {tags}</span>",
        name = record.name().to_uppercase(),
        trend = record.trend,
        verdict = record.verdict,
        advice = record.advice,
    )
}
