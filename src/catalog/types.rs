// src/catalog/types.rs — Coin domain types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Market capitalization bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCap {
    Low,
    #[default]
    Medium,
    High,
}

/// Qualitative risk derived from a coin's trend and market cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
        };
        f.write_str(label)
    }
}

fn default_sustainability() -> f64 {
    5.0
}

/// Metadata and canned analysis for one cryptocurrency.
///
/// The name is fixed at construction (canonical lowercase); tags behave as an
/// ordered set. Everything else is immutable after the record enters the
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    name: String,
    pub trend: String,
    pub verdict: String,
    pub advice: String,
    #[serde(default)]
    pub market_cap: MarketCap,
    #[serde(default = "default_sustainability")]
    pub sustainability_score: f64,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    tags: Vec<String>,
}

impl CoinRecord {
    pub fn new(
        name: impl Into<String>,
        trend: impl Into<String>,
        verdict: impl Into<String>,
        advice: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            trend: trend.into(),
            verdict: verdict.into(),
            advice: advice.into(),
            market_cap: MarketCap::default(),
            sustainability_score: default_sustainability(),
            last_updated: Utc::now(),
            price_change_24h: None,
            tags: Vec::new(),
        }
    }

    pub fn with_market_cap(mut self, market_cap: MarketCap) -> Self {
        self.market_cap = market_cap;
        self
    }

    pub fn with_sustainability(mut self, score: f64) -> Self {
        self.sustainability_score = score;
        self
    }

    pub fn with_price_change(mut self, pct: f64) -> Self {
        self.price_change_24h = Some(pct);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            self.add_tag(&tag);
        }
        self
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add a classification tag. Returns false if it was already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Positive-trend check. Informational only; dispatch does not route on it.
    pub fn is_bullish(&self) -> bool {
        matches!(self.trend.as_str(), "bullish" | "rising" | "pump")
    }

    /// Risk from the (trend, market cap) pair; unmapped pairs are medium.
    pub fn risk_level(&self) -> RiskLevel {
        match (self.trend.as_str(), self.market_cap) {
            ("bullish", MarketCap::High) | ("rising", MarketCap::High) => RiskLevel::Low,
            ("consolidating", MarketCap::High) | ("stable", MarketCap::Medium) => RiskLevel::Medium,
            ("volatile", MarketCap::Medium) => RiskLevel::High,
            ("bearish", MarketCap::Low) | ("dump", MarketCap::Low) => RiskLevel::VeryHigh,
            _ => RiskLevel::Medium,
        }
    }

    /// Data older than one hour counts as stale.
    pub fn is_stale(&self) -> bool {
        Utc::now() - self.last_updated > Duration::hours(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(trend: &str, cap: MarketCap) -> CoinRecord {
        CoinRecord::new("testcoin", trend, "verdict", "advice").with_market_cap(cap)
    }

    #[test]
    fn test_name_is_lowercased() {
        let coin = CoinRecord::new("PepeCoin", "pump", "v", "a");
        assert_eq!(coin.name(), "pepecoin");
    }

    #[test]
    fn test_risk_level_mapped_pairs() {
        assert_eq!(record("bullish", MarketCap::High).risk_level(), RiskLevel::Low);
        assert_eq!(record("rising", MarketCap::High).risk_level(), RiskLevel::Low);
        assert_eq!(
            record("consolidating", MarketCap::High).risk_level(),
            RiskLevel::Medium
        );
        assert_eq!(record("volatile", MarketCap::Medium).risk_level(), RiskLevel::High);
        assert_eq!(record("bearish", MarketCap::Low).risk_level(), RiskLevel::VeryHigh);
        assert_eq!(record("dump", MarketCap::Low).risk_level(), RiskLevel::VeryHigh);
    }

    #[test]
    fn test_risk_level_unmapped_pair_defaults_to_medium() {
        assert_eq!(record("pump", MarketCap::Low).risk_level(), RiskLevel::Medium);
    }

    #[test]
    fn test_is_bullish_trends() {
        for trend in ["bullish", "rising", "pump"] {
            assert!(record(trend, MarketCap::Medium).is_bullish(), "{trend}");
        }
        assert!(!record("bearish", MarketCap::Medium).is_bullish());
    }

    #[test]
    fn test_staleness_window() {
        let mut coin = record("stable", MarketCap::Medium);
        coin.last_updated = Utc::now() - Duration::hours(2);
        assert!(coin.is_stale());

        coin.last_updated = Utc::now() - Duration::minutes(10);
        assert!(!coin.is_stale());
    }

    #[test]
    fn test_add_tag_is_set_like() {
        let mut coin = record("stable", MarketCap::Medium);
        assert!(coin.add_tag("layer-1"));
        assert!(!coin.add_tag("layer-1"));
        assert_eq!(coin.tags(), ["layer-1"]);
    }

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::VeryHigh.to_string(), "very_high");
        assert_eq!(RiskLevel::Low.to_string(), "low");
    }
}
