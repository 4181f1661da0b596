// src/core/trend.rs — Market trend intent

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::compile_pattern;
use super::types::{Reply, ReplyKind};
use crate::catalog::CoinProvider;
use crate::infra::errors::HodlbotError;
use crate::session::SessionContext;

/// Favorites shown in a portfolio summary.
const PORTFOLIO_WINDOW: usize = 5;

static TREND_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"market trend|overall market|crypto market",
        r"what's hot|trending|popular",
        r"bull.*market|bear.*market",
        r"portfolio.*check|my.*coins",
    ]
    .iter()
    .map(|p| compile_pattern(p))
    .collect()
});

static PORTFOLIO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(r"portfolio.*check|my.*coins"));

fn trend_emoji(trend: &str) -> &'static str {
    match trend {
        "bullish" => "🚀",
        "rising" => "📈",
        "pump" => "🔥",
        _ => "📊",
    }
}

fn mood_emoji(trend: &str) -> &'static str {
    match trend {
        "bullish" => "🚀",
        "rising" => "📈",
        "pump" => "🔥",
        "bearish" => "📉",
        "dump" => "💥",
        "volatile" => "🎢",
        _ => "🤷",
    }
}

pub struct TrendMatcher {
    provider: Arc<dyn CoinProvider>,
}

impl TrendMatcher {
    pub fn new(provider: Arc<dyn CoinProvider>) -> Self {
        Self { provider }
    }

    pub fn can_handle(&self, input: &str, _ctx: &SessionContext) -> bool {
        let input = input.to_lowercase();
        TREND_PATTERNS.iter().any(|p| p.is_match(&input))
    }

    pub fn respond(&self, input: &str, ctx: &mut SessionContext) -> Result<Reply, HodlbotError> {
        let input = input.to_lowercase();
        if PORTFOLIO_PATTERN.is_match(&input) {
            Ok(self.portfolio_summary(ctx))
        } else {
            Ok(self.market_overview())
        }
    }

    /// The last few coins the user asked about, one line each with a trend
    /// emoji. Favorites that no longer resolve are skipped silently.
    fn portfolio_summary(&self, ctx: &SessionContext) -> Reply {
        if ctx.favorite_coins.is_empty() {
            return Reply::plain(
                ReplyKind::PortfolioEmpty,
                "You haven't asked about coins yet! Try asking about Bitcoin or Ethereum to get started.",
            );
        }

        let start = ctx.favorite_coins.len().saturating_sub(PORTFOLIO_WINDOW);
        let mut lines = Vec::new();
        for coin in &ctx.favorite_coins[start..] {
            let Some(record) = self.provider.coin(coin) else {
                continue;
            };
            lines.push(format!(
                "{} {} {}",
                coin.to_uppercase(),
                trend_emoji(&record.trend),
                record.trend
            ));
        }

        Reply::html(
            ReplyKind::PortfolioSummary,
            format!("<strong>Your Watchlist</strong><br>{}", lines.join("<br>")),
        )
    }

    /// Tally trends across the whole catalog and report the modal one.
    fn market_overview(&self) -> Reply {
        // A Vec keeps first-seen order, so count ties resolve to the trend
        // encountered earliest in catalog order.
        let mut tallies: Vec<(String, usize)> = Vec::new();
        for id in self.provider.coin_ids() {
            let Some(record) = self.provider.coin(&id) else {
                continue;
            };
            match tallies.iter_mut().find(|(trend, _)| *trend == record.trend) {
                Some((_, count)) => *count += 1,
                None => tallies.push((record.trend.clone(), 1)),
            }
        }

        let mut mood: Option<&str> = None;
        let mut best = 0;
        for (trend, count) in &tallies {
            if *count > best {
                best = *count;
                mood = Some(trend);
            }
        }
        let mood = mood.unwrap_or("unknown");

        Reply::html(
            ReplyKind::MarketOverview,
            format!(
                "<strong>Market Overview</strong> {}<br>Overall mood: {mood}<br>Stay safe out there!",
                mood_emoji(mood)
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::CoinRecord;
    use crate::catalog::CoinCatalog;

    fn matcher() -> TrendMatcher {
        TrendMatcher::new(Arc::new(CoinCatalog::seeded()))
    }

    fn ctx() -> SessionContext {
        SessionContext::new("s1")
    }

    #[test]
    fn test_can_handle_trend_questions() {
        let m = matcher();
        for input in [
            "what's the overall market mood?",
            "what's hot right now",
            "are we in a bull market?",
            "portfolio check",
            "how are my coins doing",
        ] {
            assert!(m.can_handle(input, &ctx()), "{input}");
        }
        assert!(!m.can_handle("should I buy ethereum", &ctx()));
    }

    #[test]
    fn test_empty_portfolio_prompts_the_user() {
        let m = matcher();
        let reply = m.respond("portfolio check", &mut ctx()).unwrap();
        assert_eq!(reply.kind, ReplyKind::PortfolioEmpty);
    }

    #[test]
    fn test_portfolio_summary_shows_last_five_favorites() {
        let m = matcher();
        let mut ctx = ctx();
        for coin in ["bitcoin", "ethereum", "dogecoin", "solana", "cardano", "chainlink"] {
            ctx.favorite_coins.push(coin.into());
        }

        let reply = m.respond("portfolio check", &mut ctx).unwrap();
        assert_eq!(reply.kind, ReplyKind::PortfolioSummary);
        // Six favorites, five rendered: the oldest is dropped.
        assert!(!reply.text.contains("BITCOIN"), "{}", reply.text);
        for coin in ["ETHEREUM", "DOGECOIN", "SOLANA", "CARDANO", "CHAINLINK"] {
            assert!(reply.text.contains(coin), "{}", reply.text);
        }
    }

    #[test]
    fn test_portfolio_summary_skips_unresolvable_favorites() {
        let m = matcher();
        let mut ctx = ctx();
        ctx.favorite_coins.push("bitcoin".into());
        ctx.favorite_coins.push("delistedcoin".into());

        let reply = m.respond("portfolio check", &mut ctx).unwrap();
        assert!(reply.text.contains("BITCOIN 🚀 bullish"));
        assert!(!reply.text.contains("DELISTEDCOIN"));
    }

    #[test]
    fn test_market_overview_reports_modal_trend() {
        // Every seed trend occurs once; the tie resolves to bitcoin's trend
        // because it comes first in catalog order.
        let m = matcher();
        let reply = m.respond("what's the overall market mood?", &mut ctx()).unwrap();

        assert_eq!(reply.kind, ReplyKind::MarketOverview);
        assert!(reply.text.contains("Overall mood: bullish"), "{}", reply.text);
        assert!(reply.text.contains("🚀"));
    }

    #[test]
    fn test_market_overview_counts_across_catalog() {
        let catalog = CoinCatalog::seeded();
        catalog.add(CoinRecord::new("stellarite", "stable", "v", "a"));
        catalog.add(CoinRecord::new("aurum", "stable", "v", "a"));

        let m = TrendMatcher::new(Arc::new(catalog));
        let reply = m.respond("crypto market overview", &mut ctx()).unwrap();
        assert!(reply.text.contains("Overall mood: stable"), "{}", reply.text);
    }

    #[test]
    fn test_empty_catalog_has_unknown_mood() {
        let m = TrendMatcher::new(Arc::new(CoinCatalog::new()));
        let reply = m.respond("market trend", &mut ctx()).unwrap();
        assert!(reply.text.contains("Overall mood: unknown"));
        assert!(reply.text.contains("🤷"));
    }
}
