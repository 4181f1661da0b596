// src/core/orchestrator.rs — Chain dispatch and the per-turn cycle

use std::sync::Arc;
use std::time::Duration;

use super::analysis::AnalysisMatcher;
use super::fallback::FallbackMatcher;
use super::greeting::GreetingMatcher;
use super::matcher::IntentMatcher;
use super::trend::TrendMatcher;
use super::types::{Reply, ReplyKind};
use crate::catalog::cache::{CachedCatalog, InMemoryCache};
use crate::catalog::types::CoinRecord;
use crate::catalog::{CoinCatalog, CoinProvider};
use crate::infra::config::Config;
use crate::session::{InMemorySessionStore, SessionStore};

/// Front door for conversational turns. Owns the matcher chain and the
/// injected catalog/session collaborators; built once at startup and shared
/// by reference, never through an ambient global.
pub struct Orchestrator {
    catalog: Arc<CachedCatalog>,
    sessions: Arc<dyn SessionStore>,
    matchers: Vec<IntentMatcher>,
}

impl Orchestrator {
    pub fn new(catalog: Arc<CachedCatalog>, sessions: Arc<dyn SessionStore>) -> Self {
        let provider: Arc<dyn CoinProvider> = catalog.clone();

        // Priority order is load-bearing; the fallback must stay last.
        let matchers = vec![
            IntentMatcher::Greeting(GreetingMatcher),
            IntentMatcher::Analysis(AnalysisMatcher::new(provider.clone())),
            IntentMatcher::Trend(TrendMatcher::new(provider)),
            IntentMatcher::Fallback(FallbackMatcher),
        ];

        Self {
            catalog,
            sessions,
            matchers,
        }
    }

    /// Default in-memory wiring: seeded catalog behind a TTL cache, plus an
    /// in-memory session store.
    pub fn from_config(config: &Config) -> Self {
        let catalog = Arc::new(CachedCatalog::new(
            Arc::new(CoinCatalog::seeded()),
            Arc::new(InMemoryCache::new()),
            Duration::from_secs(config.cache.ttl_seconds),
        ));
        Self::new(catalog, Arc::new(InMemorySessionStore::new()))
    }

    /// Process one message for a session: record it, walk the matcher chain,
    /// return the first reply produced. A failing matcher is logged and
    /// skipped; the terminal fallback guarantees a reply.
    pub fn process(&self, input: &str, session_id: &str) -> Reply {
        let session = self.sessions.get_or_create(session_id);
        // Hold the session lock for the whole turn so concurrent requests on
        // the same session cannot interleave history/favorites updates.
        let mut ctx = match session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.sessions.append_history(&mut ctx, input);

        for matcher in &self.matchers {
            if !matcher.can_handle(input, &ctx) {
                continue;
            }
            match matcher.respond(input, &mut ctx) {
                Ok(reply) => {
                    tracing::info!(matcher = matcher.name(), kind = ?reply.kind, "reply generated");
                    return reply;
                }
                Err(err) => {
                    tracing::error!(
                        matcher = matcher.name(),
                        error = %err,
                        "matcher failed, continuing down the chain"
                    );
                }
            }
        }

        // Unreachable while the fallback matcher stays terminal and
        // infallible; kept so the contract holds even if the chain changes.
        Reply::plain(ReplyKind::Error, "Something went wrong! Try again?")
    }

    /// Catalog upsert plus cache invalidation for the coin and listing keys.
    pub fn add_coin(&self, record: CoinRecord) {
        tracing::info!(coin = record.name(), "adding coin to catalog");
        self.catalog.add(record);
    }

    /// Cached record lookup for the advice endpoint.
    pub fn coin_advice(&self, coin: &str) -> Option<CoinRecord> {
        self.catalog.coin(coin)
    }

    #[cfg(test)]
    fn with_matchers(mut self, matchers: Vec<IntentMatcher>) -> Self {
        self.matchers = matchers;
        self
    }
}
