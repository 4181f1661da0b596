// src/core/matcher.rs — The closed intent-matcher chain

use super::analysis::AnalysisMatcher;
use super::fallback::FallbackMatcher;
use super::greeting::GreetingMatcher;
use super::trend::TrendMatcher;
use super::types::Reply;
use crate::infra::errors::HodlbotError;
use crate::session::SessionContext;

/// The closed set of intent handlers. Dispatch walks them in the order the
/// orchestrator builds them. The set is order-sensitive, so it is a sum type
/// plus a fixed list rather than a plugin registry.
pub enum IntentMatcher {
    Greeting(GreetingMatcher),
    Analysis(AnalysisMatcher),
    Trend(TrendMatcher),
    Fallback(FallbackMatcher),
    #[cfg(test)]
    Failing(FailingMatcher),
}

impl IntentMatcher {
    pub fn name(&self) -> &'static str {
        match self {
            IntentMatcher::Greeting(_) => "greeting",
            IntentMatcher::Analysis(_) => "analysis",
            IntentMatcher::Trend(_) => "trend",
            IntentMatcher::Fallback(_) => "fallback",
            #[cfg(test)]
            IntentMatcher::Failing(_) => "failing",
        }
    }

    /// Pure predicate: may read the context, never mutates it.
    pub fn can_handle(&self, input: &str, ctx: &SessionContext) -> bool {
        match self {
            IntentMatcher::Greeting(m) => m.can_handle(input, ctx),
            IntentMatcher::Analysis(m) => m.can_handle(input, ctx),
            IntentMatcher::Trend(m) => m.can_handle(input, ctx),
            IntentMatcher::Fallback(m) => m.can_handle(input, ctx),
            #[cfg(test)]
            IntentMatcher::Failing(_) => true,
        }
    }

    /// Produce a reply. `Err` means "could not handle after all": the
    /// dispatch loop logs it and moves on to the next matcher.
    pub fn respond(&self, input: &str, ctx: &mut SessionContext) -> Result<Reply, HodlbotError> {
        match self {
            IntentMatcher::Greeting(m) => m.respond(input, ctx),
            IntentMatcher::Analysis(m) => m.respond(input, ctx),
            IntentMatcher::Trend(m) => m.respond(input, ctx),
            IntentMatcher::Fallback(m) => m.respond(input, ctx),
            #[cfg(test)]
            IntentMatcher::Failing(m) => m.respond(),
        }
    }
}

/// Claims every input and always fails; exercises the dispatch loop's
/// containment in tests.
#[cfg(test)]
pub struct FailingMatcher;

#[cfg(test)]
impl FailingMatcher {
    fn respond(&self) -> Result<Reply, HodlbotError> {
        Err(HodlbotError::Matcher {
            matcher: "failing",
            message: "synthetic failure".into(),
        })
    }
}
