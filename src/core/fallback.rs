// src/core/fallback.rs — Terminal fallback intent

use rand::seq::SliceRandom;

use super::types::{Reply, ReplyKind};
use crate::infra::errors::HodlbotError;
use crate::session::SessionContext;

const FALLBACK_REPLIES: &[&str] = &[
    "I'm your crypto companion! Ask me about Bitcoin, Ethereum, or any other coins!",
    "WAGMI! (We're All Gonna Make It) What crypto are you curious about?",
    "Not sure what you mean, but I'm here for all your crypto questions! 🚀",
    "Try asking: 'What about Bitcoin?' or 'Should I buy Ethereum?'",
];

#[derive(Default)]
pub struct FallbackMatcher;

impl FallbackMatcher {
    /// Terminal handler; must sit last in the chain.
    pub fn can_handle(&self, _input: &str, _ctx: &SessionContext) -> bool {
        true
    }

    pub fn respond(&self, _input: &str, _ctx: &mut SessionContext) -> Result<Reply, HodlbotError> {
        let mut rng = rand::thread_rng();
        let text = FALLBACK_REPLIES
            .choose(&mut rng)
            .copied()
            .unwrap_or(FALLBACK_REPLIES[0]);
        Ok(Reply::plain(ReplyKind::Default, text))
    }
}
