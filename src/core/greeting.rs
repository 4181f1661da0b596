// src/core/greeting.rs — Greeting intent

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use regex::Regex;

use super::compile_pattern;
use super::types::{Reply, ReplyKind};
use crate::infra::errors::HodlbotError;
use crate::session::SessionContext;

const GENERIC_GREETING: &str = "Hey there! What's on your crypto mind?";

/// One recognized greeting style and its reply pool.
struct GreetingGroup {
    pattern: Regex,
    replies: &'static [&'static str],
}

static GREETING_GROUPS: LazyLock<Vec<GreetingGroup>> = LazyLock::new(|| {
    vec![
        GreetingGroup {
            pattern: compile_pattern(r"hello|hi|hey|yo|sup"),
            replies: &[
                "GM! Ready to talk some crypto?",
                "Hey there! What's cooking in the markets today?",
                "Yo! How's your portfolio looking?",
                "Hi! Let's chase those green candles 🌱",
                "Sup legend! You here for alpha or vibes?",
            ],
        },
        GreetingGroup {
            pattern: compile_pattern(r"how are you|what's up|how's it going|you good|how you doing"),
            replies: &[
                "Living that crypto life! Charts up, vibes up! 📈",
                "Just hodling and staying strong! How about you?",
                "Running on hopium and coffee! ☕",
                "Stacking sats and dodging rug pulls 😎",
                "Watching the market like a hawk 👀",
            ],
        },
        GreetingGroup {
            pattern: compile_pattern(r"good morning|gm|morning"),
            replies: &[
                "GM! Time to check those green candles! 🕯️",
                "Good morning! Ready to make some alpha today?",
                "GM fren! Let's get this crypto!",
                "Rise and shine, it's blockchain time!",
                "Another day, another dollar-cost average 😤",
            ],
        },
    ]
});

#[derive(Default)]
pub struct GreetingMatcher;

impl GreetingMatcher {
    pub fn can_handle(&self, input: &str, _ctx: &SessionContext) -> bool {
        let input = input.to_lowercase();
        GREETING_GROUPS.iter().any(|g| g.pattern.is_match(&input))
    }

    pub fn respond(&self, input: &str, ctx: &mut SessionContext) -> Result<Reply, HodlbotError> {
        let input = input.to_lowercase();
        let mut rng = rand::thread_rng();

        for group in GREETING_GROUPS.iter() {
            if !group.pattern.is_match(&input) {
                continue;
            }
            let mut text = group
                .replies
                .choose(&mut rng)
                .copied()
                .unwrap_or(GENERIC_GREETING)
                .to_string();

            if let Some(favorite) = ctx.favorite_coins.choose(&mut rng) {
                text.push_str(&format!(" How's {} treating you?", favorite.to_uppercase()));
            }
            return Ok(Reply::plain(ReplyKind::Greeting, text));
        }

        // can_handle said yes but no group matched again: defensive path.
        Ok(Reply::plain(ReplyKind::Greeting, GENERIC_GREETING))
    }
}
