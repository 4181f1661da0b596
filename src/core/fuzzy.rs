// src/core/fuzzy.rs — Fuzzy coin-name resolution

use strsim::jaro_winkler;

/// Best candidate for a free-text query, with a confidence score in [0, 100].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub candidate: String,
    pub score: u8,
}

impl MatchResult {
    /// Threshold check; the threshold itself is owned by callers.
    pub fn meets(&self, threshold: u8) -> bool {
        self.score >= threshold
    }
}

/// Score `text` against every candidate and return the best match.
///
/// A candidate scores the stronger of its Jaro-Winkler similarity to the
/// whole lowercased query and to any single whitespace token, scaled to
/// [0, 100], so a coin name buried in a longer question ("price prediction
/// bitcon") still resolves. The first candidate with the maximum score wins.
pub fn best_match<I, S>(text: &str, candidates: I) -> Option<MatchResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let query = text.to_lowercase();
    let tokens: Vec<&str> = query.split_whitespace().collect();

    let mut best: Option<MatchResult> = None;
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = score_candidate(&query, &tokens, candidate);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(MatchResult {
                candidate: candidate.to_string(),
                score,
            });
        }
    }
    best
}

fn score_candidate(query: &str, tokens: &[&str], candidate: &str) -> u8 {
    let whole = jaro_winkler(query, candidate);
    let token_best = tokens
        .iter()
        .map(|token| jaro_winkler(token, candidate))
        .fold(0.0_f64, f64::max);
    (whole.max(token_best) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const COINS: [&str; 6] = [
        "bitcoin",
        "cardano",
        "chainlink",
        "dogecoin",
        "ethereum",
        "solana",
    ];

    #[test]
    fn test_exact_name_scores_100() {
        let m = best_match("ethereum", COINS).unwrap();
        assert_eq!(m.candidate, "ethereum");
        assert_eq!(m.score, 100);
    }

    #[test]
    fn test_misspelling_inside_longer_query_resolves() {
        let m = best_match("price prediction bitcon", COINS).unwrap();
        assert_eq!(m.candidate, "bitcoin");
        assert!(m.score >= 70, "score was {}", m.score);
    }

    #[test]
    fn test_nonsense_scores_below_threshold() {
        let m = best_match("asdkjasd nonsense", COINS).unwrap();
        assert!(m.score < 70, "score was {} for {}", m.score, m.candidate);
    }

    #[test]
    fn test_case_is_ignored() {
        let m = best_match("should I buy ETHEREUM", COINS).unwrap();
        assert_eq!(m.candidate, "ethereum");
        assert_eq!(m.score, 100);
    }

    #[test]
    fn test_tie_break_keeps_first_candidate() {
        let m = best_match("zq", ["ab", "cd"]).unwrap();
        assert_eq!(m.candidate, "ab");
    }

    #[test]
    fn test_no_candidates_yields_none() {
        assert!(best_match("bitcoin", Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let at = MatchResult {
            candidate: "bitcoin".into(),
            score: 70,
        };
        let below = MatchResult {
            candidate: "bitcoin".into(),
            score: 69,
        };
        assert!(at.meets(70));
        assert!(!below.meets(70));
    }
}
