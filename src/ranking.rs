use std::cmp::Ordering;

use crate::models::{Candidate, ConvictionScore, SpreadSummary};
use crate::normalize::{round_display, ScoreNormalizer};

pub fn rank_candidates<N: ScoreNormalizer + ?Sized>(
    candidates: &[Candidate],
    normalizer: &N,
) -> Vec<ConvictionScore> {
    let mut scores: Vec<ConvictionScore> = candidates
        .iter()
        .map(|candidate| {
            let conviction = normalizer.normalize(candidate.raw_score);
            tracing::debug!(
                symbol = %candidate.symbol,
                raw_score = candidate.raw_score,
                conviction,
                "normalized candidate"
            );
            ConvictionScore {
                symbol: candidate.symbol.clone(),
                raw_score: candidate.raw_score,
                conviction,
                note: candidate.note.clone(),
            }
        })
        .collect();

    scores.sort_by(|a, b| {
        b.conviction
            .partial_cmp(&a.conviction)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.raw_score.partial_cmp(&a.raw_score).unwrap_or(Ordering::Equal))
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    scores
}

pub fn summarize_spread(scores: &[ConvictionScore]) -> SpreadSummary {
    if scores.is_empty() {
        return SpreadSummary {
            count: 0,
            min: 0.0,
            max: 0.0,
            distinct: 0,
        };
    }

    let min = scores
        .iter()
        .map(|s| s.conviction)
        .fold(f64::INFINITY, f64::min);
    let max = scores
        .iter()
        .map(|s| s.conviction)
        .fold(f64::NEG_INFINITY, f64::max);

    // Compare in tenths so the count matches what the dashboard shows.
    let mut displayed: Vec<i64> = scores
        .iter()
        .map(|s| (round_display(s.conviction) * 10.0).round() as i64)
        .collect();
    displayed.sort_unstable();
    displayed.dedup();

    SpreadSummary {
        count: scores.len(),
        min,
        max,
        distinct: displayed.len(),
    }
}

pub fn conviction_class(percent: f64) -> &'static str {
    if percent >= 75.0 {
        "positive"
    } else if percent < 40.0 {
        "negative"
    } else {
        "neutral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::LinearNormalizer;

    fn candidate(symbol: &str, raw_score: f64) -> Candidate {
        Candidate {
            symbol: symbol.to_string(),
            raw_score,
            note: String::new(),
        }
    }

    #[test]
    fn ranks_by_conviction_descending() {
        let normalizer = LinearNormalizer::new(130.0).unwrap();
        let candidates = vec![
            candidate("AMD", 90.0),
            candidate("NVDA", 113.0),
            candidate("PLTR", 55.0),
        ];

        let ranked = rank_candidates(&candidates, &normalizer);
        let symbols: Vec<&str> = ranked.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["NVDA", "AMD", "PLTR"]);
        assert!((ranked[0].conviction - 86.923).abs() < 0.001);
    }

    #[test]
    fn clamped_ties_break_on_raw_score_then_symbol() {
        let normalizer = LinearNormalizer::new(130.0).unwrap();
        let candidates = vec![
            candidate("TSLA", 150.0),
            candidate("MSFT", 200.0),
            candidate("AAPL", 150.0),
        ];

        let ranked = rank_candidates(&candidates, &normalizer);
        assert!(ranked.iter().all(|s| s.conviction == 100.0));
        let symbols: Vec<&str> = ranked.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL", "TSLA"]);
    }

    #[test]
    fn spread_counts_distinct_displayed_values() {
        let normalizer = LinearNormalizer::new(130.0).unwrap();
        let candidates = vec![
            candidate("A", 107.0),
            candidate("B", 93.0),
            candidate("C", 93.01),
            candidate("D", 31.0),
        ];

        let ranked = rank_candidates(&candidates, &normalizer);
        let spread = summarize_spread(&ranked);
        assert_eq!(spread.count, 4);
        assert_eq!(spread.distinct, 3);
        assert!((spread.max - 82.307).abs() < 0.001);
        assert!((spread.min - 23.846).abs() < 0.001);
    }

    #[test]
    fn empty_spread_is_zeroed() {
        let spread = summarize_spread(&[]);
        assert_eq!(spread.count, 0);
        assert_eq!(spread.distinct, 0);
    }

    #[test]
    fn classes_follow_thresholds() {
        assert_eq!(conviction_class(82.3), "positive");
        assert_eq!(conviction_class(75.0), "positive");
        assert_eq!(conviction_class(60.0), "neutral");
        assert_eq!(conviction_class(40.0), "neutral");
        assert_eq!(conviction_class(39.9), "negative");
    }
}
