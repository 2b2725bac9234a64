//! Score invariants: exact dominance, fuzzy ceiling, monotonic fuzzy base.

use concordance::scoring::{base_score, compute_score, ScoreInput, FUZZY_BASE_SCORE};
use concordance::MatchType;
use proptest::prelude::*;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{3,8}", 1..4)
}

fn input<'a>(
    match_type: MatchType,
    similarity: f64,
    title: &'a str,
    text: &'a str,
    popularity: Option<f64>,
    tokens: &'a [String],
    phrase: &'a str,
) -> ScoreInput<'a> {
    ScoreInput {
        match_type,
        average_similarity: similarity,
        title,
        text,
        popularity,
        tokens,
        phrase,
    }
}

proptest! {
    #[test]
    fn prop_fuzzy_base_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(base_score(MatchType::Fuzzy, lo) <= base_score(MatchType::Fuzzy, hi));
    }

    #[test]
    fn prop_fuzzy_total_never_exceeds_ceiling(
        similarity in 0.0f64..=1.0,
        tokens in words(),
        title in "[a-z ]{0,30}",
        text in "[a-z ]{0,600}",
        popularity in prop::option::of(0.0f64..1000.0),
    ) {
        let phrase = tokens.join(" ");
        let score = compute_score(&input(
            MatchType::Fuzzy, similarity, &title, &text, popularity, &tokens, &phrase,
        ));
        prop_assert!(score <= FUZZY_BASE_SCORE);
    }

    #[test]
    fn prop_exact_beats_fuzzy_on_same_evidence(
        similarity in 0.0f64..=1.0,
        tokens in words(),
        title in "[a-z ]{0,30}",
        text in "[a-z ]{0,600}",
        popularity in prop::option::of(-100.0f64..1000.0),
    ) {
        let phrase = tokens.join(" ");
        let exact = compute_score(&input(
            MatchType::Exact, 0.0, &title, &text, popularity, &tokens, &phrase,
        ));
        let fuzzy = compute_score(&input(
            MatchType::Fuzzy, similarity, &title, &text, popularity, &tokens, &phrase,
        ));
        prop_assert!(exact > fuzzy);
    }

    #[test]
    fn prop_any_exact_beats_any_fuzzy(
        exact_text in "[a-z ]{0,600}",
        fuzzy_title in "[a-z ]{0,30}",
        fuzzy_text in "[a-z ]{0,100}",
        tokens in words(),
        similarity in 0.0f64..=1.0,
    ) {
        let phrase = tokens.join(" ");
        let exact = compute_score(&input(
            MatchType::Exact, 0.0, "", &exact_text, None, &tokens, "",
        ));
        let fuzzy = compute_score(&input(
            MatchType::Fuzzy, similarity, &fuzzy_title, &fuzzy_text, Some(1e6), &tokens, &phrase,
        ));
        prop_assert!(exact > fuzzy);
    }

    #[test]
    fn prop_score_is_deterministic(
        similarity in 0.0f64..=1.0,
        tokens in words(),
        text in "[a-z ]{0,300}",
    ) {
        let phrase = tokens.join(" ");
        let a = compute_score(&input(MatchType::Fuzzy, similarity, "", &text, None, &tokens, &phrase));
        let b = compute_score(&input(MatchType::Fuzzy, similarity, "", &text, None, &tokens, &phrase));
        prop_assert_eq!(a, b);
    }
}
