//! Recall and normalization properties.
//!
//! Words are drawn from a vowel-heavy alphabet that cannot spell any stop word
//! longer than two letters, so every generated word is indexed.

use crate::common::*;
use concordance::fuzzy::bounded_distance;
use concordance::{normalize, MatchType};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[bdfgkmpvz][aeiou][bdfgkmpvz][aeiou]{1,3}"
}

proptest! {
    #[test]
    fn prop_title_word_is_found_exactly(
        words in prop::collection::vec(word(), 1..4),
        pick in any::<prop::sample::Index>(),
    ) {
        let title = words.join(" ");
        let engine = books_engine(vec![make_book(&title, "Old Testament")]);
        let query = pick.get(&words);

        let response = search(&engine, query);
        prop_assert_eq!(response.results.len(), 1);
        prop_assert_eq!(response.results[0].match_type, MatchType::Exact);
        prop_assert_eq!(&response.results[0].title, &title);
    }

    #[test]
    fn prop_case_and_punctuation_do_not_change_results(w in word()) {
        let engine = books_engine(vec![make_book(&w, "Old Testament")]);
        let plain = search(&engine, &w);
        let noisy = search(&engine, &format!("  {}!?", w.to_uppercase()));
        prop_assert_eq!(ranking(&plain), ranking(&noisy));
    }

    #[test]
    fn prop_bounded_distance_agrees_with_oracle(
        a in "[a-e]{0,8}",
        b in "[a-e]{0,8}",
        max in 0usize..4,
    ) {
        let expected = strsim::levenshtein(&a, &b);
        let got = bounded_distance(&a, &b, max);
        if expected <= max {
            prop_assert_eq!(got, Some(expected));
        } else {
            prop_assert_eq!(got, None);
        }
    }

    #[test]
    fn prop_normalize_is_idempotent(s in "[a-zA-Z0-9éèüñçÉ ,.;:'!?-]{0,60}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.starts_with(' '));
        prop_assert!(!once.ends_with(' '));
        prop_assert!(!once.contains("  "));
    }
}
