use proptest::prelude::*;
use shortlist_core::lexicon;

proptest! {
    #[test]
    fn normalize_is_idempotent(token in ".{0,40}") {
        let once = lexicon::normalize(&token);
        prop_assert_eq!(lexicon::normalize(&once), once);
    }

    #[test]
    fn normalize_output_is_trimmed_lowercase(token in "[A-Za-z0-9 .+#-]{0,40}") {
        let normalized = lexicon::normalize(&token);
        prop_assert_eq!(normalized.clone(), normalized.trim().to_lowercase());
    }

    #[test]
    fn normalized_skill_lists_have_no_duplicates(
        skills in proptest::collection::vec("[a-zA-Z0-9+#]{1,10}", 0..12)
    ) {
        let normalized = lexicon::normalize_skills(&skills);
        let mut deduped = normalized.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(normalized.len(), deduped.len());
    }

    #[test]
    fn expansion_always_contains_the_normalized_base(
        skills in proptest::collection::vec("[a-z0-9]{1,10}", 0..8)
    ) {
        let expanded = lexicon::expand_for_indexing(&skills);
        for skill in &skills {
            prop_assert!(expanded.contains(&lexicon::normalize(skill)));
        }
    }
}
