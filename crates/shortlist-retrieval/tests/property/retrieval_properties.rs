use proptest::prelude::*;

use shortlist_core::config::RetrievalConfig;
use shortlist_core::models::{Availability, EmployeeRecord, ParsedQuery};
use shortlist_embeddings::indexer::build_index;
use shortlist_embeddings::HashedTermProvider;
use shortlist_retrieval::filter::{self, PoolEntry, RelaxationStage};
use shortlist_retrieval::{scorer, QueryParser, RetrievalEngine};
use shortlist_storage::Catalog;

fn availability_strategy() -> impl Strategy<Value = Availability> {
    prop_oneof![
        Just(Availability::Available),
        Just(Availability::TwoWeeks),
        Just(Availability::OneMonth),
        Just(Availability::Allocated),
    ]
}

fn roster_strategy() -> impl Strategy<Value = Vec<EmployeeRecord>> {
    proptest::collection::vec(
        (
            proptest::collection::vec("[a-z]{2,8}", 0..5),
            proptest::collection::vec("[a-z ]{4,24}", 0..3),
            0u32..40,
            availability_strategy(),
        ),
        1..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (skills, projects, years, availability))| EmployeeRecord {
                id: i as u64 + 1,
                name: format!("Employee {}", i + 1),
                skills,
                projects,
                experience_years: years,
                availability,
            })
            .collect()
    })
}

fn parsed_strategy() -> impl Strategy<Value = ParsedQuery> {
    (
        proptest::option::of(0u32..20),
        proptest::option::of(availability_strategy()),
        proptest::option::of(proptest::collection::vec("[a-z]{2,8}", 1..4)),
        proptest::option::of(proptest::collection::vec(
            prop_oneof![Just("fintech".to_string()), Just("healthcare".to_string())],
            1..3,
        )),
    )
        .prop_map(|(min_years, availability, required_skills, domains)| ParsedQuery {
            min_years,
            availability,
            required_skills,
            domains,
            raw_query: String::new(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ranking_is_deterministic(roster in roster_strategy(), query in "[a-z0-9 +]{0,50}") {
        let catalog = Catalog::from_records(roster).unwrap();
        let provider = HashedTermProvider::new(64);
        let (index, mapping) = build_index(&catalog, &provider).unwrap();
        let engine = RetrievalEngine::new(
            &catalog, &index, &mapping, &provider, RetrievalConfig::default(),
        )
        .unwrap();

        let first = engine.shortlist(&query, 5).unwrap();
        let second = engine.shortlist(&query, 5).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn truncation_is_monotonic(
        roster in roster_strategy(),
        query in "[a-z ]{0,40}",
        k in 0usize..6,
        extra in 0usize..6,
    ) {
        let catalog = Catalog::from_records(roster).unwrap();
        let provider = HashedTermProvider::new(64);
        let (index, mapping) = build_index(&catalog, &provider).unwrap();
        let engine = RetrievalEngine::new(
            &catalog, &index, &mapping, &provider, RetrievalConfig::default(),
        )
        .unwrap();

        let short = engine.shortlist(&query, k).unwrap();
        let long = engine.shortlist(&query, k + extra).unwrap();
        prop_assert!(short.len() <= long.len());
        prop_assert_eq!(short.as_slice(), &long[..short.len()]);
    }

    #[test]
    fn relaxation_never_returns_empty_for_non_empty_index(
        roster in roster_strategy(),
        query in "[a-z0-9 +]{0,50}",
    ) {
        let catalog = Catalog::from_records(roster).unwrap();
        let provider = HashedTermProvider::new(64);
        let (index, mapping) = build_index(&catalog, &provider).unwrap();
        let engine = RetrievalEngine::new(
            &catalog, &index, &mapping, &provider, RetrievalConfig::default(),
        )
        .unwrap();

        let candidates = engine.shortlist(&query, 1).unwrap();
        prop_assert!(!candidates.is_empty());
    }

    #[test]
    fn strict_survivors_satisfy_hard_constraints(
        roster in roster_strategy(),
        parsed in parsed_strategy(),
    ) {
        let entries: Vec<PoolEntry<'_>> = roster
            .iter()
            .map(|employee| PoolEntry { similarity: 0.5, employee })
            .collect();
        let (survivors, stage) = filter::apply(&entries, &parsed, &RetrievalConfig::default());

        if stage == RelaxationStage::Strict {
            for entry in &survivors {
                prop_assert!(filter::meets_years(entry.employee, parsed.min_years));
                prop_assert!(filter::meets_availability(entry.employee, parsed.availability));
            }
        }
        // The ladder never empties a non-empty pool.
        prop_assert_eq!(survivors.is_empty(), entries.is_empty());
    }

    #[test]
    fn boost_is_non_negative_and_additive(
        roster in roster_strategy(),
        parsed in parsed_strategy(),
    ) {
        let weights = RetrievalConfig::default().weights;
        for employee in &roster {
            let b = scorer::boost(employee, &parsed, &weights);
            prop_assert!(b.skill >= 0.0);
            prop_assert!(b.domain >= 0.0);
            prop_assert!(b.years >= 0.0);
            prop_assert!(b.availability >= 0.0);
            let sum = b.skill + b.domain + b.years + b.availability;
            prop_assert!((b.total() - sum).abs() < 1e-6);
        }
    }

    #[test]
    fn dropping_a_constraint_never_raises_boost(
        roster in roster_strategy(),
        parsed in parsed_strategy(),
    ) {
        let weights = RetrievalConfig::default().weights;
        for employee in &roster {
            let full = scorer::boost(employee, &parsed, &weights).total();

            let mut without_years = parsed.clone();
            without_years.min_years = None;
            prop_assert!(scorer::boost(employee, &without_years, &weights).total() <= full + 1e-6);

            let mut without_skills = parsed.clone();
            without_skills.required_skills = None;
            prop_assert!(scorer::boost(employee, &without_skills, &weights).total() <= full + 1e-6);

            let mut without_domains = parsed.clone();
            without_domains.domains = None;
            prop_assert!(scorer::boost(employee, &without_domains, &weights).total() <= full + 1e-6);
        }
    }

    #[test]
    fn parser_never_panics_and_preserves_raw(text in ".{0,200}") {
        let parsed = QueryParser::new().parse(&text);
        prop_assert_eq!(parsed.raw_query, text);
        if let Some(skills) = &parsed.required_skills {
            prop_assert!(!skills.is_empty());
        }
        if let Some(domains) = &parsed.domains {
            prop_assert!(!domains.is_empty());
        }
    }
}
