//! Property tests for test-file exclusion.

use proptest::prelude::*;

use solpipe::domain::policies::TestFilePolicy;
use solpipe::{filter_sources, SourcePathSet, SourceSetFilter};

fn source_path() -> impl Strategy<Value = String> {
    let dir = proptest::string::string_regex("(contracts|src|lib)(/[a-z]{1,6}){0,2}").unwrap();
    let stem = proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,10}").unwrap();
    let ext = prop_oneof![Just(".sol"), Just(".t.sol"), Just(".s.sol"), Just(".t.sol.bak")];
    (dir, stem, ext).prop_map(|(dir, stem, ext)| format!("{}/{}{}", dir, stem, ext))
}

fn source_set() -> impl Strategy<Value = SourcePathSet> {
    proptest::collection::vec(source_path(), 0..=24)
        .prop_map(|paths| paths.into_iter().collect::<SourcePathSet>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: output is a subset of the input and keeps input order.
    #[test]
    fn property_filter_is_ordered_subset(input in source_set()) {
        let output = filter_sources(input.clone());

        prop_assert!(output.is_subset_of(&input));
        let positions: Vec<usize> = output
            .iter()
            .map(|p| input.iter().position(|q| q == p).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: no path ending in `.t.sol` survives, and every other path does.
    #[test]
    fn property_filter_removes_exactly_test_files(input in source_set()) {
        let output = filter_sources(input.clone());

        prop_assert!(output.iter().all(|p| !p.ends_with(".t.sol")));
        let expected = input.iter().filter(|p| !p.ends_with(".t.sol")).count();
        prop_assert_eq!(output.len(), expected);
    }

    /// PROPERTY: filtering twice is the same as filtering once.
    #[test]
    fn property_filter_is_idempotent(input in source_set()) {
        let once = filter_sources(input);
        let twice = filter_sources(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: an empty suffix list leaves the set untouched.
    #[test]
    fn property_empty_policy_is_identity(input in source_set()) {
        let filter = SourceSetFilter::new(TestFilePolicy::new(Vec::<String>::new()));
        prop_assert_eq!(filter.filter_sources(input.clone()), input);
    }
}
