//! Property tests over randomly generated source and destination trees

use std::collections::BTreeMap;

use proptest::prelude::*;
use safecp_core::{CopyStrategy, Error, ExecuteOptions, execute, plan};
use safecp_test_utils::TestTrees;

/// Relative file path -> content. Paths use a tiny alphabet so directories
/// are shared between files often.
fn tree_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    let path = prop::collection::vec("[ab]", 1..4).prop_map(|parts| {
        let dirs = &parts[..parts.len() - 1];
        let file = format!("f{}.txt", parts[parts.len() - 1]);
        dirs.iter()
            .map(|d| format!("d{d}"))
            .chain(std::iter::once(file))
            .collect::<Vec<_>>()
            .join("/")
    });
    prop::collection::btree_map(path, "[a-z]{0,8}", 0..8)
}

fn populate(trees: &TestTrees, source: &BTreeMap<String, String>, destination: &BTreeMap<String, String>) {
    for (path, content) in source {
        trees.write_source(path, content);
    }
    for (path, content) in destination {
        trees.write_destination(path, content);
    }
}

fn has_conflict(source: &BTreeMap<String, String>, destination: &BTreeMap<String, String>) -> bool {
    source
        .iter()
        .any(|(path, content)| destination.get(path).is_some_and(|other| other != content))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn dry_run_never_mutates(source in tree_strategy(), destination in tree_strategy()) {
        let trees = TestTrees::new();
        populate(&trees, &source, &destination);
        let before = trees.snapshot_destination();

        if let Ok(plan) = plan(&trees.roots()) {
            execute(plan, ExecuteOptions::dry_run(), &mut Vec::new()).unwrap();
        }

        prop_assert_eq!(trees.snapshot_destination(), before);
    }

    #[test]
    fn conflicts_abort_before_mutation(source in tree_strategy(), destination in tree_strategy()) {
        prop_assume!(has_conflict(&source, &destination));
        let trees = TestTrees::new();
        populate(&trees, &source, &destination);
        let before = trees.snapshot_destination();

        let result = plan(&trees.roots());

        prop_assert!(result.as_ref().is_err_and(Error::is_mismatch));
        prop_assert_eq!(trees.snapshot_destination(), before);
    }

    #[test]
    fn commit_is_complete_and_idempotent(
        source in tree_strategy(),
        destination in tree_strategy(),
        copy_only in any::<bool>(),
    ) {
        prop_assume!(!has_conflict(&source, &destination));
        let trees = TestTrees::new();
        populate(&trees, &source, &destination);
        let strategy = if copy_only { CopyStrategy::CopyOnly } else { CopyStrategy::HardLinkOrCopy };

        let first = plan(&trees.roots()).unwrap();
        execute(first, ExecuteOptions::commit().with_strategy(strategy), &mut Vec::new()).unwrap();

        trees.assert_destination_contains_source();
        for (path, content) in &destination {
            prop_assert_eq!(&trees.read_destination(path), content);
        }
        let second = plan(&trees.roots()).unwrap();
        prop_assert!(second.is_empty());
        prop_assert_eq!(second.verified(), source.len());
    }
}
