//! End-to-end merge scenarios
//!
//! Each test runs the complete flow: validate roots -> plan -> execute ->
//! re-plan, and checks the destination tree on disk.

use pretty_assertions::assert_eq;
use safecp_core::{Action, ActionKind, Error, ExecuteOptions, TreeRoots, execute, plan};
use safecp_fs::checksum::compute_file_checksum;
use safecp_test_utils::TestTrees;

fn sample_source(trees: &TestTrees) {
    trees.mkdir_source("a");
    trees.write_source("a/x.txt", "hello");
    trees.write_source("b.txt", "world");
}

fn relative_destinations(trees: &TestTrees, actions: &[Action]) -> Vec<(ActionKind, String)> {
    actions
        .iter()
        .map(|a| {
            let relative = a.destination().strip_prefix(trees.destination()).unwrap();
            (a.kind(), relative.to_string_lossy().replace('\\', "/"))
        })
        .collect()
}

#[test]
fn test_sample_tree_full_cycle() {
    let trees = TestTrees::new();
    sample_source(&trees);
    let roots = trees.roots();

    let first = plan(&roots).unwrap();
    assert_eq!(
        relative_destinations(&trees, first.actions()),
        vec![
            (ActionKind::CreateDirectory, "a".to_string()),
            (ActionKind::CopyFile, "a/x.txt".to_string()),
            (ActionKind::CopyFile, "b.txt".to_string()),
        ]
    );

    let mut out = Vec::new();
    let report = execute(first, ExecuteOptions::commit(), &mut out).unwrap();
    assert_eq!(report.directories, 1);
    assert_eq!(report.files, 2);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);

    assert_eq!(trees.snapshot_destination(), trees.snapshot_source());

    let second = plan(&roots).unwrap();
    assert!(second.is_empty());
    assert_eq!(second.verified(), 2);
}

#[test]
fn test_mismatch_on_later_entry_blocks_earlier_actions() {
    let trees = TestTrees::new();
    sample_source(&trees);
    trees.write_destination("b.txt", "world!");
    let before = trees.snapshot_destination();

    let result = plan(&trees.roots());

    match result {
        Err(Error::ContentMismatch {
            source_digest,
            destination_digest,
            ..
        }) => {
            assert_eq!(
                source_digest,
                compute_file_checksum(&trees.source().join("b.txt")).unwrap()
            );
            assert_eq!(
                destination_digest,
                compute_file_checksum(&trees.destination().join("b.txt")).unwrap()
            );
        }
        other => panic!("expected ContentMismatch, got {other:?}"),
    }
    assert_eq!(trees.snapshot_destination(), before);
}

#[test]
fn test_trailing_slash_roots_are_rejected_before_planning() {
    let trees = TestTrees::new();
    let mut destination = trees.destination().into_os_string();
    destination.push("/");

    let err = TreeRoots::new(trees.source(), destination).unwrap_err();
    assert!(err.is_usage());
}

#[test]
fn test_verified_files_are_left_alone() {
    let trees = TestTrees::new();
    sample_source(&trees);
    trees.write_destination("b.txt", "world");

    let plan = plan(&trees.roots()).unwrap();
    assert_eq!(plan.files_to_copy(), 1);

    #[cfg(unix)]
    let inode_before = {
        use std::os::unix::fs::MetadataExt;
        std::fs::metadata(trees.destination().join("b.txt")).unwrap().ino()
    };

    execute(plan, ExecuteOptions::commit(), &mut Vec::new()).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let inode_after = std::fs::metadata(trees.destination().join("b.txt")).unwrap().ino();
        assert_eq!(inode_before, inode_after, "verified file must not be replaced");
    }
    trees.assert_destination_contains_source();
}

#[test]
fn test_empty_source_directories_are_merged() {
    let trees = TestTrees::new();
    trees.mkdir_source("empty/nested/leaf");

    let plan = plan(&trees.roots()).unwrap();
    assert_eq!(plan.directories_to_create(), 3);

    execute(plan, ExecuteOptions::commit(), &mut Vec::new()).unwrap();
    assert!(trees.destination().join("empty/nested/leaf").is_dir());
}
