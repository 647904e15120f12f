//! Tests for full path formatting

use rstest::rstest;

use scenetree::domain::{DomainError, NodeId, PathFormat, SceneArena};

/// Root A, child B, grandchild C.
fn chain() -> (SceneArena, NodeId, NodeId, NodeId) {
    let mut arena = SceneArena::new();
    let a = arena.insert_node("A", None).unwrap();
    let b = arena.insert_node("B", Some(a)).unwrap();
    let c = arena.insert_node("C", Some(b)).unwrap();
    (arena, a, b, c)
}

// ============================================================
// Default format
// ============================================================

#[test]
fn given_root_when_formatting_then_returns_prefix_and_name() {
    let (arena, a, _, _) = chain();
    assert_eq!(arena.full_path(a).unwrap(), "/A");
}

#[test]
fn given_deep_node_when_formatting_then_starts_with_root_name() {
    let (arena, _, b, c) = chain();
    assert_eq!(arena.full_path(b).unwrap(), "/A.B");
    assert_eq!(arena.full_path(c).unwrap(), "/A.B.C");
}

#[test]
fn given_five_levels_when_formatting_then_joins_all_names() {
    let mut arena = SceneArena::new();
    let mut parent = arena.insert_node("n4", None).unwrap();
    for name in ["n3", "n2", "n1", "n0"] {
        parent = arena.insert_node(name, Some(parent)).unwrap();
    }
    assert_eq!(arena.full_path(parent).unwrap(), "/n4.n3.n2.n1.n0");
}

// ============================================================
// Custom format
// ============================================================

#[rstest]
#[case("-", "ROOT:", "ROOT:A-B-C")]
#[case(".", "/", "/A.B.C")]
#[case("::", "", "A::B::C")]
#[case("/", "scene:/", "scene:/A/B/C")]
fn given_custom_format_when_formatting_grandchild_then_uses_it(
    #[case] delimiter: &str,
    #[case] prefix: &str,
    #[case] expected: &str,
) {
    let (arena, _, _, c) = chain();
    assert_eq!(arena.full_path_with(c, delimiter, prefix).unwrap(), expected);
    assert_eq!(
        arena
            .full_path_fmt(c, &PathFormat::new(delimiter, prefix))
            .unwrap(),
        expected
    );
}

#[test]
fn given_custom_format_when_formatting_root_then_no_delimiter_is_inserted() {
    let (arena, a, _, _) = chain();
    assert_eq!(arena.full_path_with(a, "-", "ROOT:").unwrap(), "ROOT:A");
}

#[test]
fn given_parent_when_formatting_child_then_parent_path_is_prefix() {
    let (arena, a, b, c) = chain();
    let pairs = [(a, b), (b, c)];
    for (parent, child) in pairs {
        let parent_path = arena.full_path(parent).unwrap();
        let child_path = arena.full_path(child).unwrap();
        assert!(
            child_path.starts_with(&format!("{}.", parent_path)),
            "{} should extend {}",
            child_path,
            parent_path
        );
    }
}

#[test]
fn given_root_and_child_with_same_name_when_formatting_then_paths_differ() {
    let mut arena = SceneArena::new();
    let root = arena.insert_node("Camera", None).unwrap();
    let child = arena.insert_node("Camera", Some(root)).unwrap();

    assert_eq!(arena.full_path(root).unwrap(), "/Camera");
    assert_eq!(arena.full_path(child).unwrap(), "/Camera.Camera");

    let format = PathFormat::default();
    let child_path = arena.full_path(child).unwrap();
    assert_eq!(arena.find_by_path(&child_path, &format), Some(child));
    assert_eq!(arena.find_by_path("/Camera", &format), Some(root));
}

#[test]
fn given_siblings_with_same_name_when_formatting_then_paths_are_equal() {
    let mut arena = SceneArena::new();
    let root = arena.insert_node("Scene", None).unwrap();
    let first = arena.insert_node("Light", Some(root)).unwrap();
    let second = arena.insert_node("Light", Some(root)).unwrap();
    assert_ne!(first, second);
    assert_eq!(arena.full_path(first).unwrap(), arena.full_path(second).unwrap());
}

// ============================================================
// Invalid nodes
// ============================================================

#[test]
fn given_removed_node_when_formatting_then_invalid_argument() {
    let (mut arena, _, b, c) = chain();
    arena.remove_subtree(b).unwrap();

    let err = arena.full_path(c).unwrap_err();
    assert!(
        matches!(err, DomainError::InvalidArgument { param: "node", .. }),
        "unexpected error: {:?}",
        err
    );
}

// ============================================================
// Lookup by path
// ============================================================

#[test]
fn given_unique_names_when_looking_up_each_path_then_finds_the_node() {
    let (arena, a, b, c) = chain();
    let format = PathFormat::default();
    for node in [a, b, c] {
        let path = arena.full_path_fmt(node, &format).unwrap();
        assert_eq!(arena.find_by_path(&path, &format), Some(node));
    }
}

#[test]
fn given_duplicate_paths_when_looking_up_then_returns_first_in_level_order() {
    let mut arena = SceneArena::new();
    let root = arena.insert_node("Scene", None).unwrap();
    let first = arena.insert_node("Light", Some(root)).unwrap();
    arena.insert_node("Light", Some(root)).unwrap();

    assert_eq!(
        arena.find_by_path("/Scene.Light", &PathFormat::default()),
        Some(first)
    );
}

#[test]
fn given_unknown_path_when_looking_up_then_returns_none() {
    let (arena, _, _, _) = chain();
    assert_eq!(arena.find_by_path("/A.B.X", &PathFormat::default()), None);
    assert_eq!(SceneArena::new().find_by_path("/A", &PathFormat::default()), None);
}
