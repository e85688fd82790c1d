//! Drives the tree the way a console front end would: a stream of numbers terminated by `0`
//! goes in, the in-order elements come out before and after a single delete.

use plain_bst::{Tree, TreeError};

/// Inserts every element before the `0` sentinel.
fn read_until_zero(input: &[i64]) -> Tree<i64> {
    let mut tree = Tree::new();
    for x in input.iter().take_while(|x| **x != 0) {
        tree.insert(*x);
    }
    tree
}

fn listing(tree: &Tree<i64>) -> Vec<i64> {
    tree.in_order().copied().collect()
}

#[test]
fn scenario_insert_then_list() {
    let tree = read_until_zero(&[5, 3, 8, 1, 4, 7, 9, 0, 100]);

    assert_eq!(listing(&tree), [1, 3, 4, 5, 7, 8, 9]);
    assert!(!tree.contains(&100));
}

#[test]
fn scenario_delete_two_children_then_leaf() {
    let mut tree = read_until_zero(&[5, 3, 8, 1, 4, 7, 9, 0]);

    assert_eq!(tree.delete(&5), Ok(5));
    assert_eq!(listing(&tree), [1, 3, 4, 7, 8, 9]);
    assert_eq!(tree.root().map(|n| *n.element()), Some(7));

    assert_eq!(tree.delete(&1), Ok(1));
    assert_eq!(listing(&tree), [3, 4, 7, 8, 9]);
    assert_eq!(tree.parent(&4).map(|n| *n.element()), Some(3));
}

#[test]
fn scenario_delete_only_root() {
    let mut tree = read_until_zero(&[5, 0]);

    assert_eq!(tree.delete(&5), Ok(5));
    assert!(listing(&tree).is_empty());
    assert!(tree.is_empty());
}

#[test]
fn scenario_delete_missing() {
    let mut tree = read_until_zero(&[5, 3, 8, 1, 4, 7, 9, 0]);
    let before = listing(&tree);

    assert_eq!(tree.delete(&42), Err(TreeError::NotFound));
    assert_eq!(listing(&tree), before);
}

#[test]
fn empty_input() {
    let mut tree = read_until_zero(&[0, 5]);

    assert!(tree.is_empty());
    assert_eq!(tree.delete(&5), Err(TreeError::NotFound));
}

#[test]
fn not_found_has_a_message() {
    assert_eq!(TreeError::NotFound.to_string(), "element not found in tree");
}
