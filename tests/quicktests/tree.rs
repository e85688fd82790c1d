use plain_bst::{NaturalOrder, TieBreak, Tree, TreeError};

use std::collections::BTreeMap;

use crate::Op;

/// Applies a set of operations to a tree and to a multiset of counts.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we hold the same elements in both.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, counts: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(*x);
                *counts.entry(*x).or_default() += 1;
            }
            Op::Delete(x) => match counts.get_mut(x) {
                Some(count) => {
                    assert_eq!(bst.delete(x), Ok(*x));
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(x);
                    }
                }
                None => assert_eq!(bst.delete(x), Err(TreeError::NotFound)),
            },
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let expected: Vec<i8> = counts
        .iter()
        .flat_map(|(x, count)| std::iter::repeat(*x).take(*count))
        .collect();

    tree.in_order().copied().eq(expected) && tree.len() == counts.values().sum::<usize>()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let mut sorted = xs;
    sorted.sort_unstable();
    tree.in_order().copied().eq(sorted)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x).map(|n| n.element()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before: Vec<i8> = tree.in_order().copied().collect();

    let found_none = nots
        .iter()
        .filter(|x| !xs.contains(x))
        .all(|x| tree.search(x).is_none());

    // Searching never changes the tree.
    found_none && tree.in_order().copied().eq(before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::with_tie_break(NaturalOrder, TieBreak::Right);
    for x in &xs {
        tree.insert(*x);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // Only one occurrence goes per delete.
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                assert_eq!(tree.delete(delete), Ok(*delete));
            }
            None => assert_eq!(tree.delete(delete), Err(TreeError::NotFound)),
        }
    }

    still_present.sort_unstable();
    tree.len() == still_present.len() && tree.in_order().copied().eq(still_present)
}

#[quickcheck]
fn parent_links_to_found_node(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| {
        let found = tree.search(x).map(|n| n as *const _);
        match tree.parent(x) {
            Some(parent) => {
                let left = parent.left().map(|n| n as *const _);
                let right = parent.right().map(|n| n as *const _);
                found == left || found == right
            }
            None => found == tree.root().map(|n| n as *const _),
        }
    })
}
