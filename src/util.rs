use std::cmp::Ordering;

use crate::tree::TieBreak;

/// Which child slot of a `Node` a descent continues into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side an element goes to when it compared `ordering` against a node's element.
    /// `Equal` is settled by the tree's `TieBreak`.
    pub(crate) fn of(ordering: Ordering, tie_break: TieBreak) -> Self {
        match ordering {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => match tie_break {
                TieBreak::Left => Side::Left,
                TieBreak::Right => Side::Right,
            },
        }
    }
}
