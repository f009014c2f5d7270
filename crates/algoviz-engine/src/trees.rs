//! Binary search tree construction by repeated insertion.
//!
//! The tree is never built as linked nodes. Child relations live in a map
//! keyed by node value, which is sound because a BST holds each value once;
//! a repeated value is reported as `duplicate` and not inserted.

use indexmap::IndexMap;

use algoviz_core::action::Direction;
use algoviz_core::{Trace, TreeAction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Children {
    left: Option<i64>,
    right: Option<i64>,
}

pub fn bst_build(values: &[i64]) -> Trace {
    let Some((&root, rest)) = values.split_first() else {
        return Trace::error("Cannot build a tree from an empty list.");
    };

    let mut trace = Trace::new();
    let mut tree: IndexMap<i64, Children> = IndexMap::new();

    trace.emit(
        TreeAction::Insert {
            value: root,
            parent: None,
            direction: Direction::Root,
        },
        format!("Tree is empty. Inserting {root} as the root."),
    );
    tree.insert(root, Children::default());

    for &value in rest {
        let mut current = Some(root);
        let mut parent = None;

        while let Some(node) = current {
            trace.emit(
                TreeAction::Compare {
                    value: node,
                    new_value: value,
                },
                format!("Comparing new value {value} with node {node}."),
            );
            let children = tree[&node];
            if value < node {
                trace.emit(
                    TreeAction::Traverse {
                        from: node,
                        direction: Direction::Left,
                    },
                    format!("{value} < {node}. Moving left."),
                );
                parent = Some((node, Direction::Left));
                current = children.left;
            } else if value > node {
                trace.emit(
                    TreeAction::Traverse {
                        from: node,
                        direction: Direction::Right,
                    },
                    format!("{value} > {node}. Moving right."),
                );
                parent = Some((node, Direction::Right));
                current = children.right;
            } else {
                trace.emit(
                    TreeAction::Duplicate { value },
                    format!("Value {value} already exists. No insertion."),
                );
                parent = None;
                break;
            }
        }

        let Some((parent_value, direction)) = parent else {
            continue;
        };
        let side = if direction == Direction::Left { "left" } else { "right" };
        trace.emit(
            TreeAction::Insert {
                value,
                parent: Some(parent_value),
                direction,
            },
            format!("Found empty spot. Inserting {value} as the {side} child of {parent_value}."),
        );
        tree.insert(value, Children::default());
        if let Some(slot) = tree.get_mut(&parent_value) {
            match direction {
                Direction::Left => slot.left = Some(value),
                _ => slot.right = Some(value),
            }
        }
    }

    trace.complete("BST build process complete.")
}
