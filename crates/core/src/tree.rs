// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parent/child reconstruction from a flat work item list.
//!
//! An item at level `L` with area path `P` hangs under the item whose area
//! path is `P` minus its last segment and whose level is `L - 1`. Items with
//! no such parent are roots. When several items share the same
//! (path, level) key the first one in list order is the parent.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::WorkItem;

/// One work item in the display tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub work_item_type: String,
    pub state: String,
    pub area_path: String,
    pub hierarchy_level: usize,
    pub children: Vec<TreeNode>,
    /// Always false; the tree never invents grouping nodes.
    pub is_folder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tree {
    pub roots: Vec<TreeNode>,
    pub total_items: usize,
    pub total_folders: usize,
}

impl Tree {
    /// Depth-first walk yielding each node with its depth (roots are 0).
    pub fn walk(&self) -> Vec<(usize, &TreeNode)> {
        fn visit<'a>(node: &'a TreeNode, depth: usize, out: &mut Vec<(usize, &'a TreeNode)>) {
            out.push((depth, node));
            for child in &node.children {
                visit(child, depth + 1, out);
            }
        }
        let mut out = Vec::with_capacity(self.total_items);
        for root in &self.roots {
            visit(root, 0, &mut out);
        }
        out
    }
}

/// Builds the display tree. Children keep their list order.
pub fn build_tree(items: &[WorkItem]) -> Tree {
    let mut first_at: HashMap<(&str, usize), usize> = HashMap::new();
    for (i, item) in items.iter().enumerate() {
        first_at
            .entry((item.area_path.as_str(), item.hierarchy_level))
            .or_insert(i);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
    let mut roots = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let parent = item
            .hierarchy_level
            .checked_sub(1)
            .and_then(|level| first_at.get(&(item.parent_path(), level)))
            .copied();
        match parent {
            Some(p) => children[p].push(i),
            None => roots.push(i),
        }
    }

    Tree {
        roots: roots.iter().map(|&r| node(items, &children, r)).collect(),
        total_items: items.len(),
        total_folders: 0,
    }
}

fn node(items: &[WorkItem], children: &[Vec<usize>], index: usize) -> TreeNode {
    let item = &items[index];
    TreeNode {
        id: item.id.clone(),
        title: item.title.clone(),
        work_item_type: item.work_item_type.clone(),
        state: item.state.clone(),
        area_path: item.area_path.clone(),
        hierarchy_level: item.hierarchy_level,
        children: children[index]
            .iter()
            .map(|&c| node(items, children, c))
            .collect(),
        is_folder: false,
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
