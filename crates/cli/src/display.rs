// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for command output.

use chrono::Local;
use procat_core::{
    DeleteOutcome, FieldNames, ModelListing, ProcessModel, ReplaceOutcome, RetypeOutcome, Summary,
    Tree, TreeNode, WorkItem,
};

/// Timestamps are shown in local time.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One line of `procat list` output.
pub fn format_listing_line(listing: &ModelListing) -> String {
    format!(
        "- {} {} ({}, {} items, {})",
        listing.id,
        listing.filename,
        listing.source,
        listing.summary.total_rows,
        listing
            .created_at
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
    )
}

/// One line per work item: `- [Type] (State) id: Title`.
pub fn format_work_item_line(item: &WorkItem) -> String {
    format!(
        "- [{}] ({}) {}: {}",
        item.work_item_type, item.state, item.id, item.title
    )
}

pub fn format_summary(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        format!("Rows: {}", summary.total_rows),
        format!("Sheets: {}", summary.total_sheets),
        format!("Types: {}", summary.work_item_types.join(", ")),
    ];
    if !summary.process_areas.is_empty() {
        lines.push(format!("Process areas: {}", summary.process_areas.join(", ")));
    }
    if !summary.source_models.is_empty() {
        lines.push(format!(
            "Merged from: {}",
            summary.source_models.join(", ")
        ));
    }
    lines
}

/// Model header, summary and the flat item list for `procat show`.
pub fn format_model_details(model: &ProcessModel) -> String {
    let mut output = vec![
        format!("Model {}: {}", model.id, model.filename),
        format!(
            "Created: {} ({})",
            model
                .created_at
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT),
            model.source
        ),
    ];
    output.extend(format_summary(&model.summary));

    if !model.work_items.is_empty() {
        output.push(String::new());
        output.push("Work items:".to_string());
        output.extend(
            model
                .work_items
                .iter()
                .map(|item| format!("  {}", format_work_item_line(item))),
        );
    }
    output.join("\n")
}

fn node_label(node: &TreeNode) -> String {
    format!("[{}] {} ({})", node.work_item_type, node.title, node.state)
}

/// Renders the tree with box-drawing guides. Roots have no connector.
pub fn format_tree(tree: &Tree) -> Vec<String> {
    fn children(nodes: &[TreeNode], prefix: &str, out: &mut Vec<String>) {
        for (i, node) in nodes.iter().enumerate() {
            let is_last = i + 1 == nodes.len();
            let connector = if is_last { "└── " } else { "├── " };
            out.push(format!("{prefix}{connector}{}", node_label(node)));
            let guide = if is_last { "    " } else { "│   " };
            children(&node.children, &format!("{prefix}{guide}"), out);
        }
    }

    let mut out = Vec::with_capacity(tree.total_items);
    for root in &tree.roots {
        out.push(node_label(root));
        children(&root.children, "", &mut out);
    }
    out
}

pub fn format_replace(outcome: &ReplaceOutcome) -> String {
    format!(
        "Replaced {} '{}' with '{}' in {} item(s) of {}",
        outcome.field_name,
        outcome.old_value,
        outcome.new_value,
        outcome.replacement_count,
        outcome.model_id
    )
}

pub fn format_delete(outcome: &DeleteOutcome) -> String {
    let mut lines = vec![format!(
        "Deleted {} of {} item(s) where {} = '{}' ({} remaining)",
        outcome.deletion_count,
        outcome.original_count,
        outcome.field_name,
        outcome.field_value,
        outcome.remaining_count
    )];
    lines.extend(
        outcome
            .deleted_items
            .iter()
            .map(|item| format!("  - {}: {}", item.id, item.title)),
    );
    lines.join("\n")
}

pub fn format_retype(outcome: &RetypeOutcome) -> String {
    format!(
        "Retyped {} item(s) in {} (types: {})",
        outcome.updated_count,
        outcome.model_id,
        outcome.summary.work_item_types.join(", ")
    )
}

pub fn format_field_names(names: &FieldNames) -> String {
    let mut lines = vec!["Fields:".to_string()];
    lines.extend(names.top_level.iter().map(|n| format!("  {n}")));
    if !names.custom_fields.is_empty() {
        lines.push("Custom fields:".to_string());
        lines.extend(names.custom_fields.iter().map(|n| format!("  {n}")));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
