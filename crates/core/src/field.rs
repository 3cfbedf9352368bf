// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field resolution for bulk edits.
//!
//! A field name given by the user resolves against a work item in two steps:
//! a top-level attribute of that name wins; only when the item has no such
//! attribute is `custom_fields` consulted. The outcome is a [`FieldRef`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ProcessModel, WorkItem, AREA_PATH_FIELD};

/// Top-level work item attributes addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelField {
    Id,
    Title,
    Description,
    Type,
    State,
    AreaPath,
    IterationPath,
    Priority,
    Tags,
    SourceSheet,
    SourceRow,
    HierarchyLevel,
    CatalogStatus,
    ProcessSequenceId,
    SourceModel,
    OriginalId,
}

impl TopLevelField {
    pub const ALL: [TopLevelField; 16] = [
        TopLevelField::Id,
        TopLevelField::Title,
        TopLevelField::Description,
        TopLevelField::Type,
        TopLevelField::State,
        TopLevelField::AreaPath,
        TopLevelField::IterationPath,
        TopLevelField::Priority,
        TopLevelField::Tags,
        TopLevelField::SourceSheet,
        TopLevelField::SourceRow,
        TopLevelField::HierarchyLevel,
        TopLevelField::CatalogStatus,
        TopLevelField::ProcessSequenceId,
        TopLevelField::SourceModel,
        TopLevelField::OriginalId,
    ];

    /// Returns the attribute name used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopLevelField::Id => "id",
            TopLevelField::Title => "title",
            TopLevelField::Description => "description",
            TopLevelField::Type => "type",
            TopLevelField::State => "state",
            TopLevelField::AreaPath => "area_path",
            TopLevelField::IterationPath => "iteration_path",
            TopLevelField::Priority => "priority",
            TopLevelField::Tags => "tags",
            TopLevelField::SourceSheet => "source_sheet",
            TopLevelField::SourceRow => "source_row",
            TopLevelField::HierarchyLevel => "hierarchy_level",
            TopLevelField::CatalogStatus => "catalog_status",
            TopLevelField::ProcessSequenceId => "process_sequence_id",
            TopLevelField::SourceModel => "source_model",
            TopLevelField::OriginalId => "original_id",
        }
    }

    /// Reads the attribute as a string, or `None` when an optional attribute
    /// is unset on this item.
    pub fn get(&self, item: &WorkItem) -> Option<String> {
        match self {
            TopLevelField::Id => Some(item.id.clone()),
            TopLevelField::Title => Some(item.title.clone()),
            TopLevelField::Description => Some(item.description.clone()),
            TopLevelField::Type => Some(item.work_item_type.clone()),
            TopLevelField::State => Some(item.state.clone()),
            TopLevelField::AreaPath => Some(item.area_path.clone()),
            TopLevelField::IterationPath => Some(item.iteration_path.clone()),
            TopLevelField::Priority => Some(item.priority.to_string()),
            TopLevelField::Tags => Some(item.tags.clone()),
            TopLevelField::SourceSheet => Some(item.source_sheet.clone()),
            TopLevelField::SourceRow => Some(item.source_row.to_string()),
            TopLevelField::HierarchyLevel => Some(item.hierarchy_level.to_string()),
            TopLevelField::CatalogStatus => item.catalog_status.clone(),
            TopLevelField::ProcessSequenceId => item.process_sequence_id.clone(),
            TopLevelField::SourceModel => item.source_model.clone(),
            TopLevelField::OriginalId => item.original_id.clone(),
        }
    }

    /// Checks that `value` can be stored in this attribute.
    pub fn validate(&self, value: &str) -> Result<()> {
        let numeric = match self {
            TopLevelField::Id => {
                return Err(Error::ProtectedField {
                    field: self.as_str().to_string(),
                })
            }
            TopLevelField::Priority => value.parse::<u32>().is_ok(),
            TopLevelField::SourceRow => value.parse::<usize>().is_ok(),
            TopLevelField::HierarchyLevel => value.parse::<usize>().is_ok_and(|l| l >= 1),
            _ => true,
        };
        if numeric {
            Ok(())
        } else {
            Err(Error::InvalidFieldValue {
                field: self.as_str().to_string(),
                value: value.to_string(),
            })
        }
    }

    /// Writes `value` into the attribute.
    fn set(&self, item: &mut WorkItem, value: &str) -> Result<()> {
        self.validate(value)?;
        let invalid = || Error::InvalidFieldValue {
            field: self.as_str().to_string(),
            value: value.to_string(),
        };
        let value_owned = value.to_string();
        match self {
            TopLevelField::Id => {}
            TopLevelField::Title => item.title = value_owned,
            TopLevelField::Description => item.description = value_owned,
            TopLevelField::Type => item.work_item_type = value_owned,
            TopLevelField::State => item.state = value_owned,
            TopLevelField::AreaPath => item.set_area_path(value_owned),
            TopLevelField::IterationPath => item.iteration_path = value_owned,
            TopLevelField::Priority => item.priority = value.parse().map_err(|_| invalid())?,
            TopLevelField::Tags => item.tags = value_owned,
            TopLevelField::SourceSheet => item.source_sheet = value_owned,
            TopLevelField::SourceRow => item.source_row = value.parse().map_err(|_| invalid())?,
            TopLevelField::HierarchyLevel => {
                item.hierarchy_level = value.parse().map_err(|_| invalid())?
            }
            TopLevelField::CatalogStatus => item.catalog_status = Some(value_owned),
            TopLevelField::ProcessSequenceId => item.process_sequence_id = Some(value_owned),
            TopLevelField::SourceModel => item.source_model = Some(value_owned),
            TopLevelField::OriginalId => item.original_id = Some(value_owned),
        }
        Ok(())
    }
}

impl fmt::Display for TopLevelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TopLevelField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TopLevelField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown top-level field: '{s}'")))
    }
}

/// Where a field name resolved to on a particular work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    TopLevel(TopLevelField),
    Custom(String),
}

impl FieldRef {
    /// Reads the referenced value from `item`.
    pub fn get(&self, item: &WorkItem) -> Option<String> {
        match self {
            FieldRef::TopLevel(field) => field.get(item),
            FieldRef::Custom(name) => item.custom_fields.get(name).cloned(),
        }
    }

    /// Writes `value` into the referenced slot of `item`.
    ///
    /// The area path lives in two places; writing either keeps both equal.
    pub fn set(&self, item: &mut WorkItem, value: &str) -> Result<()> {
        match self {
            FieldRef::TopLevel(field) => field.set(item, value),
            FieldRef::Custom(name) if name == AREA_PATH_FIELD => {
                item.set_area_path(value);
                Ok(())
            }
            FieldRef::Custom(name) => {
                item.custom_fields.insert(name.clone(), value.to_string());
                Ok(())
            }
        }
    }
}

impl WorkItem {
    /// Resolves `name` against this item: top-level attribute first, then
    /// custom fields. Returns `None` when neither carries the name.
    pub fn field_ref(&self, name: &str) -> Option<FieldRef> {
        if let Ok(field) = name.parse::<TopLevelField>() {
            if field.get(self).is_some() {
                return Some(FieldRef::TopLevel(field));
            }
        }
        if self.custom_fields.contains_key(name) {
            return Some(FieldRef::Custom(name.to_string()));
        }
        None
    }

    /// The string-coerced value of `name` under the same precedence.
    pub fn field_value(&self, name: &str) -> Option<String> {
        self.field_ref(name).and_then(|r| r.get(self))
    }
}

/// Field names available across a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldNames {
    pub top_level: Vec<String>,
    pub custom_fields: Vec<String>,
}

/// Lists the top-level attributes set on the first item and every custom
/// field key seen on any item, both sorted.
pub fn field_names(model: &ProcessModel) -> FieldNames {
    let Some(first) = model.work_items.first() else {
        return FieldNames::default();
    };

    let mut top_level: Vec<String> = TopLevelField::ALL
        .iter()
        .filter(|f| f.get(first).is_some())
        .map(|f| f.as_str().to_string())
        .collect();
    top_level.sort();

    let custom: BTreeSet<&str> = model
        .work_items
        .iter()
        .flat_map(|i| i.custom_fields.keys().map(String::as_str))
        .collect();

    FieldNames {
        top_level,
        custom_fields: custom.into_iter().map(String::from).collect(),
    }
}

/// Sorted distinct non-empty values of `name` across the model's items.
pub fn field_values(model: &ProcessModel, name: &str) -> Vec<String> {
    let values: BTreeSet<String> = model
        .work_items
        .iter()
        .filter_map(|i| i.field_value(name))
        .filter(|v| !v.is_empty())
        .collect();
    values.into_iter().collect()
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
