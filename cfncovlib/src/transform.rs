//! Flatten a catalog section into table rows.
//!
//! Each resource becomes one [`Row`]: its identifier under `resource` plus
//! one boolean per tracked operation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Section;

/// Row key holding the resource identifier.
pub const RESOURCE_KEY: &str = "resource";

/// A single cell value in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Flag(bool),
}

impl CellValue {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Create a boolean cell
    pub fn flag(value: bool) -> Self {
        CellValue::Flag(value)
    }

    /// The boolean value, if this is a flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            CellValue::Flag(b) => Some(*b),
            CellValue::Text(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// A flat mapping from column key to cell value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a cell
    pub fn with(mut self, key: impl Into<String>, value: CellValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: CellValue) {
        self.cells.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    /// The resource identifier of this row, if set
    pub fn resource(&self) -> Option<&str> {
        match self.get(RESOURCE_KEY) {
            Some(CellValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}

/// An operation tracked as its own boolean column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedOperation {
    /// Row key the boolean is stored under
    pub key: String,
    /// Operation name looked up in the resource's `methods`
    pub operation: String,
}

impl TrackedOperation {
    pub fn new(key: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operation: operation.into(),
        }
    }
}

/// Turns catalog sections into rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageTransformer {
    operations: Vec<TrackedOperation>,
}

impl Default for CoverageTransformer {
    fn default() -> Self {
        Self::new(vec![
            TrackedOperation::new("create", "Create"),
            TrackedOperation::new("delete", "Delete"),
            TrackedOperation::new("update", "Update"),
        ])
    }
}

impl CoverageTransformer {
    pub fn new(operations: Vec<TrackedOperation>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[TrackedOperation] {
        &self.operations
    }

    /// Build one row per resource. An absent section yields no rows.
    pub fn transform(&self, section: Option<&Section>) -> Vec<Row> {
        let Some(section) = section else {
            return Vec::new();
        };

        section
            .iter()
            .map(|(resource, metadata)| {
                let mut row = Row::new().with(RESOURCE_KEY, CellValue::text(resource));
                for op in &self.operations {
                    row.insert(&op.key, CellValue::flag(metadata.supports(&op.operation)));
                }
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ResourceMetadata};
    use std::collections::BTreeSet;

    fn section(entries: Vec<(&str, Vec<&str>)>) -> Section {
        entries
            .into_iter()
            .map(|(name, methods)| (name.to_string(), ResourceMetadata::with_methods(methods)))
            .collect()
    }

    #[test]
    fn test_transform_single_resource() {
        let catalog = Catalog::from_json(
            r#"{"community": {"AWS::S3::Bucket": {"methods": ["Create","Delete"]}}}"#,
        )
        .unwrap();
        let rows = CoverageTransformer::default().transform(catalog.community.as_ref());

        assert_eq!(rows.len(), 1);
        let expected = Row::new()
            .with("resource", CellValue::text("AWS::S3::Bucket"))
            .with("create", CellValue::flag(true))
            .with("delete", CellValue::flag(true))
            .with("update", CellValue::flag(false));
        assert_eq!(rows[0], expected);
    }

    #[test]
    fn test_one_row_per_resource() {
        let s = section(vec![
            ("AWS::S3::Bucket", vec!["Create"]),
            ("AWS::SQS::Queue", vec![]),
            ("AWS::SNS::Topic", vec!["Update", "Delete"]),
        ]);
        let rows = CoverageTransformer::default().transform(Some(&s));

        let names: BTreeSet<&str> = rows.iter().filter_map(|r| r.resource()).collect();
        let keys: BTreeSet<&str> = s.keys().map(|k| k.as_str()).collect();
        assert_eq!(rows.len(), s.len());
        assert_eq!(names, keys);
    }

    #[test]
    fn test_absent_and_empty_sections() {
        let transformer = CoverageTransformer::default();
        assert!(transformer.transform(None).is_empty());
        assert!(transformer.transform(Some(&Section::new())).is_empty());
    }

    #[test]
    fn test_unknown_and_miscased_operations() {
        let s = section(vec![("AWS::Lambda::Function", vec!["create", "Read", "UPDATE"])]);
        let rows = CoverageTransformer::default().transform(Some(&s));

        assert_eq!(rows[0].get("create"), Some(&CellValue::flag(false)));
        assert_eq!(rows[0].get("delete"), Some(&CellValue::flag(false)));
        assert_eq!(rows[0].get("update"), Some(&CellValue::flag(false)));
    }

    #[test]
    fn test_custom_operations() {
        let transformer = CoverageTransformer::new(vec![TrackedOperation::new("read", "Read")]);
        let s = section(vec![("AWS::IAM::Role", vec!["Read", "Create"])]);
        let rows = transformer.transform(Some(&s));

        assert_eq!(rows[0].get("read"), Some(&CellValue::flag(true)));
        assert!(rows[0].get("create").is_none());
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(CellValue::flag(true).to_string(), "true");
        assert_eq!(CellValue::flag(false).as_flag(), Some(false));
        assert_eq!(CellValue::text("x").as_flag(), None);
    }
}
