//! Fixed-width markdown table rendering.
//!
//! Column widths are measured in Unicode scalar values, the same way for
//! headers and cells, so every cell of a column is padded to the same length:
//!
//! ```text
//! | Resource        | Create | Delete | Update |
//! |---------------|-------:|-------:|-------:|
//! | AWS::S3::Bucket |      ✅ |      ✅ |      - |
//! ```

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::transform::{CellValue, Row};

/// Text used for missing and false values.
pub const PLACEHOLDER: &str = "-";

/// Glyph used for true values in checkmark columns.
pub const CHECKMARK: &str = "\u{2705}";

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Pad `text` to `width` characters
    pub fn justify(&self, text: &str, width: usize) -> String {
        match self {
            Alignment::Left => format!("{:<width$}", text, width = width),
            Alignment::Center => format!("{:^width$}", text, width = width),
            Alignment::Right => format!("{:>width$}", text, width = width),
        }
    }

    /// Separator cell encoding this alignment
    fn separator(&self, width: usize) -> String {
        match self {
            Alignment::Left => "-".repeat(width),
            Alignment::Center => format!(":{}:", "-".repeat(width)),
            Alignment::Right => format!("{}:", "-".repeat(width + 1)),
        }
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(format!(
                "Invalid alignment: '{}'. Valid options: left, center, right",
                s
            )),
        }
    }
}

/// How a cell value is turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellFormat {
    /// Text as-is, booleans as `true`/`false`, missing as the placeholder
    #[default]
    Plain,
    /// True as a checkmark, anything else as the placeholder
    Checkmark,
}

impl CellFormat {
    pub fn format(&self, value: Option<&CellValue>) -> String {
        match (self, value) {
            (CellFormat::Checkmark, Some(CellValue::Flag(true))) => CHECKMARK.to_string(),
            (CellFormat::Checkmark, _) => PLACEHOLDER.to_string(),
            (CellFormat::Plain, Some(v)) => v.to_string(),
            (CellFormat::Plain, None) => PLACEHOLDER.to_string(),
        }
    }
}

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub header: String,
    pub key: String,
    pub alignment: Alignment,
    pub format: CellFormat,
}

impl ColumnConfig {
    /// Left-aligned plain column
    pub fn new(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: key.into(),
            alignment: Alignment::default(),
            format: CellFormat::default(),
        }
    }

    /// Builder: set alignment
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder: set cell format
    pub fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Formatted text of this column's cell in `row`
    pub fn cell(&self, row: &Row) -> String {
        self.format.format(row.get(&self.key))
    }
}

/// Columns plus an optional sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    pub columns: Vec<ColumnConfig>,
    pub sort_by: Option<String>,
}

impl TableConfig {
    pub fn new(columns: Vec<ColumnConfig>) -> Self {
        Self {
            columns,
            sort_by: None,
        }
    }

    /// Builder: sort rows ascending by `key` before rendering
    pub fn sort_by(mut self, key: impl Into<String>) -> Self {
        self.sort_by = Some(key.into());
        self
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }
}

/// Renders rows as a markdown table.
#[derive(Debug, Clone)]
pub struct MarkdownTable {
    config: TableConfig,
}

impl MarkdownTable {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Render `rows`. No rows renders as an empty string.
    pub fn render(&self, rows: &[Row]) -> String {
        if rows.is_empty() {
            return String::new();
        }

        let rows = self.sorted(rows);
        let widths = self.column_widths(&rows);
        let mut out = String::new();

        let headers: Vec<String> = self
            .config
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| col.alignment.justify(&col.header, w))
            .collect();
        let _ = writeln!(out, "| {} |", headers.join(" | "));

        let separators: Vec<String> = self
            .config
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| col.alignment.separator(w))
            .collect();
        let _ = writeln!(out, "|{}|", separators.join("|"));

        for row in &rows {
            let cells: Vec<String> = self
                .config
                .columns
                .iter()
                .zip(&widths)
                .map(|(col, &w)| col.alignment.justify(&col.cell(row), w))
                .collect();
            let _ = writeln!(out, "| {} |", cells.join(" | "));
        }

        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }

    /// Width of each column: the longest of its header and formatted cells.
    pub fn column_widths(&self, rows: &[&Row]) -> Vec<usize> {
        self.config
            .columns
            .iter()
            .map(|col| {
                rows.iter()
                    .map(|row| char_len(&col.cell(row)))
                    .fold(char_len(&col.header), usize::max)
            })
            .collect()
    }

    fn sorted<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        let mut sorted: Vec<&Row> = rows.iter().collect();
        if let Some(key) = &self.config.sort_by {
            // sort_by_key is stable, ties keep input order
            sorted.sort_by_key(|row| row.get(key).map(|v| v.to_string()).unwrap_or_default());
        }
        sorted
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
