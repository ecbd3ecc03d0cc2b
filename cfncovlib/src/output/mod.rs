//! Output formatting: present rows as markdown tables.
//!
//! - **MarkdownTable**: renders rows under a [`TableConfig`]
//! - **ColumnConfig**: header, row key, alignment and cell format of one column
//!
//! Rendering is a pure presentation step. Rows come from
//! [`crate::transform`] and the rendered block goes to [`crate::section`].
//!
//! ## Example
//!
//! ```rust
//! use cfncovlib::output::{Alignment, CellFormat, ColumnConfig, MarkdownTable, TableConfig};
//! use cfncovlib::{CellValue, Row};
//!
//! let table = MarkdownTable::new(TableConfig::new(vec![
//!     ColumnConfig::new("Resource", "resource"),
//!     ColumnConfig::new("Create", "create")
//!         .align(Alignment::Right)
//!         .format(CellFormat::Checkmark),
//! ]));
//! let row = Row::new()
//!     .with("resource", CellValue::text("AWS::S3::Bucket"))
//!     .with("create", CellValue::flag(false));
//!
//! let out = table.render(&[row]);
//! assert!(out.ends_with("| AWS::S3::Bucket |      - |\n"));
//! ```

pub mod table;

pub use table::{
    Alignment, CellFormat, ColumnConfig, MarkdownTable, TableConfig, CHECKMARK, PLACEHOLDER,
};
