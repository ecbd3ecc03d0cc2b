//! # cfncovlib
//!
//! Regenerates the CloudFormation resource coverage tables of a docs page
//! from a coverage catalog, leaving the rest of the page untouched.
//!
//! ## Overview
//!
//! The pipeline has three pure stages plus a thin I/O driver:
//!
//! - **Transform**: a catalog tier becomes one [`Row`] per resource, with a
//!   boolean per tracked operation (`Create`, `Delete`, `Update`)
//! - **Render**: rows become a fixed-width markdown table ([`output`])
//! - **Replace**: the table is spliced into the body of a heading-delimited
//!   region of the document ([`section`])
//! - **Update**: load the catalog, replace the community and pro regions,
//!   and write the page back only if it changed ([`update`])
//!
//! ## Example
//!
//! ```rust
//! use cfncovlib::{render_document, Catalog, UpdateConfig};
//!
//! let catalog = Catalog::from_json(
//!     r#"{"community": {"AWS::S3::Bucket": {"methods": ["Create", "Delete"]}}}"#,
//! ).unwrap();
//!
//! let doc = "#### Community image\nold\n\n#### Pro image\nold\n\n## API Coverage\n";
//! let updated = render_document(&catalog, doc, &UpdateConfig::default()).unwrap();
//!
//! assert!(updated.contains("| AWS::S3::Bucket |"));
//! assert!(updated.contains("#### Pro image\n\n## API Coverage\n"));
//!
//! // Already up to date: nothing changes
//! let again = render_document(&catalog, &updated, &UpdateConfig::default()).unwrap();
//! assert_eq!(again, updated);
//! ```

pub mod catalog;
pub mod error;
pub mod options;
pub mod output;
pub mod section;
pub mod transform;
pub mod update;

pub use catalog::{load_catalog, Catalog, ResourceMetadata, Section, SectionKind};
pub use error::CfnCovError;
pub use options::{
    UpdateConfig, UpdateOptions, COMMUNITY_HEADING_PATTERN, DEFAULT_DOCUMENT_PATH,
    NEXT_TOP_LEVEL_HEADING_PATTERN, PRO_HEADING_PATTERN,
};
pub use output::{Alignment, CellFormat, ColumnConfig, MarkdownTable, TableConfig};
pub use section::{find_section, replace_section, Region, SectionSpan};
pub use transform::{CellValue, CoverageTransformer, Row, TrackedOperation};
pub use update::{render_document, render_section, update_document, UpdateOutcome};

/// Result type for cfncovlib operations
pub type Result<T> = std::result::Result<T, CfnCovError>;
