//! Input options and the built-in table/region configuration.
//!
//! [`UpdateOptions`] says which files to work on. [`UpdateConfig`] says what
//! the tables look like and where in the document they go. Both have
//! defaults matching the CloudFormation docs page.

use std::path::PathBuf;

use crate::output::{Alignment, CellFormat, ColumnConfig, TableConfig};
use crate::section::Region;
use crate::transform::{CoverageTransformer, RESOURCE_KEY};

/// Docs page updated when no document path is given.
pub const DEFAULT_DOCUMENT_PATH: &str = "src/content/docs/aws/services/cloudformation.mdx";

/// Start of the community table region.
pub const COMMUNITY_HEADING_PATTERN: &str = r"####\s*Community image";

/// Start of the pro table region, which also closes the community region.
pub const PRO_HEADING_PATTERN: &str = r"\n####\s*Pro image";

/// Closes the pro region: the next level-2 heading or the end of the document.
pub const NEXT_TOP_LEVEL_HEADING_PATTERN: &str = r"^\s*##\s|\z";

/// Which files an update reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Coverage catalog JSON
    pub catalog_path: PathBuf,
    /// Markdown document to update in place
    pub document_path: PathBuf,
}

impl UpdateOptions {
    /// Options for `catalog_path`, targeting [`DEFAULT_DOCUMENT_PATH`]
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
        }
    }

    /// Builder: set the document path
    pub fn document(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }
}

/// Table layout, row transformer and document regions used by an update.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    pub table: TableConfig,
    pub transformer: CoverageTransformer,
    pub community: Region,
    pub pro: Region,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        let transformer = CoverageTransformer::default();

        let mut columns = vec![ColumnConfig::new("Resource", RESOURCE_KEY)];
        columns.extend(transformer.operations().iter().map(|op| {
            ColumnConfig::new(op.operation.clone(), op.key.clone())
                .align(Alignment::Right)
                .format(CellFormat::Checkmark)
        }));

        Self {
            table: TableConfig::new(columns).sort_by(RESOURCE_KEY),
            transformer,
            community: Region::new(
                "community",
                COMMUNITY_HEADING_PATTERN,
                PRO_HEADING_PATTERN,
            ),
            pro: Region::new("pro", PRO_HEADING_PATTERN, NEXT_TOP_LEVEL_HEADING_PATTERN),
        }
    }
}
