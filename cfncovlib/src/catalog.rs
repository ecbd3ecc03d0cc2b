//! The coverage catalog: which operations each resource type supports.
//!
//! The catalog is a JSON document with one object per tier:
//!
//! ```json
//! {
//!   "community": { "AWS::S3::Bucket": { "methods": ["Create", "Delete"] } },
//!   "pro":       { "AWS::EKS::Cluster": { "methods": ["Create"] } }
//! }
//! ```
//!
//! Unknown keys are ignored. A tier that is missing or `null` is treated as
//! empty, and so is a resource without `methods`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CfnCovError;

/// Per-resource metadata from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// Supported operation names. Order and duplicates are irrelevant.
    #[serde(default)]
    pub methods: BTreeSet<String>,
}

impl ResourceMetadata {
    /// Create metadata from a list of operation names
    pub fn with_methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: methods.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `operation` is supported (exact, case-sensitive match)
    pub fn supports(&self, operation: &str) -> bool {
        self.methods.contains(operation)
    }
}

/// One tier of the catalog: resource identifier to metadata.
pub type Section = BTreeMap<String, ResourceMetadata>;

/// The two tiers rendered into the docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Community,
    Pro,
}

impl SectionKind {
    /// All tiers, in document order
    pub const ALL: [SectionKind; 2] = [SectionKind::Community, SectionKind::Pro];

    /// Key of this tier in the catalog JSON
    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::Community => "community",
            SectionKind::Pro => "pro",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The parsed coverage catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub community: Option<Section>,
    #[serde(default)]
    pub pro: Option<Section>,
}

impl Catalog {
    /// Parse a catalog from JSON text
    pub fn from_json(text: &str) -> crate::Result<Self> {
        serde_json::from_str(text).map_err(|source| CfnCovError::CatalogParse { path: None, source })
    }

    /// Get one tier, if present
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        match kind {
            SectionKind::Community => self.community.as_ref(),
            SectionKind::Pro => self.pro.as_ref(),
        }
    }
}

/// Read and parse a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> crate::Result<Catalog> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CfnCovError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog: Catalog =
        serde_json::from_str(&text).map_err(|source| CfnCovError::CatalogParse {
            path: Some(path.to_path_buf()),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        community = catalog.community.as_ref().map_or(0, |s| s.len()),
        pro = catalog.pro.as_ref().map_or(0, |s| s.len()),
        "loaded coverage catalog"
    );

    Ok(catalog)
}
