//! Regenerate the coverage tables of a document.
//!
//! [`render_document`] is the pure part: catalog and document in, updated
//! document out. [`update_document`] wraps it with file I/O and only writes
//! when the text actually changed, so an up-to-date page keeps its mtime.

use serde::Serialize;

use crate::catalog::{load_catalog, Catalog, SectionKind};
use crate::error::CfnCovError;
use crate::options::{UpdateConfig, UpdateOptions};
use crate::output::MarkdownTable;

/// What an update did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOutcome {
    /// The document already had the current tables
    Unchanged,
    /// The document was rewritten
    Updated,
}

/// Render the table for one catalog tier.
pub fn render_section(catalog: &Catalog, kind: SectionKind, config: &UpdateConfig) -> String {
    let rows = config.transformer.transform(catalog.section(kind));
    tracing::debug!(section = %kind, rows = rows.len(), "transformed section");
    MarkdownTable::new(config.table.clone()).render(&rows)
}

/// Replace both tables in `document`.
///
/// The community region is replaced first. If it cannot be found the pro
/// region is never attempted.
pub fn render_document(
    catalog: &Catalog,
    document: &str,
    config: &UpdateConfig,
) -> crate::Result<String> {
    let community = render_section(catalog, SectionKind::Community, config);
    let pro = render_section(catalog, SectionKind::Pro, config);

    let updated = config.community.replace(document, &community)?;
    config.pro.replace(&updated, &pro)
}

/// Load the catalog, update the document, and write it back if it changed.
pub fn update_document(options: &UpdateOptions, config: &UpdateConfig) -> crate::Result<UpdateOutcome> {
    let catalog = load_catalog(&options.catalog_path)?;

    let path = &options.document_path;
    let original = std::fs::read_to_string(path).map_err(|source| CfnCovError::FileRead {
        path: path.clone(),
        source,
    })?;

    let updated = render_document(&catalog, &original, config)?;
    if updated == original {
        tracing::info!(path = %path.display(), "document already up to date");
        return Ok(UpdateOutcome::Unchanged);
    }

    std::fs::write(path, &updated).map_err(|source| CfnCovError::FileWrite {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "updated coverage tables");
    Ok(UpdateOutcome::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::CHECKMARK;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const DOC: &str = "\
---
title: CloudFormation
---

## Resource coverage

#### Community image

old community table

#### Pro image

old pro table

## API Coverage

Unrelated text.
";

    const CATALOG: &str = r#"{
        "community": {
            "AWS::SQS::Queue": {"methods": ["Create", "Delete", "Update"]},
            "AWS::S3::Bucket": {"methods": ["Create", "Delete"]}
        },
        "pro": {
            "AWS::EKS::Cluster": {"methods": ["Create"]}
        }
    }"#;

    fn write_files(dir: &Path, catalog: &str, doc: &str) -> UpdateOptions {
        let catalog_path = dir.join("cfn_resources.json");
        let doc_path = dir.join("cloudformation.mdx");
        fs::write(&catalog_path, catalog).unwrap();
        fs::write(&doc_path, doc).unwrap();
        UpdateOptions::new(catalog_path).document(doc_path)
    }

    #[test]
    fn test_render_document_replaces_both_tables() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let out = render_document(&catalog, DOC, &UpdateConfig::default()).unwrap();

        let expected = format!(
            "\
---
title: CloudFormation
---

## Resource coverage

#### Community image

| Resource        | Create | Delete | Update |
|---------------|-------:|-------:|-------:|
| AWS::S3::Bucket |      {c} |      {c} |      - |
| AWS::SQS::Queue |      {c} |      {c} |      {c} |

#### Pro image

| Resource          | Create | Delete | Update |
|-----------------|-------:|-------:|-------:|
| AWS::EKS::Cluster |      {c} |      - |      - |

## API Coverage

Unrelated text.
",
            c = CHECKMARK
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_document_is_idempotent() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let config = UpdateConfig::default();
        let once = render_document(&catalog, DOC, &config).unwrap();
        let twice = render_document(&catalog, &once, &config).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_sections_leave_headings_only() {
        let catalog = Catalog::from_json(r#"{"community": {}}"#).unwrap();
        let config = UpdateConfig::default();
        let out = render_document(&catalog, DOC, &config).unwrap();

        assert!(out.contains("#### Community image\n\n\n#### Pro image\n\n\n## API Coverage"));
        assert!(!out.contains('|'));
        assert_eq!(render_document(&catalog, &out, &config).unwrap(), out);
    }

    #[test]
    fn test_pro_section_at_end_of_document() {
        let doc = "#### Community image\nx\n\n#### Pro image\nold\n";
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let out = render_document(&catalog, doc, &UpdateConfig::default()).unwrap();

        assert!(out.ends_with("| AWS::EKS::Cluster |      \u{2705} |      - |      - |\n"));
        assert!(!out.contains("old"));
    }

    #[test]
    fn test_missing_community_heading_aborts() {
        let doc = "#### Pro image\nold\n";
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let err = render_document(&catalog, doc, &UpdateConfig::default()).unwrap_err();
        match err {
            CfnCovError::SectionNotFound { pattern } => {
                assert_eq!(pattern, crate::options::COMMUNITY_HEADING_PATTERN)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_update_document_writes_once() {
        let dir = tempdir().unwrap();
        let options = write_files(dir.path(), CATALOG, DOC);
        let config = UpdateConfig::default();

        assert_eq!(
            update_document(&options, &config).unwrap(),
            UpdateOutcome::Updated
        );
        let written = fs::read_to_string(&options.document_path).unwrap();
        assert!(written.contains("AWS::EKS::Cluster"));

        assert_eq!(
            update_document(&options, &config).unwrap(),
            UpdateOutcome::Unchanged
        );
        assert_eq!(fs::read_to_string(&options.document_path).unwrap(), written);
    }

    #[test]
    fn test_update_document_bad_catalog_leaves_document() {
        let dir = tempdir().unwrap();
        let options = write_files(dir.path(), "{ not json", DOC);

        let err = update_document(&options, &UpdateConfig::default()).unwrap_err();
        assert!(matches!(err, CfnCovError::CatalogParse { .. }));
        assert_eq!(fs::read_to_string(&options.document_path).unwrap(), DOC);
    }

    #[test]
    fn test_update_document_missing_section_leaves_document() {
        let dir = tempdir().unwrap();
        let doc = "# Nothing here\n";
        let options = write_files(dir.path(), CATALOG, doc);

        let err = update_document(&options, &UpdateConfig::default()).unwrap_err();
        assert!(matches!(err, CfnCovError::SectionNotFound { .. }));
        assert_eq!(fs::read_to_string(&options.document_path).unwrap(), doc);
    }

    #[test]
    fn test_update_document_missing_document() {
        let dir = tempdir().unwrap();
        let options = write_files(dir.path(), CATALOG, DOC).document(dir.path().join("nope.md"));

        let err = update_document(&options, &UpdateConfig::default()).unwrap_err();
        assert!(matches!(err, CfnCovError::FileRead { .. }));
    }
}
