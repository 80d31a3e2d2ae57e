//! The end-to-end pipeline.

use crate::bibliography::render_reference_list;
use crate::catalog::EntryType;
use crate::citation::render_citations;
use crate::crossref::check_cross_references;
use crate::error::Result;
use crate::options::RenderOptions;
use crate::parser::{Bibliography, SkippedLine, parse_bibliography};
use crate::validate::check_required_fields;
use std::collections::{BTreeMap, BTreeSet};

/// Result of validating both documents without rendering.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub bibliography: Bibliography,
    pub types: BTreeMap<String, EntryType>,
    /// Declared keys that no marker cites.
    pub unreferenced: BTreeSet<String>,
}

/// The rendered document and what went into it.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub document: String,
    pub citations: usize,
    pub entries: usize,
    pub skipped_lines: Vec<SkippedLine>,
}

/// Cross-reference, parse and validate, stopping at the first error.
pub fn check_documents(manuscript: &str, database: &str) -> Result<CheckReport> {
    let unreferenced = check_cross_references(manuscript, database)?;
    let bibliography = parse_bibliography(database, &unreferenced);
    let types = check_required_fields(&bibliography, database)?;

    tracing::info!(
        entries = bibliography.len(),
        dropped = unreferenced.len(),
        "Database validated"
    );

    Ok(CheckReport {
        bibliography,
        types,
        unreferenced,
    })
}

/// Run the whole pipeline and return the output document.
///
/// Nothing is produced unless every check passes.
pub fn process_documents(
    manuscript: &str,
    database: &str,
    options: &RenderOptions,
) -> Result<ProcessOutput> {
    let report = check_documents(manuscript, database)?;
    let entries = &report.bibliography.entries;

    let mut document = String::with_capacity(manuscript.len() + 80 * entries.len());
    let citations = render_citations(manuscript, entries, &mut document);
    render_reference_list(entries, &report.types, options, &mut document)?;

    tracing::info!(citations, entries = entries.len(), "Document rendered");

    Ok(ProcessOutput {
        document,
        citations,
        entries: entries.len(),
        skipped_lines: report.bibliography.skipped,
    })
}
