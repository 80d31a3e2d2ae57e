//! Matching manuscript citations against declared database keys.

use crate::error::{Error, Result};
use crate::marker::extract_markers;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::ops::Range;

/// An entry opening tag: `@type{key,`.
pub(crate) static DECLARATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(\w+)\{(\w+),").expect("declaration pattern is valid"));

/// One `@type{key,` opening tag in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub entry_type: String,
    pub key: String,
    /// Byte range of the opening tag.
    pub span: Range<usize>,
}

/// Every opening tag in database order.
pub fn declarations(database: &str) -> Vec<Declaration> {
    DECLARATION_RE
        .captures_iter(database)
        .map(|caps| Declaration {
            entry_type: caps[1].to_string(),
            key: caps[2].to_string(),
            span: caps.get(0).expect("group 0 always participates").range(),
        })
        .collect()
}

/// Check that every cited key is declared exactly once.
///
/// Citations are checked in manuscript order; the first offending key
/// decides the error. On success, returns the declared keys no marker
/// cites, which the parser later drops.
///
/// ```
/// use bibtxt_core::crossref::check_cross_references;
///
/// let unused = check_cross_references(
///     "\\cite{a}",
///     "@book{a, title = {A}}\n@book{ghost, title = {G}}",
/// ).unwrap();
/// assert!(unused.contains("ghost"));
/// ```
pub fn check_cross_references(manuscript: &str, database: &str) -> Result<BTreeSet<String>> {
    let markers = extract_markers(manuscript);
    let declared = declarations(database);

    let mut by_key: HashMap<&str, Vec<Range<usize>>> = HashMap::new();
    for declaration in &declared {
        by_key
            .entry(declaration.key.as_str())
            .or_default()
            .push(declaration.span.clone());
    }

    for marker in &markers {
        match by_key.get(marker.key.as_str()) {
            Some(spans) if spans.len() > 1 => {
                return Err(Error::DuplicateKey {
                    key: marker.key.clone(),
                    citation: marker.span.clone(),
                    declarations: spans.clone(),
                });
            }
            Some(_) => {}
            None => {
                return Err(Error::UnresolvedKey {
                    key: marker.key.clone(),
                    citation: marker.span.clone(),
                });
            }
        }
    }

    let cited: BTreeSet<&str> = markers.iter().map(|m| m.key.as_str()).collect();
    let unreferenced: BTreeSet<String> = declared
        .iter()
        .filter(|d| !cited.contains(d.key.as_str()))
        .map(|d| d.key.clone())
        .collect();

    tracing::debug!(
        citations = markers.len(),
        declared = declared.len(),
        unreferenced = unreferenced.len(),
        "Cross-references resolved"
    );

    Ok(unreferenced)
}
