//! Extracting entries from database text.
//!
//! The database is split into one block per `@type{key,` tag; a block runs
//! to the next tag or the end of the text. Inside a block, each line that
//! starts with a recognised field name is read as `name = value`, where the
//! `=` must have whitespace on both sides. Values may be wrapped in braces
//! or quotes; one trailing comma or period is dropped. Braced values may
//! share a line:
//!
//! ```text
//! @article{doe2020, author = {Doe, Jane}, title = {X},
//!   journal = Y,
//!   year = 2020.
//! }
//! ```
//!
//! Lines that don't fit this shape are skipped without failing; they are
//! collected in [`Bibliography::skipped`] for callers that want to warn.

use crate::catalog::{FIELDS, starts_with_field};
use crate::crossref::DECLARATION_RE;
use crate::entry::Entry;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

/// `name = ` at the start of a field.
static FIELD_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\s=]+)\s+=\s+").expect("field pattern is valid"));

/// A comma followed by what may be the next field of a bare value's line.
static NEXT_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([A-Za-z]+)\s+=\s+").expect("next-field pattern is valid"));

/// A non-blank line inside an entry that was not read as a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub key: String,
    /// Byte range of the trimmed line in the database text.
    pub span: Range<usize>,
    pub text: String,
}

/// Parsed entries keyed by bibliographic key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bibliography {
    pub entries: BTreeMap<String, Entry>,
    pub skipped: Vec<SkippedLine>,
}

impl Bibliography {
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse every entry of `database` except those whose key is in `discard`.
///
/// ```
/// use bibtxt_core::parser::parse_bibliography;
/// use std::collections::BTreeSet;
///
/// let bib = parse_bibliography(
///     "@book{kant1781,\n  author = Immanuel Kant,\n  title = {Kritik der reinen Vernunft}.\n}",
///     &BTreeSet::new(),
/// );
/// let entry = bib.get("kant1781").unwrap();
/// assert_eq!(entry.author.surname, "Kant");
/// assert_eq!(entry.year, "n.d.");
/// assert_eq!(entry.field("title"), Some("Kritik der reinen Vernunft"));
/// ```
pub fn parse_bibliography(database: &str, discard: &BTreeSet<String>) -> Bibliography {
    let tags: Vec<_> = DECLARATION_RE.captures_iter(database).collect();
    let mut bibliography = Bibliography::default();

    for (index, caps) in tags.iter().enumerate() {
        let tag = caps.get(0).expect("group 0 always participates");
        let key = &caps[2];
        let body_end = tags
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(database.len(), |next| next.start());

        let mut fields = BTreeMap::new();
        let mut skipped = Vec::new();
        scan_block(key, database, tag.end()..body_end, &mut fields, &mut skipped);

        if discard.contains(key) {
            tracing::debug!(key, "Dropping uncited entry");
            continue;
        }

        for line in &skipped {
            tracing::warn!(key, line = %line.text, "Skipping unrecognised line in entry");
        }
        bibliography.skipped.extend(skipped);
        bibliography
            .entries
            .insert(key.to_string(), Entry::from_fields(key, fields));
    }

    bibliography
}

fn scan_block(
    key: &str,
    database: &str,
    body: Range<usize>,
    fields: &mut BTreeMap<String, String>,
    skipped: &mut Vec<SkippedLine>,
) {
    let mut offset = body.start;
    for raw_line in database[body].split_inclusive('\n') {
        let line_start = offset;
        offset += raw_line.len();

        let line = raw_line.trim();
        if line.chars().all(|c| c == '}' || c == ',') {
            continue;
        }
        if scan_line(line, fields) {
            continue;
        }

        let leading = raw_line.len() - raw_line.trim_start().len();
        let start = line_start + leading;
        skipped.push(SkippedLine {
            key: key.to_string(),
            span: start..start + line.len(),
            text: line.to_string(),
        });
    }
}

/// Read the fields of one line into `fields`. Returns whether any was read.
fn scan_line(line: &str, fields: &mut BTreeMap<String, String>) -> bool {
    let mut rest = line;
    let mut found = false;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with('}') || !starts_with_field(rest) {
            break;
        }
        let Some(caps) = FIELD_START_RE.captures(rest) else {
            break;
        };
        let name = caps[1].to_lowercase();
        let value_start = caps.get(0).expect("group 0 always participates").end();
        let (raw, remainder) = split_value(&rest[value_start..]);

        fields.insert(name, clean_value(raw));
        found = true;

        let remainder = remainder.trim_start();
        rest = remainder.strip_prefix(',').unwrap_or(remainder);
    }

    found
}

/// Split off a field's raw value, returning it and whatever follows.
fn split_value(text: &str) -> (&str, &str) {
    if text.starts_with('{') {
        let mut depth = 0usize;
        for (i, c) in text.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return (&text[1..i], &text[i + 1..]);
                    }
                }
                _ => {}
            }
        }
        // Unclosed on this line: take the rest of it.
        return (text.trim_start_matches('{').trim_end_matches('}'), "");
    }

    if let Some(quoted) = text.strip_prefix('"') {
        return match quoted.find('"') {
            Some(end) => (&quoted[..end], &quoted[end + 1..]),
            None => (quoted, ""),
        };
    }

    let mut end = text.find('}').unwrap_or(text.len());
    for caps in NEXT_FIELD_RE.captures_iter(&text[..end]) {
        let name = caps[1].to_lowercase();
        if FIELDS.iter().any(|field| name.starts_with(field)) {
            end = caps.get(0).expect("group 0 always participates").start();
            break;
        }
    }
    (&text[..end], &text[end..])
}

/// Trim a raw value and drop one trailing comma or period.
///
/// An empty result is still a value: `editor = {}` gives the field `""`.
fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix(',')
        .or_else(|| trimmed.strip_suffix('.'))
        .unwrap_or(trimmed)
        .trim_end()
        .to_string()
}
