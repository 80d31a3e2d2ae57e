//! The reference list appended after the manuscript.
//!
//! Entries are sorted by `(surname, key)` with plain string ordering, so
//! the sentinel surname `n.a.` lands wherever its text sorts. Each entry is
//! rendered by a template chosen by its type; optional `editor`, `chapter`
//! and `pages` select between variants.

use crate::catalog::EntryType;
use crate::entry::{Entry, NO_AUTHOR, NO_TITLE};
use crate::error::{Error, Result};
use crate::options::RenderOptions;
use std::collections::BTreeMap;

/// Entries in reference-list order.
pub fn sorted_entries(entries: &BTreeMap<String, Entry>) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.values().collect();
    sorted.sort_by(|a, b| {
        a.author
            .surname
            .cmp(&b.author.surname)
            .then_with(|| a.key.cmp(&b.key))
    });
    sorted
}

/// Format one reference-list line (without the leading newline).
///
/// ```
/// use bibtxt_core::bibliography::format_entry;
/// use bibtxt_core::{Entry, EntryType};
/// use std::collections::BTreeMap;
///
/// let fields: BTreeMap<String, String> = [
///     ("author", "Doe, Jane"), ("title", "X"), ("journal", "Y"),
///     ("year", "2020"), ("volume", "1"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
/// let entry = Entry::from_fields("doe2020", fields);
///
/// assert_eq!(
///     format_entry(&entry, EntryType::Article).unwrap(),
///     "Doe, Jane (2020): X. In: Y 1."
/// );
/// ```
pub fn format_entry(entry: &Entry, entry_type: EntryType) -> Result<String> {
    let line = EntryLine { entry, entry_type };
    let head = line.head();
    let year = &entry.year;

    let formatted = match entry_type {
        EntryType::Article => format!(
            "{} ({}): {}. In: {} {}.",
            head,
            year,
            line.required("title")?,
            line.required("journal")?,
            line.required("volume")?
        ),
        EntryType::Book => format!(
            "{}; ed. {} ({}): {}. {}.",
            head,
            line.editor(),
            year,
            line.required("title")?,
            line.required("publisher")?
        ),
        EntryType::Booklet | EntryType::Manual => {
            format!("{} ({}): {}.", head, year, line.required("title")?)
        }
        EntryType::Conference | EntryType::InProceedings => format!(
            "{} ({}): {}. In: {}.",
            head,
            year,
            line.required("title")?,
            line.required("booktitle")?
        ),
        EntryType::InBook => {
            let location = match (entry.field("chapter"), entry.field("pages")) {
                (Some(chapter), Some(pages)) => format!("chapter {}, pages {}", chapter, pages),
                (Some(chapter), None) => format!("chapter {}", chapter),
                (None, Some(pages)) => format!("pages {}", pages),
                (None, None) => {
                    return Err(Error::MissingAlternative {
                        key: entry.key.clone(),
                        first: "chapter".to_string(),
                        second: "pages".to_string(),
                        entry_type: entry_type.to_string(),
                    });
                }
            };
            format!(
                "{}; ed. {} ({}): {}, {}. {}.",
                head,
                line.editor(),
                year,
                line.required("title")?,
                location,
                line.required("publisher")?
            )
        }
        EntryType::InCollection => format!(
            "{} ({}): {}. In: {}, {}.",
            head,
            year,
            line.required("title")?,
            line.required("publisher")?,
            line.required("booktitle")?
        ),
        EntryType::MastersThesis => format!(
            "{} ({}): {}. Master's thesis, {}.",
            head,
            year,
            line.required("title")?,
            line.required("school")?
        ),
        EntryType::Misc => format!(
            "{} ({}): {}.",
            head,
            year,
            entry.field("title").unwrap_or(NO_TITLE)
        ),
        EntryType::PhdThesis => format!(
            "{} ({}): {}. PhD thesis, {}.",
            head,
            year,
            line.required("title")?,
            line.required("school")?
        ),
        EntryType::Proceedings => format!(
            "{}; ed. {} ({}): {}.",
            head,
            line.editor(),
            year,
            line.required("title")?
        ),
        EntryType::TechReport => format!(
            "{} ({}): {}. {}.",
            head,
            year,
            line.required("title")?,
            line.required("institution")?
        ),
        EntryType::Unpublished => format!(
            "{}: {}. {}.",
            head,
            line.required("title")?,
            line.required("note")?
        ),
    };

    Ok(formatted)
}

struct EntryLine<'a> {
    entry: &'a Entry,
    entry_type: EntryType,
}

impl<'a> EntryLine<'a> {
    /// `Surname, Forename`, or just the surname when there is no forename
    /// or the author is the sentinel.
    fn head(&self) -> String {
        let author = &self.entry.author;
        if author.is_unknown() || author.forename.is_empty() {
            author.surname.clone()
        } else {
            format!("{}, {}", author.surname, author.forename)
        }
    }

    fn editor(&self) -> &'a str {
        self.entry.field("editor").unwrap_or(NO_AUTHOR)
    }

    fn required(&self, field: &str) -> Result<&'a str> {
        self.entry.field(field).ok_or_else(|| Error::MissingField {
            key: self.entry.key.clone(),
            field: field.to_string(),
            entry_type: self.entry_type.to_string(),
        })
    }
}

/// Append the titled, sorted reference list and the signature to `out`.
///
/// Layout: `\n<title>\n<underline>`, one `\n<line>` per entry, then
/// `\n\n<signature>`. Every entry needs a type in `types`.
pub fn render_reference_list(
    entries: &BTreeMap<String, Entry>,
    types: &BTreeMap<String, EntryType>,
    options: &RenderOptions,
    out: &mut String,
) -> Result<()> {
    out.push('\n');
    out.push_str(&options.title);
    out.push('\n');
    out.push_str(&"=".repeat(options.title.chars().count()));

    for entry in sorted_entries(entries) {
        let Some(&entry_type) = types.get(&entry.key) else {
            tracing::warn!(key = %entry.key, "Entry has no validated type; left out of the list");
            continue;
        };
        out.push('\n');
        out.push_str(&format_entry(entry, entry_type)?);
    }

    out.push_str("\n\n");
    out.push_str(&options.signature_line());
    Ok(())
}
