//! Parsed bibliographic entries.

use serde::Serialize;
use std::collections::BTreeMap;

/// Stands in for a missing author surname.
pub const NO_AUTHOR: &str = "n.a.";
/// Stands in for a missing title in `misc` entries and a missing editor.
pub const NO_TITLE: &str = "n.a.";
/// Stands in for a missing year.
pub const NO_YEAR: &str = "n.d.";

/// An author split into surname and forename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub surname: String,
    pub forename: String,
}

impl Author {
    /// Split a raw author string.
    ///
    /// `"Doe, Jane"` splits at the comma; `"Jane Q. Doe"` takes the last
    /// word as surname. Only the first two comma-separated parts are used.
    ///
    /// ```
    /// use bibtxt_core::Author;
    ///
    /// assert_eq!(Author::parse("Doe, Jane").surname, "Doe");
    /// assert_eq!(Author::parse("Jane Q. Doe").forename, "Jane Q.");
    /// ```
    pub fn parse(raw: &str) -> Author {
        if raw.contains(',') {
            let mut parts = raw.split(',');
            let surname = parts.next().unwrap_or_default().trim().to_string();
            let forename = parts.next().unwrap_or_default().trim().to_string();
            Author { surname, forename }
        } else {
            let words: Vec<&str> = raw.split_whitespace().collect();
            match words.split_last() {
                Some((surname, rest)) => Author {
                    surname: surname.to_string(),
                    forename: rest.join(" "),
                },
                None => Author::unknown(),
            }
        }
    }

    /// The sentinel author used when an entry names none.
    pub fn unknown() -> Author {
        Author {
            surname: NO_AUTHOR.to_string(),
            forename: String::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.surname == NO_AUTHOR
    }
}

/// One database entry, minus its type.
///
/// `fields` holds every recognised field exactly as parsed, keyed by
/// lowercased name. `author` and `year` are always populated, with
/// sentinels if the source lacked them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub author: Author,
    pub year: String,
    pub fields: BTreeMap<String, String>,
}

impl Entry {
    /// Build an entry from parsed fields, backfilling author and year.
    pub fn from_fields(key: impl Into<String>, fields: BTreeMap<String, String>) -> Entry {
        let author = fields
            .get("author")
            .map_or_else(Author::unknown, |raw| Author::parse(raw));
        let year = fields
            .get("year")
            .cloned()
            .unwrap_or_else(|| NO_YEAR.to_string());
        Entry {
            key: key.into(),
            author,
            year,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether `name` counts as given for required-field checks.
    ///
    /// `year` always counts since it is backfilled; a backfilled author
    /// does not.
    pub fn has_field(&self, name: &str) -> bool {
        name == "year" || self.fields.contains_key(name)
    }
}
