//! Static table of entry types and the fields each one requires.
//!
//! Names follow classic BibTeX. A requirement written `a/b` in the
//! human-readable listing is satisfied when either field is present.

use serde::Serialize;
use std::fmt;

/// Field names recognised inside an entry, matched as case-insensitive
/// prefixes of a line.
pub const FIELDS: &[&str] = &[
    "address",
    "annote",
    "author",
    "booktitle",
    "chapter",
    "crossref",
    "edition",
    "editor",
    "howpublished",
    "institution",
    "journal",
    "key",
    "month",
    "note",
    "number",
    "organization",
    "pages",
    "publisher",
    "school",
    "series",
    "title",
    "type",
    "volume",
    "year",
];

/// A single requirement: one field, or a pair where either will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldRequirement {
    Field(&'static str),
    Either(&'static str, &'static str),
}

impl FieldRequirement {
    /// Whether `has` reports a field set that meets this requirement.
    pub fn is_met_by(&self, has: impl Fn(&str) -> bool) -> bool {
        match *self {
            FieldRequirement::Field(field) => has(field),
            FieldRequirement::Either(first, second) => has(first) || has(second),
        }
    }
}

impl fmt::Display for FieldRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRequirement::Field(field) => write!(f, "{}", field),
            FieldRequirement::Either(first, second) => write!(f, "{}/{}", first, second),
        }
    }
}

/// Required and optional fields of one entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryTypeSpec {
    pub required: &'static [FieldRequirement],
    pub optional: &'static [FieldRequirement],
}

use FieldRequirement::{Either, Field};

const ARTICLE: EntryTypeSpec = EntryTypeSpec {
    required: &[
        Field("author"),
        Field("title"),
        Field("journal"),
        Field("year"),
        Field("volume"),
    ],
    optional: &[Field("number"), Field("pages"), Field("month"), Field("note"), Field("key")],
};

const BOOK: EntryTypeSpec = EntryTypeSpec {
    required: &[
        Either("author", "editor"),
        Field("title"),
        Field("publisher"),
        Field("year"),
    ],
    optional: &[
        Either("volume", "number"),
        Field("series"),
        Field("address"),
        Field("edition"),
        Field("month"),
        Field("note"),
        Field("key"),
    ],
};

const BOOKLET: EntryTypeSpec = EntryTypeSpec {
    required: &[Field("title")],
    optional: &[
        Field("author"),
        Field("howpublished"),
        Field("address"),
        Field("month"),
        Field("year"),
        Field("note"),
        Field("key"),
    ],
};

const CONFERENCE: EntryTypeSpec = EntryTypeSpec {
    required: &[
        Field("author"),
        Field("title"),
        Field("booktitle"),
        Field("year"),
    ],
    optional: &[
        Field("editor"),
        Either("volume", "number"),
        Field("series"),
        Field("pages"),
        Field("address"),
        Field("month"),
        Field("organization"),
        Field("publisher"),
        Field("note"),
        Field("key"),
    ],
};

const INBOOK: EntryTypeSpec = EntryTypeSpec {
    required: &[
        Either("author", "editor"),
        Field("title"),
        Either("chapter", "pages"),
        Field("publisher"),
        Field("year"),
    ],
    optional: &[
        Either("volume", "number"),
        Field("series"),
        Field("type"),
        Field("address"),
        Field("edition"),
        Field("month"),
        Field("note"),
        Field("key"),
    ],
};

const INCOLLECTION: EntryTypeSpec = EntryTypeSpec {
    required: &[
        Field("author"),
        Field("title"),
        Field("booktitle"),
        Field("publisher"),
        Field("year"),
    ],
    optional: &[
        Field("editor"),
        Either("volume", "number"),
        Field("series"),
        Field("type"),
        Field("chapter"),
        Field("pages"),
        Field("address"),
        Field("edition"),
        Field("month"),
        Field("note"),
        Field("key"),
    ],
};

const MANUAL: EntryTypeSpec = EntryTypeSpec {
    required: &[Field("title")],
    optional: &[
        Field("author"),
        Field("organization"),
        Field("address"),
        Field("edition"),
        Field("month"),
        Field("year"),
        Field("note"),
        Field("key"),
    ],
};

const THESIS: EntryTypeSpec = EntryTypeSpec {
    required: &[
        Field("author"),
        Field("title"),
        Field("school"),
        Field("year"),
    ],
    optional: &[
        Field("type"),
        Field("address"),
        Field("month"),
        Field("note"),
        Field("key"),
    ],
};

const MISC: EntryTypeSpec = EntryTypeSpec {
    required: &[],
    optional: &[
        Field("author"),
        Field("title"),
        Field("howpublished"),
        Field("month"),
        Field("year"),
        Field("note"),
        Field("key"),
    ],
};

const PROCEEDINGS: EntryTypeSpec = EntryTypeSpec {
    required: &[Field("title"), Field("year")],
    optional: &[
        Field("author"),
        Field("editor"),
        Either("volume", "number"),
        Field("series"),
        Field("address"),
        Field("month"),
        Field("publisher"),
        Field("organization"),
        Field("note"),
        Field("key"),
    ],
};

const TECHREPORT: EntryTypeSpec = EntryTypeSpec {
    required: &[
        Field("author"),
        Field("title"),
        Field("institution"),
        Field("year"),
    ],
    optional: &[
        Field("type"),
        Field("number"),
        Field("address"),
        Field("month"),
        Field("note"),
        Field("key"),
    ],
};

const UNPUBLISHED: EntryTypeSpec = EntryTypeSpec {
    required: &[Field("author"), Field("title"), Field("note")],
    optional: &[Field("month"), Field("year"), Field("key")],
};

/// The entry types a database may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Article,
    Book,
    Booklet,
    Conference,
    InBook,
    InCollection,
    InProceedings,
    Manual,
    MastersThesis,
    Misc,
    PhdThesis,
    Proceedings,
    TechReport,
    Unpublished,
}

impl EntryType {
    pub const ALL: [EntryType; 14] = [
        EntryType::Article,
        EntryType::Book,
        EntryType::Booklet,
        EntryType::Conference,
        EntryType::InBook,
        EntryType::InCollection,
        EntryType::InProceedings,
        EntryType::Manual,
        EntryType::MastersThesis,
        EntryType::Misc,
        EntryType::PhdThesis,
        EntryType::Proceedings,
        EntryType::TechReport,
        EntryType::Unpublished,
    ];

    /// Look up a declared type name, ignoring case.
    pub fn from_name(name: &str) -> Option<EntryType> {
        let lowered = name.to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == lowered)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Article => "article",
            EntryType::Book => "book",
            EntryType::Booklet => "booklet",
            EntryType::Conference => "conference",
            EntryType::InBook => "inbook",
            EntryType::InCollection => "incollection",
            EntryType::InProceedings => "inproceedings",
            EntryType::Manual => "manual",
            EntryType::MastersThesis => "mastersthesis",
            EntryType::Misc => "misc",
            EntryType::PhdThesis => "phdthesis",
            EntryType::Proceedings => "proceedings",
            EntryType::TechReport => "techreport",
            EntryType::Unpublished => "unpublished",
        }
    }

    pub fn spec(self) -> &'static EntryTypeSpec {
        match self {
            EntryType::Article => &ARTICLE,
            EntryType::Book => &BOOK,
            EntryType::Booklet => &BOOKLET,
            EntryType::Conference | EntryType::InProceedings => &CONFERENCE,
            EntryType::InBook => &INBOOK,
            EntryType::InCollection => &INCOLLECTION,
            EntryType::Manual => &MANUAL,
            EntryType::MastersThesis | EntryType::PhdThesis => &THESIS,
            EntryType::Misc => &MISC,
            EntryType::Proceedings => &PROCEEDINGS,
            EntryType::TechReport => &TECHREPORT,
            EntryType::Unpublished => &UNPUBLISHED,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a line (already stripped of leading whitespace) starts with a
/// recognised field name.
pub fn starts_with_field(line: &str) -> bool {
    let lowered = line.to_lowercase();
    FIELDS.iter().any(|field| lowered.starts_with(field))
}
