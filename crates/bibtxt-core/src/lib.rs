//! Author-year citation processing for plain-text manuscripts.
//!
//! This crate takes:
//! - A manuscript containing `\cite[prefix][page]{key}` markers
//! - A database of `@type{key, field = {value}, ...}` entries
//!
//! And produces the manuscript with every marker replaced by an author-year
//! parenthetical, followed by a sorted reference list.
//!
//! # Pipeline
//!
//! ```text
//!  manuscript ─┐
//!              ├─► crossref ─► parser ─► validate ─► citation ─► bibliography
//!  database  ──┘   (keys)     (entries)  (types,     (rewrite     (sorted list,
//!                                         fields)     markers)     signature)
//! ```
//!
//! # Example
//!
//! ```
//! use bibtxt_core::{RenderOptions, process_documents};
//! use chrono::NaiveDate;
//!
//! let manuscript = "As argued \\cite[p. 5]{doe2020}.";
//! let database = "@article{doe2020, author = {Doe, Jane}, title = {X}, \
//!                 journal = {Y}, year = {2020}, volume = {1}}";
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!
//! let output = process_documents(manuscript, database, &RenderOptions::new(date)).unwrap();
//! assert!(output.document.starts_with("As argued (Doe 2020: p. 5)."));
//! assert!(output.document.contains("\nDoe, Jane (2020): X. In: Y 1."));
//! ```

pub mod bibliography;
pub mod catalog;
pub mod citation;
pub mod crossref;
pub mod entry;
pub mod error;
pub mod marker;
pub mod options;
pub mod parser;
pub mod processor;
pub mod source;
pub mod validate;

pub use catalog::{EntryType, EntryTypeSpec, FieldRequirement, FIELDS};
pub use entry::{Author, Entry, NO_AUTHOR, NO_TITLE, NO_YEAR};
pub use error::{Error, ErrorKind, Result};
pub use marker::{CitationMarker, CitationVariant};
pub use options::RenderOptions;
pub use parser::{Bibliography, SkippedLine};
pub use processor::{CheckReport, ProcessOutput, check_documents, process_documents};
