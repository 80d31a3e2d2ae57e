//! Error types for citation processing.
//!
//! Every error is fatal to the pipeline. Each variant names the offending
//! key, field, or type and converts to a [`DiagnosticMessage`] with a
//! `B-<subsystem>-<n>` code.

use crate::source::{database_span, manuscript_span};
use bibtxt_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};
use std::ops::Range;
use thiserror::Error;

/// Result type alias for bibtxt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind tag of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateKey,
    UnresolvedKey,
    InvalidType,
    MissingField,
    MissingAlternative,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cited key is declared more than once in the database.
    #[error("Reoccurrence of the key '{key}' detected ({} declarations)", .declarations.len())]
    DuplicateKey {
        key: String,
        /// First manuscript marker citing the key.
        citation: Range<usize>,
        /// Every declaration of the key in the database.
        declarations: Vec<Range<usize>>,
    },

    /// The manuscript cites a key the database never declares.
    #[error("'{key}' is not a declared key")]
    UnresolvedKey { key: String, citation: Range<usize> },

    /// An entry declares a type outside the catalog.
    #[error("'{entry_type}' is not a valid entry type (entry '{key}')")]
    InvalidType {
        key: String,
        entry_type: String,
        declaration: Range<usize>,
    },

    #[error("'{field}' is a required field for '{entry_type}' (entry '{key}')")]
    MissingField {
        key: String,
        field: String,
        entry_type: String,
    },

    #[error("'{first}' or '{second}' is a required field for '{entry_type}' (entry '{key}')")]
    MissingAlternative {
        key: String,
        first: String,
        second: String,
        entry_type: String,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Error::UnresolvedKey { .. } => ErrorKind::UnresolvedKey,
            Error::InvalidType { .. } => ErrorKind::InvalidType,
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::MissingAlternative { .. } => ErrorKind::MissingAlternative,
        }
    }

    /// The error-catalog code of this error.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::DuplicateKey => "B-1-1",
            ErrorKind::UnresolvedKey => "B-1-2",
            ErrorKind::InvalidType => "B-2-1",
            ErrorKind::MissingField => "B-2-2",
            ErrorKind::MissingAlternative => "B-2-3",
        }
    }

    /// Convert this error to a DiagnosticMessage.
    ///
    /// Locations refer to [`crate::source::MANUSCRIPT_FILE`] and
    /// [`crate::source::DATABASE_FILE`].
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            Error::DuplicateKey {
                key,
                citation,
                declarations,
            } => {
                let mut builder = DiagnosticMessageBuilder::error("Duplicate Key")
                    .with_code(self.code())
                    .problem(format!(
                        "The key `{}` is declared {} times in the database",
                        key,
                        declarations.len()
                    ))
                    .with_location(manuscript_span(citation));
                for declaration in declarations {
                    builder = builder.add_detail_at(
                        format!("`{}` declared here", key),
                        database_span(declaration),
                    );
                }
                builder
                    .add_hint("Rename or remove all but one of the entries?")
                    .build()
            }

            Error::UnresolvedKey { key, citation } => {
                DiagnosticMessageBuilder::error("Unresolved Key")
                    .with_code(self.code())
                    .problem(format!(
                        "The manuscript cites `{}`, which the database does not declare",
                        key
                    ))
                    .with_location(manuscript_span(citation))
                    .add_hint("Check the key for typos or add the entry to the database?")
                    .build()
            }

            Error::InvalidType {
                key,
                entry_type,
                declaration,
            } => DiagnosticMessageBuilder::error("Invalid Entry Type")
                .with_code(self.code())
                .problem(format!(
                    "Entry `{}` declares type `{}`, which is not a valid entry type",
                    key, entry_type
                ))
                .with_location(database_span(declaration))
                .add_hint("Run `bibtxt types` to list the valid entry types?")
                .build(),

            Error::MissingField {
                key,
                field,
                entry_type,
            } => DiagnosticMessageBuilder::error("Missing Required Field")
                .with_code(self.code())
                .problem(format!(
                    "`{}` is a required field for `{}`",
                    field, entry_type
                ))
                .add_detail(format!("Entry `{}` has no `{}` field", key, field))
                .build(),

            Error::MissingAlternative {
                key,
                first,
                second,
                entry_type,
            } => DiagnosticMessageBuilder::error("Missing Required Alternative")
                .with_code(self.code())
                .problem(format!(
                    "`{}` or `{}` is a required field for `{}`",
                    first, second, entry_type
                ))
                .add_detail(format!(
                    "Entry `{}` has neither `{}` nor `{}`",
                    key, first, second
                ))
                .build(),
        }
    }
}
