//! Error reporting and diagnostic messages for bibtxt.
//!
//! This crate provides a structured approach to error reporting, loosely
//! following the tidyverse style guide for message content:
//!
//! - [`DiagnosticMessage`]: The main error message structure
//! - [`DetailItem`]: Individual detail bullets with error/info/note kinds
//! - [`DiagnosticKind`]: Error, Warning, Info, Note
//! - [`DiagnosticMessageBuilder`]: Builder with `.problem()`, `.add_detail()`, `.add_hint()`
//! - [`SourceContext`] / [`SourceSpan`]: byte spans into the manuscript or
//!   database, rendered with ariadne when the source text is available
//!
//! # Example
//!
//! ```
//! use bibtxt_error_reporting::DiagnosticMessageBuilder;
//!
//! let error = DiagnosticMessageBuilder::error("Unresolved Key")
//!     .with_code("B-1-2")
//!     .problem("The manuscript cites `smith2020`, which the database does not declare")
//!     .add_hint("Did you misspell the key?")
//!     .build();
//!
//! assert!(error.to_text(None).contains("[B-1-2]"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;
pub mod source;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_docs_url, get_error_info, get_subsystem};
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
pub use source::{FileId, SourceContext, SourceFile, SourceSpan};
