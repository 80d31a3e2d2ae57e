//! File ids under which the two input documents are reported.

use bibtxt_error_reporting::{FileId, SourceContext, SourceSpan};
use std::ops::Range;

pub const MANUSCRIPT_FILE: FileId = FileId(0);
pub const DATABASE_FILE: FileId = FileId(1);

/// Register both documents so diagnostics can show snippets from them.
pub fn source_context(
    manuscript_name: &str,
    manuscript: &str,
    database_name: &str,
    database: &str,
) -> SourceContext {
    let mut ctx = SourceContext::new();
    let manuscript_id = ctx.add_file(manuscript_name, manuscript);
    let database_id = ctx.add_file(database_name, database);
    debug_assert_eq!(manuscript_id, MANUSCRIPT_FILE);
    debug_assert_eq!(database_id, DATABASE_FILE);
    ctx
}

pub(crate) fn manuscript_span(range: &Range<usize>) -> SourceSpan {
    SourceSpan::new(MANUSCRIPT_FILE, range.start, range.end)
}

pub(crate) fn database_span(range: &Range<usize>) -> SourceSpan {
    SourceSpan::new(DATABASE_FILE, range.start, range.end)
}
