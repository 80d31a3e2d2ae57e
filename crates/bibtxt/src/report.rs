/*
 * report.rs
 * Copyright (c) 2025 bibtxt contributors
 *
 * Printing diagnostics to stderr
 */

use bibtxt_core::SkippedLine;
use bibtxt_core::source::DATABASE_FILE;
use bibtxt_error_reporting::{
    DiagnosticMessage, DiagnosticMessageBuilder, SourceContext, SourceSpan,
};

use crate::DiagnosticFormat;

/// Render one diagnostic in the requested format.
pub fn format_diagnostic(
    diagnostic: &DiagnosticMessage,
    format: DiagnosticFormat,
    ctx: Option<&SourceContext>,
) -> String {
    match format {
        DiagnosticFormat::Text => diagnostic.to_text(ctx),
        DiagnosticFormat::Json => diagnostic.to_json().to_string(),
    }
}

pub fn print_diagnostic(
    diagnostic: &DiagnosticMessage,
    format: DiagnosticFormat,
    ctx: Option<&SourceContext>,
) {
    eprintln!("{}", format_diagnostic(diagnostic, format, ctx));
}

/// A warning for a database line that held no recognised field.
pub fn skipped_line_warning(line: &SkippedLine) -> DiagnosticMessage {
    DiagnosticMessageBuilder::warning("Skipped Line")
        .with_code("B-3-1")
        .problem(format!(
            "A line in entry `{}` holds no recognised field and was ignored",
            line.key
        ))
        .add_detail(format!("`{}`", line.text))
        .with_location(SourceSpan::new(DATABASE_FILE, line.span.start, line.span.end))
        .build()
}
