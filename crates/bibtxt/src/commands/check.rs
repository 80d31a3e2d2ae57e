/*
 * check.rs
 * Copyright (c) 2025 bibtxt contributors
 *
 * Check command implementation
 */

//! Validate both documents and report problems without rendering.
//!
//! Besides the fatal errors of `render`, this reports every database line
//! that was skipped because it held no recognised field.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use bibtxt_core::check_documents;

use crate::DiagnosticFormat;
use crate::inputs::Inputs;
use crate::report::{print_diagnostic, skipped_line_warning};

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    pub manuscript: PathBuf,
    pub database: PathBuf,
    pub diagnostics: DiagnosticFormat,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<ExitCode> {
    let inputs = match Inputs::load(&args.manuscript, &args.database) {
        Ok(inputs) => inputs,
        Err(err) => {
            print_diagnostic(&err.to_diagnostic(), args.diagnostics, None);
            return Ok(ExitCode::FAILURE);
        }
    };
    let ctx = inputs.source_context();

    let report = match check_documents(&inputs.manuscript, &inputs.database) {
        Ok(report) => report,
        Err(err) => {
            print_diagnostic(&err.to_diagnostic(), args.diagnostics, Some(&ctx));
            return Ok(ExitCode::FAILURE);
        }
    };

    for line in &report.bibliography.skipped {
        print_diagnostic(&skipped_line_warning(line), args.diagnostics, Some(&ctx));
    }

    println!(
        "{} entries cited, {} uncited, {} lines skipped",
        report.bibliography.len(),
        report.unreferenced.len(),
        report.bibliography.skipped.len()
    );

    Ok(ExitCode::SUCCESS)
}
