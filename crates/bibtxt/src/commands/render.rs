/*
 * render.rs
 * Copyright (c) 2025 bibtxt contributors
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! Reads the manuscript and database, runs the full pipeline, and writes
//! the manuscript with parenthetical citations and a reference list. Nothing
//! is written if any check fails.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use bibtxt_core::{RenderOptions, process_documents};

use crate::DiagnosticFormat;
use crate::config::ConfigFile;
use crate::inputs::Inputs;
use crate::output::OutputTarget;
use crate::report::print_diagnostic;

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    pub manuscript: PathBuf,
    pub database: PathBuf,
    /// Output file, `-` for stdout
    pub output: Option<String>,
    /// Reference-list heading, overriding the config file
    pub title: Option<String>,
    pub config: Option<PathBuf>,
    pub diagnostics: DiagnosticFormat,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<ExitCode> {
    let config = ConfigFile::load(args.config.as_deref())?;
    let today = chrono::Local::now().date_naive();
    let options = config.apply(RenderOptions::new(today), args.title.as_deref());

    let inputs = match Inputs::load(&args.manuscript, &args.database) {
        Ok(inputs) => inputs,
        Err(err) => {
            print_diagnostic(&err.to_diagnostic(), args.diagnostics, None);
            return Ok(ExitCode::FAILURE);
        }
    };

    let target = match &args.output {
        Some(raw) => OutputTarget::parse(raw),
        None => OutputTarget::beside(&args.manuscript),
    };

    let output = match process_documents(&inputs.manuscript, &inputs.database, &options) {
        Ok(output) => output,
        Err(err) => {
            let ctx = inputs.source_context();
            print_diagnostic(&err.to_diagnostic(), args.diagnostics, Some(&ctx));
            return Ok(ExitCode::FAILURE);
        }
    };

    target.write(&output.document)?;

    if let OutputTarget::File(path) = &target {
        info!(
            output = %path.display(),
            citations = output.citations,
            entries = output.entries,
            "Output written"
        );
    }

    Ok(ExitCode::SUCCESS)
}
