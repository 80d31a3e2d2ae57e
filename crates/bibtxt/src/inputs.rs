/*
 * inputs.rs
 * Copyright (c) 2025 bibtxt contributors
 *
 * Validation and loading of the two input documents
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bibtxt_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};
use thiserror::Error;

/// Manuscript and database, read into memory.
#[derive(Debug)]
pub struct Inputs {
    pub manuscript_path: PathBuf,
    pub manuscript: String,
    pub database_path: PathBuf,
    pub database: String,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{} is not a .{expected} file", .path.display())]
    WrongExtension { path: PathBuf, expected: &'static str },

    #[error("Failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            InputError::WrongExtension { path, expected } => {
                DiagnosticMessageBuilder::error("Invalid Input Path")
                    .with_code("B-4-1")
                    .problem(format!("Expected a `.{}` file", expected))
                    .add_detail(format!("`{}` has a different extension", path.display()))
                    .build()
            }
            InputError::Unreadable { path, source } => {
                DiagnosticMessageBuilder::error("Unreadable Input")
                    .with_code("B-4-2")
                    .problem(format!("Could not read `{}`", path.display()))
                    .add_detail(source.to_string())
                    .add_hint("Check that the file exists and is readable?")
                    .build()
            }
        }
    }
}

/// Fail unless `path` ends in `.{expected}`.
pub fn check_extension(path: &Path, expected: &'static str) -> Result<(), InputError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == expected => Ok(()),
        _ => Err(InputError::WrongExtension {
            path: path.to_path_buf(),
            expected,
        }),
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

impl Inputs {
    /// Validate both paths, then read both files.
    pub fn load(manuscript_path: &Path, database_path: &Path) -> Result<Inputs, InputError> {
        check_extension(manuscript_path, "txt")?;
        check_extension(database_path, "bib")?;

        let manuscript = read(manuscript_path)?;
        let database = read(database_path)?;
        tracing::debug!(
            manuscript = %manuscript_path.display(),
            database = %database_path.display(),
            "Inputs loaded"
        );

        Ok(Inputs {
            manuscript_path: manuscript_path.to_path_buf(),
            manuscript,
            database_path: database_path.to_path_buf(),
            database,
        })
    }

    /// Both documents registered for source snippets.
    pub fn source_context(&self) -> bibtxt_error_reporting::SourceContext {
        bibtxt_core::source::source_context(
            &self.manuscript_path.display().to_string(),
            &self.manuscript,
            &self.database_path.display().to_string(),
            &self.database,
        )
    }
}
