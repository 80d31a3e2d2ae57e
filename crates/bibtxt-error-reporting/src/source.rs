//! Byte spans into in-memory documents.

use serde::{Deserialize, Serialize};

/// Index of a file registered in a [`SourceContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub usize);

/// A half-open byte range `start..end` inside one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub file_id: FileId,
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn new(file_id: FileId, start: usize, end: usize) -> Self {
        Self {
            file_id,
            start,
            end,
        }
    }
}

/// A document held in memory together with the name it is reported under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// File path or identifier
    pub path: String,
    pub content: String,
}

/// Context for managing source files.
///
/// Diagnostics only carry [`SourceSpan`]s; the context supplies the text
/// needed to turn them into line numbers and snippets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceContext {
    files: Vec<SourceFile>,
}

impl SourceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the context and return its ID.
    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) -> FileId {
        let id = FileId(self.files.len());
        self.files.push(SourceFile {
            path: path.into(),
            content: content.into(),
        });
        id
    }

    pub fn get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0)
    }

    /// 1-based line and column of a byte offset.
    ///
    /// Columns count characters, not bytes. Returns `None` if the file is
    /// unknown or the offset is not on a character boundary.
    pub fn line_column(&self, id: FileId, offset: usize) -> Option<(usize, usize)> {
        let content = &self.get_file(id)?.content;
        let before = content.get(..offset)?;
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Some((line, column))
    }
}
