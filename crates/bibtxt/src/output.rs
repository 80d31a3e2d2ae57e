/*
 * output.rs
 * Copyright (c) 2025 bibtxt contributors
 *
 * Where the rendered document goes
 */

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout; any other name gets `.txt` appended unless it
    /// already ends in it.
    pub fn parse(raw: &str) -> OutputTarget {
        if raw == "-" {
            return OutputTarget::Stdout;
        }
        let path = if raw.ends_with(".txt") {
            PathBuf::from(raw)
        } else {
            PathBuf::from(format!("{}.txt", raw))
        };
        OutputTarget::File(path)
    }

    /// `<stem>_bib.txt` next to the manuscript.
    pub fn beside(manuscript: &Path) -> OutputTarget {
        let stem = manuscript
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        OutputTarget::File(manuscript.with_file_name(format!("{}_bib.txt", stem)))
    }

    /// Write `document`, replacing any previous content.
    pub fn write(&self, document: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(document.as_bytes())?;
                stdout.write_all(b"\n")?;
                stdout.flush()?;
            }
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory {}", parent.display())
                    })?;
                }
                fs::write(path, document)
                    .with_context(|| format!("Failed to write output file {}", path.display()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(OutputTarget::parse("-"), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::parse("out/paper.txt"),
            OutputTarget::File(PathBuf::from("out/paper.txt"))
        );
        assert_eq!(
            OutputTarget::parse("paper"),
            OutputTarget::File(PathBuf::from("paper.txt"))
        );
        assert_eq!(
            OutputTarget::parse("paper.md"),
            OutputTarget::File(PathBuf::from("paper.md.txt"))
        );
    }

    #[test]
    fn test_beside() {
        assert_eq!(
            OutputTarget::beside(Path::new("drafts/paper.txt")),
            OutputTarget::File(PathBuf::from("drafts/paper_bib.txt"))
        );
    }

    #[test]
    fn test_write_truncates_and_creates_parents() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/out.txt");
        let target = OutputTarget::File(path.clone());

        target.write("a much longer first version").unwrap();
        target.write("second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
