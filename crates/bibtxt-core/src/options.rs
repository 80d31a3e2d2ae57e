//! Settings passed into the renderers.

use chrono::NaiveDate;

pub const DEFAULT_TITLE: &str = "Bibliography";

/// `{date}` is replaced by the generation date.
pub const DEFAULT_SIGNATURE: &str = "Generated with bibtxt. {date}.";

/// Everything the reference-list renderer needs beyond the entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading of the reference list.
    pub title: String,
    /// Closing line; `{date}` is replaced by [`RenderOptions::date`].
    pub signature: String,
    pub date: NaiveDate,
}

impl RenderOptions {
    /// Default title and signature, dated `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            signature: DEFAULT_SIGNATURE.to_string(),
            date,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    /// The signature line with the date filled in (ISO `YYYY-MM-DD`).
    pub fn signature_line(&self) -> String {
        self.signature
            .replace("{date}", &self.date.format("%Y-%m-%d").to_string())
    }
}
