//! Citation markers in manuscript text.
//!
//! A marker is `\cite`, up to two bracketed modifiers, then a braced key:
//!
//! | Marker | Variant |
//! |---|---|
//! | `\cite{k}` | [`CitationVariant::Plain`] |
//! | `\cite[p. 5]{k}` | [`CitationVariant::Page`] |
//! | `\cite[see][]{k}` | [`CitationVariant::Prefix`] |
//! | `\cite[see][p. 5]{k}` | [`CitationVariant::PrefixPage`] |
//!
//! Empty modifiers count as absent.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

/// Any marker: captures first modifier, second modifier, key.
static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\cite(?:\[([^\[\]]*)\])?(?:\[([^\[\]]*)\])?\{(\w+)\}")
        .expect("marker pattern is valid")
});

/// Exactly one modifier: the page-only form. Checked before [`MARKER_RE`]'s slots.
static PAGE_ONLY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\\cite\[([^\[\]]*)\]\{\w+\}$").expect("page-only pattern is valid")
});

/// Which parenthetical shape a marker renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CitationVariant {
    /// `(Surname Year)`
    Plain,
    /// `(Prefix Surname Year)`
    Prefix,
    /// `(Surname Year: Page)`
    Page,
    /// `(Prefix Surname Year: Page)`
    PrefixPage,
}

/// One marker found in the manuscript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationMarker {
    /// Byte range of the whole marker.
    pub span: Range<usize>,
    pub prefix: Option<String>,
    /// Page reference or other suffix.
    pub suffix: Option<String>,
    pub key: String,
}

impl CitationMarker {
    pub fn variant(&self) -> CitationVariant {
        match (&self.prefix, &self.suffix) {
            (None, None) => CitationVariant::Plain,
            (Some(_), None) => CitationVariant::Prefix,
            (None, Some(_)) => CitationVariant::Page,
            (Some(_), Some(_)) => CitationVariant::PrefixPage,
        }
    }
}

fn non_empty(m: Option<regex::Match<'_>>) -> Option<String> {
    m.map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Find every marker in document order.
///
/// ```
/// use bibtxt_core::marker::extract_markers;
/// use bibtxt_core::CitationVariant;
///
/// let markers = extract_markers("See \\cite[p. 5]{doe2020} and \\cite[cf.][]{roe}.");
/// assert_eq!(markers[0].variant(), CitationVariant::Page);
/// assert_eq!(markers[1].variant(), CitationVariant::Prefix);
/// ```
pub fn extract_markers(text: &str) -> Vec<CitationMarker> {
    MARKER_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("group 0 always participates");
            let key = caps[3].to_string();

            let (prefix, suffix) = if let Some(page) = PAGE_ONLY_RE.captures(whole.as_str()) {
                (None, non_empty(page.get(1)))
            } else {
                // `\cite[][p. 5]{k}` leaves the prefix empty and renders as a page
                (non_empty(caps.get(1)), non_empty(caps.get(2)))
            };

            CitationMarker {
                span: whole.range(),
                prefix,
                suffix,
                key,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(text: &str) -> CitationMarker {
        let mut markers = extract_markers(text);
        assert_eq!(markers.len(), 1, "expected one marker in {:?}", text);
        markers.remove(0)
    }

    #[test]
    fn test_plain() {
        let marker = single(r"\cite{doe2020}");
        assert_eq!(marker.key, "doe2020");
        assert_eq!(marker.variant(), CitationVariant::Plain);
        assert_eq!(marker.span, 0..14);
    }

    #[test]
    fn test_single_bracket_is_page() {
        let marker = single(r"\cite[p. 5]{doe2020}");
        assert_eq!(marker.variant(), CitationVariant::Page);
        assert_eq!(marker.suffix.as_deref(), Some("p. 5"));
        assert_eq!(marker.prefix, None);
    }

    #[test]
    fn test_empty_second_bracket_is_prefix() {
        let marker = single(r"\cite[see][]{doe2020}");
        assert_eq!(marker.variant(), CitationVariant::Prefix);
        assert_eq!(marker.prefix.as_deref(), Some("see"));
    }

    #[test]
    fn test_two_brackets() {
        let marker = single(r"\cite[see][p. 5]{doe2020}");
        assert_eq!(marker.variant(), CitationVariant::PrefixPage);
        assert_eq!(marker.prefix.as_deref(), Some("see"));
        assert_eq!(marker.suffix.as_deref(), Some("p. 5"));
    }

    #[test]
    fn test_empty_first_bracket_with_page() {
        let marker = single(r"\cite[][p. 5]{doe2020}");
        assert_eq!(marker.variant(), CitationVariant::Page);
    }

    #[test]
    fn test_empty_brackets_are_plain() {
        assert_eq!(single(r"\cite[]{doe2020}").variant(), CitationVariant::Plain);
        assert_eq!(single(r"\cite[][]{doe2020}").variant(), CitationVariant::Plain);
    }

    #[test]
    fn test_three_brackets_are_not_a_marker() {
        assert!(extract_markers(r"\cite[a][b][c]{doe2020}").is_empty());
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let text = "Über \\cite{a} und \\cite[S. 3]{b}";
        let markers = extract_markers(text);
        assert_eq!(markers.len(), 2);
        for marker in &markers {
            assert!(text[marker.span.clone()].starts_with("\\cite"));
        }
        assert_eq!(&text[markers[1].span.clone()], "\\cite[S. 3]{b}");
    }
}
