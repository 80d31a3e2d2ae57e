//! Rewriting citation markers as author-year parentheticals.

use crate::entry::Entry;
use crate::marker::{CitationMarker, CitationVariant, extract_markers};
use std::collections::BTreeMap;

/// The parenthetical for one marker.
///
/// ```
/// use bibtxt_core::citation::format_citation;
/// use bibtxt_core::marker::extract_markers;
/// use bibtxt_core::Entry;
/// use std::collections::BTreeMap;
///
/// let mut fields = BTreeMap::new();
/// fields.insert("author".to_string(), "Doe, Jane".to_string());
/// fields.insert("year".to_string(), "2020".to_string());
/// let entry = Entry::from_fields("doe2020", fields);
///
/// let marker = &extract_markers("\\cite[see][p. 5]{doe2020}")[0];
/// assert_eq!(format_citation(marker, &entry), "(see Doe 2020: p. 5)");
/// ```
pub fn format_citation(marker: &CitationMarker, entry: &Entry) -> String {
    let surname = &entry.author.surname;
    let year = &entry.year;
    let prefix = marker.prefix.as_deref().unwrap_or_default();
    let page = marker.suffix.as_deref().unwrap_or_default();
    match marker.variant() {
        CitationVariant::Plain => format!("({} {})", surname, year),
        CitationVariant::Prefix => format!("({} {} {})", prefix, surname, year),
        CitationVariant::Page => format!("({} {}: {})", surname, year, page),
        CitationVariant::PrefixPage => format!("({} {} {}: {})", prefix, surname, year, page),
    }
}

/// Append `manuscript` to `out` with every marker replaced.
///
/// Text between markers is copied unchanged. Cross-references must already
/// be checked: a marker whose key has no entry is copied through as-is.
/// Returns the number of markers replaced.
pub fn render_citations(
    manuscript: &str,
    entries: &BTreeMap<String, Entry>,
    out: &mut String,
) -> usize {
    let mut copied_to = 0;
    let mut replaced = 0;

    for marker in extract_markers(manuscript) {
        let Some(entry) = entries.get(&marker.key) else {
            tracing::warn!(key = %marker.key, "No entry for citation; leaving marker in place");
            continue;
        };
        out.push_str(&manuscript[copied_to..marker.span.start]);
        out.push_str(&format_citation(&marker, entry));
        copied_to = marker.span.end;
        replaced += 1;
    }
    out.push_str(&manuscript[copied_to..]);

    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Author;

    fn entries() -> BTreeMap<String, Entry> {
        let mut fields = BTreeMap::new();
        fields.insert("author".to_string(), "Doe, Jane".to_string());
        fields.insert("year".to_string(), "2020".to_string());
        let doe = Entry::from_fields("doe2020", fields);
        let anon = Entry::from_fields("anon", BTreeMap::new());

        [("doe2020".to_string(), doe), ("anon".to_string(), anon)]
            .into_iter()
            .collect()
    }

    fn render(manuscript: &str) -> String {
        let mut out = String::new();
        render_citations(manuscript, &entries(), &mut out);
        out
    }

    #[test]
    fn test_plain() {
        assert_eq!(render(r"\cite{doe2020}"), "(Doe 2020)");
    }

    #[test]
    fn test_page() {
        assert_eq!(render(r"\cite[p. 5]{doe2020}"), "(Doe 2020: p. 5)");
    }

    #[test]
    fn test_prefix() {
        assert_eq!(render(r"\cite[see][]{doe2020}"), "(see Doe 2020)");
    }

    #[test]
    fn test_each_variant_has_its_shape() {
        let entries = entries();
        let entry = &entries["doe2020"];
        let shapes = [
            (r"\cite[][]{doe2020}", CitationVariant::Plain, "(Doe 2020)"),
            (r"\cite[cf.][]{doe2020}", CitationVariant::Prefix, "(cf. Doe 2020)"),
            (r"\cite[][p. 9]{doe2020}", CitationVariant::Page, "(Doe 2020: p. 9)"),
            (r"\cite[cf.][p. 9]{doe2020}", CitationVariant::PrefixPage, "(cf. Doe 2020: p. 9)"),
        ];
        for (text, variant, expected) in shapes {
            let marker = &extract_markers(text)[0];
            assert_eq!(marker.variant(), variant, "{}", text);
            assert_eq!(format_citation(marker, entry), expected);
        }
    }

    #[test]
    fn test_prefix_and_page() {
        assert_eq!(render(r"\cite[see][p. 5]{doe2020}"), "(see Doe 2020: p. 5)");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(render(r"\cite{anon}"), "(n.a. n.d.)");
        assert_eq!(Author::unknown().surname, "n.a.");
    }

    #[test]
    fn test_surrounding_text_is_preserved() {
        assert_eq!(
            render("As \\cite{doe2020} notes, and again \\cite[ch. 2]{doe2020}.\nEnd."),
            "As (Doe 2020) notes, and again (Doe 2020: ch. 2).\nEnd."
        );
    }

    #[test]
    fn test_no_markers_copies_everything() {
        assert_eq!(render("Nothing to cite here.\n"), "Nothing to cite here.\n");
    }

    #[test]
    fn test_appends_to_destination() {
        let mut out = String::from("HEAD|");
        let count = render_citations(r"x \cite{doe2020} y \cite{anon}", &entries(), &mut out);
        assert_eq!(count, 2);
        assert_eq!(out, "HEAD|x (Doe 2020) y (n.a. n.d.)");
    }

    #[test]
    fn test_unknown_key_is_left_alone() {
        assert_eq!(render(r"\cite{zzz} \cite{doe2020}"), r"\cite{zzz} (Doe 2020)");
    }
}
