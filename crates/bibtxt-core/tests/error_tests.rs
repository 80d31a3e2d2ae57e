//! Error messages, kinds, codes and their rendered diagnostics.

use bibtxt_core::source::source_context;
use bibtxt_core::{Error, ErrorKind, check_documents};
use bibtxt_error_reporting::get_error_info;

#[test]
fn test_every_error_code_is_in_the_catalog() {
    let errors = [
        Error::DuplicateKey {
            key: "doe".into(),
            citation: 0..10,
            declarations: vec![0..5, 10..15],
        },
        Error::UnresolvedKey {
            key: "doe".into(),
            citation: 0..10,
        },
        Error::InvalidType {
            key: "doe".into(),
            entry_type: "Blog".into(),
            declaration: 0..10,
        },
        Error::MissingField {
            key: "doe".into(),
            field: "title".into(),
            entry_type: "book".into(),
        },
        Error::MissingAlternative {
            key: "doe".into(),
            first: "author".into(),
            second: "editor".into(),
            entry_type: "book".into(),
        },
    ];

    for error in &errors {
        let info = get_error_info(error.code());
        assert!(info.is_some(), "{} missing from catalog", error.code());
        assert_eq!(error.to_diagnostic().code.as_deref(), Some(error.code()));
    }
}

#[test]
fn test_display_names_the_offender() {
    let error = Error::MissingAlternative {
        key: "smith".into(),
        first: "chapter".into(),
        second: "pages".into(),
        entry_type: "inbook".into(),
    };
    assert_eq!(
        error.to_string(),
        "'chapter' or 'pages' is a required field for 'inbook' (entry 'smith')"
    );

    let error = Error::DuplicateKey {
        key: "doe".into(),
        citation: 0..10,
        declarations: vec![0..5, 10..15],
    };
    assert_eq!(
        error.to_string(),
        "Reoccurrence of the key 'doe' detected (2 declarations)"
    );
}

#[test]
fn test_unresolved_key_diagnostic_points_into_manuscript() {
    let manuscript = "Intro.\nSee \\cite{ghost}.";
    let database = "@misc{real, title = {T}}";
    let error = check_documents(manuscript, database).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnresolvedKey);

    let ctx = source_context("paper.txt", manuscript, "refs.bib", database);
    let text = error.to_diagnostic().to_text(Some(&ctx));
    assert!(text.starts_with("Error [B-1-2]: Unresolved Key"), "{}", text);
    assert!(text.contains("at paper.txt:2:5"), "{}", text);
    assert!(text.contains("ghost"), "{}", text);
}

#[test]
fn test_duplicate_key_diagnostic_lists_each_declaration() {
    let manuscript = "\\cite{doe}";
    let database = "@misc{doe, title = {A}}\n@misc{doe, title = {B}}\n";
    let error = check_documents(manuscript, database).unwrap_err();

    let diagnostic = error.to_diagnostic();
    assert_eq!(diagnostic.details.len(), 2);
    assert!(diagnostic.details.iter().all(|d| d.location.is_some()));

    let json = diagnostic.to_json();
    assert_eq!(json["code"], "B-1-1");
    assert_eq!(json["title"], "Duplicate Key");
}

#[test]
fn test_invalid_type_diagnostic_suggests_listing_types() {
    let manuscript = "\\cite{doe}";
    let database = "@blogpost{doe, title = {A}}";
    let error = check_documents(manuscript, database).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidType);

    let text = error.to_diagnostic().to_text(None);
    assert!(text.contains("`blogpost`"), "{}", text);
    assert!(text.contains("bibtxt types"), "{}", text);
    assert!(text.contains("at bytes 0..13"), "{}", text);
}
