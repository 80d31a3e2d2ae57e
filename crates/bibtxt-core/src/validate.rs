//! Entry-type and required-field validation.

use crate::catalog::{EntryType, FieldRequirement};
use crate::crossref::declarations;
use crate::error::{Error, Result};
use crate::parser::Bibliography;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Any `@name{`, with or without a `key,` after it.
static TYPE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(\w+)\{(\w*)").expect("type tag pattern is valid"));

/// Check that every `@name{` tag of the database names a catalogued type.
///
/// Uncited entries are checked too, as are tags without a `key,`
/// (`@comment{...}`, `@websit{notes}`), which never become entries.
pub fn check_entry_types(database: &str) -> Result<()> {
    for caps in TYPE_TAG_RE.captures_iter(database) {
        let entry_type = &caps[1];
        if EntryType::from_name(entry_type).is_none() {
            return Err(Error::InvalidType {
                key: caps[2].to_string(),
                entry_type: entry_type.to_string(),
                declaration: caps.get(0).expect("group 0 always participates").range(),
            });
        }
    }
    Ok(())
}

/// Check each retained entry against its type's required fields.
///
/// Entry types are checked first (see [`check_entry_types`]). Returns the
/// declared type of every retained entry.
pub fn check_required_fields(
    bibliography: &Bibliography,
    database: &str,
) -> Result<BTreeMap<String, EntryType>> {
    check_entry_types(database)?;

    let mut types = BTreeMap::new();
    for declaration in declarations(database) {
        let Some(entry) = bibliography.get(&declaration.key) else {
            continue;
        };
        let entry_type = EntryType::from_name(&declaration.entry_type).ok_or_else(|| {
            Error::InvalidType {
                key: declaration.key.clone(),
                entry_type: declaration.entry_type.clone(),
                declaration: declaration.span.clone(),
            }
        })?;

        for requirement in entry_type.spec().required {
            if requirement.is_met_by(|field| entry.has_field(field)) {
                continue;
            }
            return Err(match *requirement {
                FieldRequirement::Field(field) => Error::MissingField {
                    key: declaration.key.clone(),
                    field: field.to_string(),
                    entry_type: declaration.entry_type.clone(),
                },
                FieldRequirement::Either(first, second) => Error::MissingAlternative {
                    key: declaration.key.clone(),
                    first: first.to_string(),
                    second: second.to_string(),
                    entry_type: declaration.entry_type.clone(),
                },
            });
        }

        tracing::debug!(key = %declaration.key, entry_type = %entry_type, "Entry fields complete");
        types.insert(declaration.key, entry_type);
    }

    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::parser::parse_bibliography;
    use std::collections::BTreeSet;

    fn validate(database: &str) -> Result<BTreeMap<String, EntryType>> {
        let bib = parse_bibliography(database, &BTreeSet::new());
        check_required_fields(&bib, database)
    }

    #[test]
    fn test_complete_article() {
        let types = validate(
            "@Article{doe2020, author = {Doe, Jane}, title = {X}, journal = {Y}, year = {2020}, volume = {1}}",
        )
        .unwrap();
        assert_eq!(types.get("doe2020"), Some(&EntryType::Article));
    }

    #[test]
    fn test_invalid_type() {
        let err = validate("@online{web, title = {Site}}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
        assert_eq!(err.to_string(), "'online' is not a valid entry type (entry 'web')");
    }

    #[test]
    fn test_invalid_type_reported_before_missing_fields() {
        let err = validate("@article{a, title = {T}}\n@online{web, title = {Site}}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_invalid_type_of_uncited_entry() {
        let database = "@misc{a, title = {A}}\n@bogus{ghost,}";
        let discard: BTreeSet<String> = ["ghost".to_string()].into_iter().collect();
        let bib = parse_bibliography(database, &discard);
        let err = check_required_fields(&bib, database).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_invalid_type_without_key_comma() {
        let err = validate("@misc{a, title = {A}}\n@websit{notes}\n").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidType {
                key: "notes".to_string(),
                entry_type: "websit".to_string(),
                declaration: 22..35,
            }
        );

        let err = check_entry_types("@Comment{ignore me}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
        assert!(err.to_string().starts_with("'Comment' is not a valid entry type"));
    }

    #[test]
    fn test_missing_field_names_field_and_type() {
        let err = validate("@article{a, author = {Doe, J}, title = {T}, year = 2000, volume = 3}")
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingField {
                key: "a".to_string(),
                field: "journal".to_string(),
                entry_type: "article".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_year_is_never_reported() {
        let types =
            validate("@phdthesis{t, author = {Roe, R}, title = {T}, school = {MIT}}").unwrap();
        assert_eq!(types.get("t"), Some(&EntryType::PhdThesis));
    }

    #[test]
    fn test_sentinel_author_does_not_satisfy_author_or_editor() {
        let err = validate("@book{b, title = {T}, publisher = {P}, year = 1990}").unwrap_err();
        assert_eq!(
            err,
            Error::MissingAlternative {
                key: "b".to_string(),
                first: "author".to_string(),
                second: "editor".to_string(),
                entry_type: "book".to_string(),
            }
        );
    }

    #[test]
    fn test_editor_satisfies_author_or_editor() {
        let types = validate("@book{b, editor = {Ed Itor}, title = {T}, publisher = {P}}").unwrap();
        assert_eq!(types.get("b"), Some(&EntryType::Book));
    }

    #[test]
    fn test_inbook_without_chapter_or_pages_fails() {
        let err = validate(
            "@inbook{i, author = {A, B}, title = {T}, publisher = {P}, year = 2000}",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAlternative);
        assert!(err.to_string().contains("'chapter' or 'pages'"));
    }

    #[test]
    fn test_only_retained_entries_need_fields() {
        let database = "@misc{a, title = {A}}\n@article{ghost, title = {G}}";
        let discard: BTreeSet<String> = ["ghost".to_string()].into_iter().collect();
        let bib = parse_bibliography(database, &discard);
        let types = check_required_fields(&bib, database).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types.get("a"), Some(&EntryType::Misc));
    }
}
