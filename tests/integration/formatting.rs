//! Integration tests for the parse + render pipeline

use ftsq_ast::FieldList;
use ftsq_formatter::{format_fields, format_search_query, render};
use ftsq_parser::Parser;

fn name_and_title() -> FieldList {
    FieldList::new(["cm:name", "cm:title"])
}

#[test]
fn test_render_matches_format() {
    let input = "big yellow OR =banana";
    let query = Parser::new(input).parse();

    assert_eq!(
        Some(render(&query, &name_and_title())),
        format_search_query(Some(input), &name_and_title())
    );
}

#[test]
fn test_mixed_implicit_and_explicit_operators() {
    assert_eq!(
        format_search_query(Some("big yellow OR banana"), &FieldList::default()).as_deref(),
        Some(r#"(cm:name:"big*") AND (cm:name:"yellow*") OR (cm:name:"banana*")"#)
    );
}

#[test]
fn test_operator_case_is_preserved() {
    assert_eq!(
        format_search_query(Some("big And banana"), &FieldList::default()).as_deref(),
        Some(r#"(cm:name:"big*") And (cm:name:"banana*")"#)
    );
}

#[test]
fn test_exact_and_wildcard_terms_mixed() {
    assert_eq!(
        format_search_query(Some("=report draft"), &name_and_title()).as_deref(),
        Some(concat!(
            r#"(=cm:name:"report" OR =cm:title:"report") AND "#,
            r#"(cm:name:"draft*" OR cm:title:"draft*")"#
        ))
    );
}

#[test]
fn test_format_fields_field_order() {
    let query = Parser::new("x").parse();
    let term = query.terms().next().unwrap();
    let fields = FieldList::new(["cm:title", "cm:description", "cm:name"]);

    assert_eq!(
        format_fields(&fields, term),
        r#"(cm:title:"x*" OR cm:description:"x*" OR cm:name:"x*")"#
    );
}

#[test]
fn test_unicode_terms() {
    assert_eq!(
        format_search_query(Some("пользователь"), &FieldList::default()).as_deref(),
        Some(r#"(cm:name:"пользователь*")"#)
    );
}

#[test]
fn test_extra_whitespace_is_ignored() {
    assert_eq!(
        format_search_query(Some("  big \t banana  "), &FieldList::default()).as_deref(),
        Some(r#"(cm:name:"big*") AND (cm:name:"banana*")"#)
    );
}

#[test]
fn test_control_characters_are_searched_as_words() {
    assert_eq!(
        format_search_query(Some("\u{0}"), &FieldList::default()).as_deref(),
        Some("(cm:name:\"\u{0}*\")")
    );
    assert_eq!(
        format_search_query(Some("a\u{7}b"), &FieldList::default()).as_deref(),
        Some("(cm:name:\"a\u{7}b*\")")
    );
}
