//! Search query formatter
//!
//! Turns free user text into a full-text search query: every word becomes a
//! group of `field:"word*"` clauses, one per configured field, OR-ed together
//! and joined to the next group by the user's operator or an implicit `AND`.
//!
//! ```text
//! big yellow OR =banana
//! (cm:name:"big*") AND (cm:name:"yellow*") OR (=cm:name:"banana")
//! ```

use ftsq_ast::{Clause, FieldList, Query, Term};
use ftsq_parser::Parser;
use ftsq_parser::term_utils::is_structured;

pub mod config;
pub mod results;

pub use config::AppConfig;
pub use results::{NodeAction, NodeEntry, Paging, SearchQueryBuilder, SearchRequest};

/// Formats user input against a fixed list of fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    fields: FieldList,
}

impl Formatter {
    #[must_use]
    pub const fn new(fields: FieldList) -> Self {
        Self { fields }
    }

    /// Formatter over the fields named in `search."aca:fields"`, read once
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.search_fields())
    }

    #[must_use]
    pub const fn fields(&self) -> &FieldList {
        &self.fields
    }

    /// See [`format_search_query`]
    #[must_use]
    pub fn format(&self, raw: Option<&str>) -> Option<String> {
        format_search_query(raw, &self.fields)
    }
}

/// Format raw user text into a search query.
///
/// Returns `None` for missing, empty or blank input. Text that already
/// contains query syntax (a `:` or a `"`) is returned unchanged.
#[must_use]
pub fn format_search_query(raw: Option<&str>, fields: &FieldList) -> Option<String> {
    let input = raw?;
    if input.trim().is_empty() {
        tracing::debug!("blank query");
        return None;
    }

    if is_structured(input) {
        tracing::debug!(query = input, "query syntax detected, passing through");
        return Some(input.to_string());
    }

    let query = Parser::new(input).parse();
    let formatted = render(&query, fields);
    tracing::debug!(
        terms = query.terms().count(),
        fields = fields.len(),
        query = %formatted,
        "formatted query"
    );
    Some(formatted)
}

/// Render a parsed query, one field group per term
#[must_use]
pub fn render(query: &Query, fields: &FieldList) -> String {
    query
        .clauses
        .iter()
        .map(|clause| match &clause.node {
            Clause::Term(term) => format_fields(fields, term),
            Clause::Operator(op) => op.text.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `(f1:"term*" OR f2:"term*")`, or `(=f1:"term" OR =f2:"term")` for an
/// exact term
#[must_use]
pub fn format_fields(fields: &FieldList, term: &Term) -> String {
    let (prefix, suffix) = if term.exact { ("=", "") } else { ("", "*") };
    let clauses: Vec<String> = fields
        .iter()
        .map(|field| format!("{prefix}{field}:\"{}{suffix}\"", term.text))
        .collect();
    format!("({})", clauses.join(" OR "))
}
