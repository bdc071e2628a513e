//! Syntax tree and shared types for ftsq
//!
//! Every clause keeps the byte span of the source text it came from.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Field searched when the configuration names none
pub const DEFAULT_FIELD: &str = "cm:name";

/// Byte range in the user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice the source text covered by this span
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

/// AST node with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    #[must_use]
    pub const fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Parsed user query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub clauses: Vec<Spanned<Clause>>,
}

impl Query {
    /// Search terms in input order, operators skipped
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.clauses.iter().filter_map(|clause| match &clause.node {
            Clause::Term(term) => Some(term),
            Clause::Operator(_) => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// One element of a query: a term or the operator joining two terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Term(Term),
    Operator(Operator),
}

/// A search word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Word text with any exact-match marker removed
    pub text: String,
    /// `=word`: match literally, no trailing wildcard
    pub exact: bool,
}

impl Term {
    #[must_use]
    pub fn new(text: impl Into<String>, exact: bool) -> Self {
        Self {
            text: text.into(),
            exact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    And,
    Or,
}

/// Boolean operator between two term groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub kind: OperatorKind,
    /// Text as typed by the user (`and`, `OR`, ...), emitted verbatim
    pub text: String,
    /// Inserted between adjacent terms rather than typed
    pub implicit: bool,
}

impl Operator {
    #[must_use]
    pub fn explicit(kind: OperatorKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            implicit: false,
        }
    }

    /// The conjunction used between terms that have no operator
    #[must_use]
    pub fn implicit_and() -> Self {
        Self {
            kind: OperatorKind::And,
            text: "AND".to_string(),
            implicit: true,
        }
    }
}

/// Ordered, non-empty list of index fields each term is matched against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FieldList(Vec<String>);

impl FieldList {
    /// Build a field list, dropping blank entries.
    ///
    /// Falls back to [`DEFAULT_FIELD`] when nothing usable is left.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<String> = fields
            .into_iter()
            .map(|field| field.as_ref().trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();

        if fields.is_empty() {
            Self::default()
        } else {
            Self(fields)
        }
    }

    /// Parse a comma separated list such as `cm:name,cm:title`
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for FieldList {
    fn default() -> Self {
        Self(vec![DEFAULT_FIELD.to_string()])
    }
}

impl From<Vec<String>> for FieldList {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl From<FieldList> for Vec<String> {
    fn from(fields: FieldList) -> Self {
        fields.0
    }
}

/// Errors raised while loading configuration
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum FtsqError {
    #[error("ftsq: ERR_CONFIG: cannot read {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ftsq: ERR_CONFIG: invalid JSON in {origin}: {source}")]
    ConfigParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
