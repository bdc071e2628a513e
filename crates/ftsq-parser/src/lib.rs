//! Parser for ftsq user queries
//!
//! Turns the logos token stream into a flat [`Query`]: search terms joined by
//! operators, with an implicit `AND` wherever the user left one out.

use ftsq_ast::{Clause, Operator, OperatorKind, Query, Span, Spanned, Term};
use ftsq_lexer::{Lexer, SpannedToken, Token};

// Term processing utilities
pub mod term_utils;

pub struct Parser {
    input: String,
    tokens: Vec<SpannedToken>,
}

impl Parser {
    /// Create a new parser for the given input
    ///
    /// Every character lexes as a term or as whitespace, so this cannot fail.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();

        Self {
            input: input.to_string(),
            tokens,
        }
    }

    /// Parse the input into a query AST
    ///
    /// A keyword counts as an operator only between two terms. A leading,
    /// trailing or doubled keyword is searched for like any other word.
    #[must_use]
    pub fn parse(&self) -> Query {
        let tokens: Vec<&SpannedToken> = self
            .tokens
            .iter()
            .filter(|token| token.token != Token::Eof)
            .collect();

        let mut clauses = Vec::with_capacity(tokens.len() * 2);
        let mut previous_term_end: Option<usize> = None;

        for (index, token) in tokens.iter().enumerate() {
            let next_is_term = tokens
                .get(index + 1)
                .is_some_and(|next| next.token == Token::Term);

            if let Some(kind) = operator_kind(token.token) {
                if previous_term_end.is_some() && next_is_term {
                    clauses.push(Spanned::new(
                        Clause::Operator(Operator::explicit(kind, token.text.as_str())),
                        token.span,
                    ));
                    previous_term_end = None;
                    continue;
                }
            }

            if let Some(end) = previous_term_end {
                clauses.push(Spanned::new(
                    Clause::Operator(Operator::implicit_and()),
                    Span::new(end, token.span.start),
                ));
            }

            let (text, exact) = term_utils::split_exact_marker(&token.text);
            clauses.push(Spanned::new(Clause::Term(Term::new(text, exact)), token.span));
            previous_term_end = Some(token.span.end);
        }

        let query = Query { clauses };
        tracing::trace!(
            input = %self.input,
            terms = query.terms().count(),
            clauses = query.clauses.len(),
            "parsed query"
        );
        query
    }

    /// Get access to the original input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get access to the tokens (useful for debugging)
    #[must_use]
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }
}

const fn operator_kind(token: Token) -> Option<OperatorKind> {
    match token {
        Token::And => Some(OperatorKind::And),
        Token::Or => Some(OperatorKind::Or),
        _ => None,
    }
}
