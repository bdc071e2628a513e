//! Lexical analysis for ftsq
//!
//! Splits free user text into search terms and boolean keywords using logos.

use ftsq_ast::Span;
use logos::Logos;

/// Query tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `AND` keyword, any casing
    #[token("and", ignore(case))]
    And,

    /// `OR` keyword, any casing
    #[token("or", ignore(case))]
    Or,

    /// Any run of non-whitespace characters. Longer matches win over the
    /// keywords, so `android` and `orange` stay terms.
    #[regex(r"[^\s]+")]
    Term,

    /// Whitespace (ignored)
    #[regex(r"\s+", logos::skip)]
    Whitespace,

    /// End of input
    Eof,
}

/// Token with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(result) => {
                let span = self.lexer.span();
                let text = self.input[span.clone()].to_string();
                // Term and Whitespace together cover every character
                SpannedToken {
                    token: result.unwrap_or(Token::Term),
                    span: Span::new(span.start, span.end),
                    text,
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: String::new(),
            },
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
