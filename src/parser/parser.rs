//! Statement parser
//!
//! The [`Parser`] pulls tokens from a [`Lexer`] through a two-token window
//! (`cur_token` and `peek_token`) and dispatches on the current token kind.
//! Syntax problems are recorded as [`ParseError`]s and parsing carries on with
//! the next token, so [`Parser::parse_program`] always returns a [`Program`].
//!
//! # Grammar
//!
//! ```text
//! program       ::= statement*
//! let_statement ::= 'let' IDENT '=' <tokens> ';'
//! ```
//!
//! The tokens after `=` are skipped until value expressions are parsed.

use crate::parser::ast::*;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use thiserror::Error;

/// A syntax problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lookahead token did not have the kind the grammar requires.
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedPeek {
        expected: TokenKind,
        actual: TokenKind,
    },
}

/// Recursive descent parser for Monkey statements
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
        };
        // Fill both cur_token and peek_token.
        parser.next_token();
        parser.next_token();
        parser
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parse the whole input.
    ///
    /// A statement that fails to parse is dropped and scanning resumes from
    /// the following token; check [`Parser::errors`] before using the result.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            // Expression statements need the expression parser.
            _ => None,
        }
    }

    /// Parse `let IDENT = ... ;`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::from_token(self.cur_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        // Skip the value up to ';'. Stopping at Eof keeps an unterminated
        // statement from spinning forever.
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance if the lookahead has the expected kind, otherwise record a
    /// diagnostic and stay put.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(ParseError::UnexpectedPeek {
            expected,
            actual: self.peek_token.kind,
        });
    }
}
