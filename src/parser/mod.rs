//! Monkey source code front end
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Subset
//!
//! - Tokens: identifiers, integers, `= + - ! * / < > == !=`, `, ; ( ) { }`
//!   and the keywords `fn let true false if else return`
//! - Statements: `let` bindings; the bound value is not parsed yet
//! - ASCII only: no strings, floats, comments or Unicode identifiers
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one token of lookahead. Errors are
//! collected rather than returned, so one malformed statement does not hide
//! the ones after it.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Expression, Identifier, LetStatement, Node, Program, Statement};
pub use lexer::Lexer;
pub use parser::{ParseError, Parser};
pub use token::{lookup_ident, Token, TokenKind};
