//! # Introduction
//!
//! `monkey-syntax` is the front end of the Monkey scripting language: it
//! tokenizes source text and parses it into an AST for an evaluator to walk.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Program (AST) + diagnostics
//! ```
//!
//! 1. [`parser::lexer`] scans bytes into [`parser::token::Token`]s on demand.
//! 2. [`parser::parser`] keeps a current and a lookahead token and builds
//!    [`parser::ast::Program`], recording [`parser::ParseError`]s as it goes.
//!
//! ## Example
//!
//! ```
//! use monkey_syntax::parser::Parser;
//!
//! let mut parser = Parser::from_source("let x = 5;\nlet y = x;");
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 2);
//! ```
//!
//! A parse never fails as a whole. Callers should treat a non-empty
//! [`parser::Parser::errors`] as a rejected program.

pub mod parser;
