//! Lexer (tokenizer) for Monkey source code
//!
//! Scans the input one byte at a time and hands out [`Token`]s on demand.
//! Whitespace is skipped and never tokenized. Only ASCII letters, `_` and
//! digits form identifiers and integers; any other unrecognised character
//! becomes a [`TokenKind::Illegal`] token instead of aborting the scan.

use super::token::{lookup_ident, Token, TokenKind};
use std::iter::FusedIterator;

/// Value of `ch` once the cursor has run past the input.
const NUL: u8 = 0;

/// Pull-based lexer over a fully buffered source string.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    /// Index of `ch` in `input`.
    position: usize,
    /// Index of the byte after `ch`.
    read_position: usize,
    ch: u8,
    /// Set once the iterator has yielded `Eof`.
    exhausted: bool,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.to_string(),
            position: 0,
            read_position: 0,
            ch: NUL,
            exhausted: false,
        };
        lexer.read_char();
        lexer
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token with an
    /// empty literal.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_at_end() {
            return Token::eof();
        }

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),

            // Identifier and number scanning already stop on the first
            // unconsumed byte, so they skip the trailing read_char below.
            ch if is_letter(ch) => {
                let ident = self.read_identifier();
                return Token::new(lookup_ident(ident), ident);
            }
            ch if is_digit(ch) => {
                let number = self.read_number();
                return Token::new(TokenKind::Int, number);
            }

            _ => self.illegal(),
        };

        self.read_char();
        token
    }

    /// Tokenize the rest of the input, ending with a single `Eof`.
    ///
    /// Returns an empty vector if the iterator already yielded `Eof`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// One-byte token for the current character.
    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.input[self.position..self.read_position])
    }

    /// Unrecognised character. A non-ASCII character is taken whole so the
    /// literal stays valid UTF-8; the caller's read_char consumes its last byte.
    fn illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.input[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        for _ in 1..width {
            self.read_char();
        }
        Token::new(TokenKind::Illegal, &self.input[start..self.read_position])
    }

    fn read_identifier(&mut self) -> &str {
        let position = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        &self.input[position..self.position]
    }

    fn read_number(&mut self) -> &str {
        let position = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        &self.input[position..self.position]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Advance to next character
    fn read_char(&mut self) {
        self.ch = self
            .input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(NUL);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Peek at the byte after the current one without consuming it
    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(NUL)
    }

    /// A NUL byte inside the input is not end of input, so this checks the
    /// cursor rather than `ch`.
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.exhausted = true;
        }
        Some(token)
    }
}

impl FusedIterator for Lexer {}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input).map(|token| token.kind).collect()
    }

    #[test]
    fn test_let_statement_tokens() {
        let tokens = Lexer::new("let five = 5;").tokenize();
        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];

        assert_eq!(tokens.len(), expected.len());
        for (i, (token, (kind, literal))) in tokens.iter().zip(expected).enumerate() {
            assert_eq!(token.kind, kind, "tokens[{}] - kind", i);
            assert_eq!(token.literal, literal, "tokens[{}] - literal", i);
        }
    }

    #[test]
    fn test_two_character_operators() {
        let tokens = Lexer::new("10 == 10; 10 != 9;").tokenize();

        assert_eq!(tokens[1], Token::new(TokenKind::Eq, "=="));
        assert_eq!(tokens[5], Token::new(TokenKind::NotEq, "!="));
        assert!(!tokens.iter().any(|t| t.is(TokenKind::Assign) || t.is(TokenKind::Bang)));
    }

    #[test]
    fn test_single_character_operators() {
        assert_eq!(
            kinds("=+-!*/<>,;(){}"),
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Bang,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operator_at_end_of_input() {
        let tokens = Lexer::new("x =").tokenize();
        assert_eq!(tokens[1], Token::new(TokenKind::Assign, "="));
        assert!(tokens[2].is(TokenKind::Eof));

        let tokens = Lexer::new("!").tokenize();
        assert_eq!(tokens[0], Token::new(TokenKind::Bang, "!"));
    }

    #[test]
    fn test_identifier_followed_directly_by_symbol() {
        // The early return after an identifier must not skip the '('.
        let tokens = Lexer::new("add(x,y)").tokenize();
        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "add"));
        assert_eq!(tokens[1], Token::new(TokenKind::LParen, "("));
        assert_eq!(tokens[2], Token::new(TokenKind::Ident, "x"));
        assert_eq!(tokens[3], Token::new(TokenKind::Comma, ","));
        assert_eq!(tokens[4], Token::new(TokenKind::Ident, "y"));
        assert_eq!(tokens[5], Token::new(TokenKind::RParen, ")"));
    }

    #[test]
    fn test_digits_end_identifiers() {
        let tokens = Lexer::new("x1 12ab").tokenize();
        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "x"));
        assert_eq!(tokens[1], Token::new(TokenKind::Int, "1"));
        assert_eq!(tokens[2], Token::new(TokenKind::Int, "12"));
        assert_eq!(tokens[3], Token::new(TokenKind::Ident, "ab"));
    }

    #[test]
    fn test_illegal_characters() {
        let tokens = Lexer::new("@ # 5").tokenize();
        assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "@"));
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "#"));
        assert_eq!(tokens[2], Token::new(TokenKind::Int, "5"));
    }

    #[test]
    fn test_non_ascii_is_one_illegal_token() {
        let tokens = Lexer::new("let é = 1;").tokenize();
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "é"));
        assert_eq!(tokens[2], Token::new(TokenKind::Assign, "="));
    }

    #[test]
    fn test_nul_byte_is_not_end_of_input() {
        let tokens = Lexer::new("a\0b").tokenize();
        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "a"));
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "\0"));
        assert_eq!(tokens[2], Token::new(TokenKind::Ident, "b"));
        assert!(tokens[3].is(TokenKind::Eof));
    }

    #[test]
    fn test_eof_is_idempotent() {
        for input in ["", "   \n\t\r", "let", "5;", "@"] {
            let mut lexer = Lexer::new(input);
            while !lexer.next_token().is(TokenKind::Eof) {}
            for _ in 0..5 {
                assert_eq!(lexer.next_token(), Token::eof(), "input {:?}", input);
            }
        }
    }

    #[test]
    fn test_iterator_yields_single_eof() {
        let mut lexer = Lexer::new("let");
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Let));
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
        assert!(lexer.tokenize().is_empty());
    }

    #[test]
    fn test_cursor_always_progresses() {
        let mut inputs: Vec<String> = (0u8..128).map(|b| (b as char).to_string()).collect();
        inputs.extend(
            [
                "let x 5;\nlet = 10;\nlet 838383;",
                "==!=!==!",
                "@@@$$$%%%",
                "a_b__c 0123 ;;; {{}}",
                "日本語 let ü = 1",
                "\0\0\0",
                "   ",
            ]
            .iter()
            .map(|s| s.to_string()),
        );

        for input in &inputs {
            let mut lexer = Lexer::new(input);
            // Each non-Eof token consumes at least one byte.
            for _ in 0..=input.len() + 1 {
                let before = lexer.read_position;
                let token = lexer.next_token();
                if token.is(TokenKind::Eof) {
                    assert!(lexer.is_at_end(), "input {:?}", input);
                    break;
                }
                assert!(
                    lexer.read_position > before,
                    "cursor stalled on {:?} in {:?}",
                    token,
                    input
                );
            }
            assert!(lexer.is_at_end(), "input {:?} never reached Eof", input);
        }
    }
}
