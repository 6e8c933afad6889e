use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    value::value::Value,
    MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap();
    static ref IDENTIFIER_PATTERN: Regex =
        Regex::new(r"^[\p{Alphabetic}_][\p{Alphabetic}\d_]*").unwrap();
}

/// Single pass scanner state.
///
/// `start` marks the first byte of the lexeme being scanned and `current`
/// the next byte to read. Both are byte offsets into `source`.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Value>) {
        let token = MK_TOKEN!(kind, self.lexeme().to_string(), literal, self.line);
        tracing::trace!(%token, line = self.line, "scanned token");
        self.push(token);
    }

    fn scan_token(&mut self) -> Result<(), Error> {
        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_char('=') { TokenKind::BangEqual } else { TokenKind::Bang };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') { TokenKind::EqualEqual } else { TokenKind::Equal };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') { TokenKind::LessEqual } else { TokenKind::Less };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    self.line_comment();
                } else if self.match_char('*') {
                    return self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => return self.string(),
            c if c.is_ascii_digit() => return self.number(),
            c if c.is_alphabetic() || c == '_' => self.identifier(),
            c => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: c.to_string(),
                    },
                    self.line,
                ))
            }
        }

        Ok(())
    }

    fn line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    // Block comments do not nest: the first `*/` closes the comment.
    fn block_comment(&mut self) -> Result<(), Error> {
        loop {
            match self.peek() {
                None => return Err(Error::new(ErrorImpl::UnterminatedBlockComment, self.line)),
                Some('*') if self.peek_next() == Some('/') => {
                    self.current += 2;
                    return Ok(());
                }
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
            }
        }
    }

    fn string(&mut self) -> Result<(), Error> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            return Err(Error::new(ErrorImpl::UnterminatedString, self.line));
        }

        // Closing quote
        self.advance();

        let value = &self.source[(self.start + 1)..(self.current - 1)];
        self.add_literal_token(TokenKind::String, Some(Value::String(value.to_string())));
        Ok(())
    }

    fn number(&mut self) -> Result<(), Error> {
        if let Some(matched) = NUMBER_PATTERN.find(&self.source[self.start..]) {
            self.current = self.start + matched.end();
        }

        let number = self.lexeme().parse::<f64>().map_err(|_| {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.lexeme().to_string(),
                },
                self.line,
            )
        })?;

        self.add_literal_token(TokenKind::Number, Some(Value::Number(number)));
        Ok(())
    }

    fn identifier(&mut self) {
        if let Some(matched) = IDENTIFIER_PATTERN.find(&self.source[self.start..]) {
            self.current = self.start + matched.end();
        }

        match RESERVED_LOOKUP.get(self.lexeme()) {
            Some(kind) => self.add_token(*kind),
            None => self.add_token(TokenKind::Identifier),
        }
    }
}

/// Scans `source` into tokens, always ending with an `EOF` token.
///
/// Lexical errors are reported to `diagnostics` and scanning carries on with
/// the next character, so every error in the source surfaces in one pass.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn tokenize(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        lex.start = lex.current;

        if let Err(error) = lex.scan_token() {
            diagnostics.report(error);
        }
    }

    let line = lex.line();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, line));

    tracing::debug!(tokens = lex.tokens.len(), lines = line, "tokenized");
    lex.tokens
}
