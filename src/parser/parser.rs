//! Parser state and the parsing entry point.
//!
//! The parser owns the token stream and a cursor into it. The grammar rules
//! live in [`super::expr`] as free functions over `&mut Parser`.

use crate::{
    ast::ast::Expr,
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::expr::parse_expr;

/// Deepest nesting of operators and groupings a parsed expression may reach.
///
/// Parsing, evaluation and dropping of a tree all recurse once per level.
pub const MAX_EXPR_DEPTH: usize = 100;

/// The main parser structure that maintains parsing state.
///
/// The token stream always ends with an `EOF` token, and the cursor never
/// moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Unary and grouping rules currently open
    nesting: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended if the stream does not already end with
    /// one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map_or(1, |token| token.line);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, line));
        }

        Parser {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Consumes the current token and returns it.
    ///
    /// At the end of the stream the `EOF` token is returned and the cursor
    /// stays put.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.is_at_end()
    }

    /// Returns the number of tokens left before `EOF`.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - 1 - self.pos
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_token_kind() == kind
    }

    /// Consumes the current token if it is one of `kinds`.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if !self.is_at_end() && self.current_token().is_one_of_many(kinds) {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    /// Expects a token of the specified kind, failing with `error` otherwise.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Error) -> Result<Token, Error> {
        if self.check(expected_kind) {
            Ok(self.advance().clone())
        } else {
            Err(error)
        }
    }

    /// Opens a unary or grouping rule at the current token.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.nesting >= MAX_EXPR_DEPTH {
            return Err(too_deeply_nested(self.current_token()));
        }
        self.nesting += 1;
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// Fails when an expression built at `token` would nest deeper than
    /// [`MAX_EXPR_DEPTH`].
    pub fn check_depth(&self, depth: usize, token: &Token) -> Result<(), Error> {
        if depth > MAX_EXPR_DEPTH {
            Err(too_deeply_nested(token))
        } else {
            Ok(())
        }
    }

    /// Skips tokens until a likely statement boundary.
    ///
    /// Stops just after a `;` or just before a keyword that starts a
    /// statement. `parse` handles a single expression and does not call this;
    /// it is the recovery step for a parser that loops over statements.
    pub fn synchronize(&mut self) {
        let mut previous = self.advance().kind;

        while !self.is_at_end() {
            if previous == TokenKind::Semicolon {
                return;
            }

            if self.current_token_kind().starts_statement() {
                return;
            }

            previous = self.advance().kind;
        }
    }
}

fn too_deeply_nested(token: &Token) -> Error {
    Error::at_token(ErrorImpl::TooDeeplyNested { limit: MAX_EXPR_DEPTH }, token)
}

/// Parses a stream of tokens into one expression tree.
///
/// On a syntax error the error is reported to `diagnostics` and `None` is
/// returned; no partial tree escapes. Tokens after the first complete
/// expression are ignored.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: Vec<Token>, diagnostics: &mut Diagnostics) -> Option<Expr> {
    let mut parser = Parser::new(tokens);

    match parse_expr(&mut parser) {
        Ok(expr) => {
            if parser.has_tokens() {
                tracing::debug!(remaining = parser.remaining(), "ignoring tokens after expression");
            }
            Some(expr)
        }
        Err(error) => {
            diagnostics.report(error);
            None
        }
    }
}
