use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::value::value::Value;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("class", TokenKind::Class);
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("fun", TokenKind::Fun);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("nil", TokenKind::Nil);
        map.insert("or", TokenKind::Or);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("super", TokenKind::Super);
        map.insert("this", TokenKind::This);
        map.insert("true", TokenKind::True);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,         // !
    BangEqual,    // !=
    Equal,        // =
    EqualEqual,   // ==
    Greater,      // >
    GreaterEqual, // >=
    Less,         // <
    LessEqual,    // <=

    // Literals
    Identifier,
    String,
    Number,

    // Reserved
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    EOF,
}

impl TokenKind {
    /// Keywords that begin a statement. The parser resynchronises on these.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Value>,
    pub line: usize,
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The lexeme, or `EOF` for the end-of-input token which has none.
    pub fn describe(&self) -> &str {
        if self.kind == TokenKind::EOF {
            "EOF"
        } else {
            &self.lexeme
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = format!("{}", self.kind).to_uppercase();
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", kind, self.lexeme, literal),
            None if self.lexeme.is_empty() => write!(f, "{}", kind),
            None => write!(f, "{} {}", kind, self.lexeme),
        }
    }
}
