use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from an input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Original text of the token, trimmed of surrounding whitespace
    pub lexeme: String,
    /// Column number where the token starts (1-indexed, in characters)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(lexeme: impl Into<String>, column: usize) -> Self {
        Token {
            lexeme: lexeme.into(),
            column,
        }
    }

    /// Classifies the token by its spelling
    pub fn kind(&self) -> TokenKind {
        TokenKind::of(&self.lexeme)
    }

    /// The token text
    pub fn as_str(&self) -> &str {
        &self.lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}

/// Lexical category of a token, derived only from its spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// `~@` or one of the single-character specials `[]{}()'` `` ` `` `~^@`
    Special,
    /// Double-quoted string, possibly unterminated
    String,
    /// `;` line comment
    Comment,
    /// Bare word: symbols, numbers, keywords
    Atom,
}

impl TokenKind {
    /// Classifies a lexeme
    pub fn of(lexeme: &str) -> Self {
        match lexeme.chars().next() {
            Some('"') => TokenKind::String,
            Some(';') => TokenKind::Comment,
            Some('~') if lexeme == "~" || lexeme == "~@" => TokenKind::Special,
            Some('[' | ']' | '{' | '}' | '(' | ')' | '\'' | '`' | '^' | '@') if lexeme.len() == 1 => {
                TokenKind::Special
            }
            _ => TokenKind::Atom,
        }
    }
}
