//! Lexical analysis
//!
//! Converts one line of source text into a sequence of tokens using a single
//! regular expression.

mod token;
mod tokenizer;

pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
