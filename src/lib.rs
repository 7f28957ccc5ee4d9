//! # mal-reader - A Reader for a Minimal Lisp Syntax
//!
//! Turns one line of Lisp-style source text into a tree of symbols and
//! nested lists, and prints that tree back in canonical form.
//!
//! ## Quick Start
//!
//! ```rust
//! use mal_reader::{read_str, Node};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let node = read_str("(+ 1 (* 2 3))")?;
//!
//! assert_eq!(node.children().len(), 3);
//! assert_eq!(node.children()[0], Node::symbol("+"));
//! assert_eq!(node.to_string(), "(+ 1 (* 2 3))");
//! # Ok(())
//! # }
//! ```
//!
//! ### Step by Step
//!
//! ```rust
//! use mal_reader::{tokenize, Reader};
//!
//! # fn main() -> mal_reader::Result<()> {
//! let tokens = tokenize("(list, \"a \\\"b\\\"\" 1.5)")?;
//! let lexemes: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
//! assert_eq!(lexemes, ["(", "list", "\"a \\\"b\\\"\"", "1.5", ")"]);
//!
//! let mut reader = Reader::new("(list, \"a\" 1.5)")?;
//! let node = reader.parse_ast()?;
//! assert_eq!(node.to_string(), "(list \"a\" 1.5)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Line → tokenize → Tokens → Reader → Node → Display
//! ```
//!
//! - [`tokenize`] - splits a line with a single regular expression
//! - [`Reader`] - recursive descent over the tokens of one line
//! - [`Node`] - symbol or list; `Display` reproduces the canonical text
//!
//! ## Error Handling
//!
//! ```rust
//! use mal_reader::{read_str, ErrorSeverity};
//!
//! let err = read_str("(+ 1 2").unwrap_err();
//! assert!(err.is_unexpected_token());
//! assert_eq!(err.classify(), ErrorSeverity::Recoverable);
//! ```
//!
//! Evaluation is not part of this crate.

/// Version of the reader
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{read_str, Node, Reader, MAX_DEPTH};
