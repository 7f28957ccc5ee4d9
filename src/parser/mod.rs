//! Reader
//!
//! Parses the tokens of one line into a tree of symbols and lists by
//! recursive descent.

mod ast;
mod reader;

pub use ast::Node;
pub use reader::{read_str, Reader, MAX_DEPTH};
