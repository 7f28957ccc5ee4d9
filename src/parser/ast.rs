use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the syntax tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// One token's literal text, verbatim (quotes included for strings)
    Symbol(String),
    /// Parenthesized form: `(a b c)`
    List(Vec<Node>),
}

impl Node {
    /// Creates a symbol node
    pub fn symbol(text: impl Into<String>) -> Self {
        Node::Symbol(text.into())
    }

    /// Creates a list node
    pub fn list(children: Vec<Node>) -> Self {
        Node::List(children)
    }

    /// Children of a list; empty for a symbol
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Symbol(_) => &[],
            Node::List(children) => children,
        }
    }

    /// The wrapped text if this is a symbol
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Node::Symbol(text) => Some(text),
            Node::List(_) => None,
        }
    }

    /// Whether this node is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Whether two trees have the same node kinds, child counts and order.
    /// Symbol text is not compared.
    pub fn same_shape(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Symbol(_), Node::Symbol(_)) => true,
            (Node::List(a), Node::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Symbol(text) => f.write_str(text),
            Node::List(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
        }
    }
}
