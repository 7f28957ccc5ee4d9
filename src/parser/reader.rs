use super::ast::Node;
use crate::error::{Error, Result};
use crate::lexer::{tokenize, Token, TokenKind};

/// Default limit on list nesting for one line
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent reader over the tokens of one line
///
/// The cursor starts before the first token; the first [`Reader::advance`]
/// lands on token 0. A reader is meant for a single parse and is not reused
/// across lines.
pub struct Reader {
    tokens: Vec<Token>,
    /// Number of tokens consumed; the cursor sits on `tokens[consumed - 1]`
    consumed: usize,
    /// Column reported for errors at end of input
    end_column: usize,
    /// Lists currently open
    depth: usize,
    max_depth: usize,
}

impl Reader {
    /// Tokenizes `line` and creates a reader positioned before the first token.
    /// Comment tokens are dropped.
    pub fn new(line: &str) -> Result<Self> {
        let tokens = tokenize(line).map_err(|e| Error::Tokenize {
            source: Box::new(e),
        })?;

        Ok(Self::from_tokens(
            tokens
                .into_iter()
                .filter(|t| t.kind() != TokenKind::Comment)
                .collect(),
            line.chars().count() + 1,
        ))
    }

    /// Creates a reader over already tokenized input
    pub fn from_tokens(tokens: Vec<Token>, end_column: usize) -> Self {
        Reader {
            tokens,
            consumed: 0,
            end_column,
            depth: 0,
            max_depth: MAX_DEPTH,
        }
    }

    /// Sets the nesting limit; a list opened beyond it fails with
    /// [`Error::NestingTooDeep`]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The token after the cursor, or `""` at end of input
    pub fn peek_next_token(&self) -> &str {
        self.tokens
            .get(self.consumed)
            .map(Token::as_str)
            .unwrap_or("")
    }

    /// Moves the cursor forward one token. Returns `false` once the cursor
    /// is past the last token.
    pub fn advance(&mut self) -> bool {
        if self.consumed <= self.tokens.len() {
            self.consumed += 1;
        }
        self.consumed <= self.tokens.len()
    }

    /// The token under the cursor, or `""` if the cursor is not on a token
    pub fn current_token(&self) -> &str {
        self.current().map(Token::as_str).unwrap_or("")
    }

    /// Whether every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.consumed >= self.tokens.len()
    }

    /// Parses one form starting at the next token
    pub fn parse_ast(&mut self) -> Result<Node> {
        if self.peek_next_token() == "(" {
            self.parse_list().map_err(|e| e.context("failed to parse list"))
        } else {
            self.parse_symbol()
                .map_err(|e| e.context("failed to parse symbol"))
        }
    }

    /// Parses `( form* )`
    pub fn parse_list(&mut self) -> Result<Node> {
        if !self.advance() {
            return Err(Error::unexpected_eof("'('", self.end_column));
        }
        if self.current_token() != "(" {
            return Err(self.unexpected_current("'('"));
        }

        if self.depth >= self.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.max_depth,
                column: self.current().map_or(self.end_column, |t| t.column),
            });
        }

        self.depth += 1;
        let children = self.parse_list_elements();
        self.depth -= 1;

        let children = children?;
        tracing::trace!(len = children.len(), "list");
        Ok(Node::List(children))
    }

    fn parse_list_elements(&mut self) -> Result<Vec<Node>> {
        let mut children = Vec::new();
        loop {
            match self.peek_next_token() {
                ")" => {
                    self.advance();
                    break;
                }
                "" => return Err(Error::unexpected_eof("')'", self.end_column)),
                _ => {
                    let child = self
                        .parse_ast()
                        .map_err(|e| e.context("failed to parse list element"))?;
                    children.push(child);
                }
            }
        }

        Ok(children)
    }

    /// Parses a single token as a symbol
    pub fn parse_symbol(&mut self) -> Result<Node> {
        if !self.advance() {
            return Err(Error::unexpected_eof("symbol token", self.end_column));
        }

        tracing::trace!(symbol = self.current_token(), "symbol");
        Ok(Node::Symbol(self.current_token().to_string()))
    }

    fn current(&self) -> Option<&Token> {
        self.consumed
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    fn unexpected_current(&self, expected: &str) -> Error {
        match self.current() {
            Some(token) => Error::UnexpectedToken {
                expected: expected.to_string(),
                got: format!("'{}'", token.lexeme),
                column: token.column,
            },
            None => Error::unexpected_eof(expected, self.end_column),
        }
    }
}

/// Reads one line into a tree
pub fn read_str(line: &str) -> Result<Node> {
    let mut reader = Reader::new(line)?;
    let node = reader.parse_ast()?;
    if !reader.is_exhausted() {
        tracing::debug!(
            next = reader.peek_next_token(),
            "ignoring tokens after the first form"
        );
    }
    Ok(node)
}
