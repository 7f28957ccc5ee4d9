use super::token::Token;
use crate::error::{Error, Result};
use regex::Regex;

/// Token pattern, alternatives in priority order: `~@`, single-character
/// specials, double-quoted strings (closing quote optional), `;` comments,
/// bare words. The leading `[\s,]*` is a separator and is not captured.
const TOKEN_PATTERN: &str = r#"[\s,]*(~@|[\[\]{}()'`~^@]|"(?:\\.|[^\\"])*"?|;.*|[^\s\[\]{}('"`,;)]*)"#;

lazy_static::lazy_static! {
    static ref TOKEN_REGEX: std::result::Result<Regex, regex::Error> = Regex::new(TOKEN_PATTERN);
}

/// Splits one line of source text into tokens, in source order.
///
/// Separators (whitespace and commas) are discarded and every token is
/// trimmed. Tokens that are empty after trimming are dropped, so blank input
/// yields an empty vector. Comments are returned as tokens; skipping them is
/// up to the caller.
///
/// Fails only with [`Error::PatternCompile`], which no input can trigger.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let regex = TOKEN_REGEX
        .as_ref()
        .map_err(|e| Error::PatternCompile(e.to_string()))?;

    let mut tokens = Vec::new();
    // `chars_before` is the character count of `line[..scanned]`
    let mut scanned = 0;
    let mut chars_before = 0;
    for captures in regex.captures_iter(line) {
        let Some(matched) = captures.get(1) else {
            continue;
        };

        let text = matched.as_str();
        let lexeme = text.trim();
        if lexeme.is_empty() {
            continue;
        }

        let leading = text.len() - text.trim_start().len();
        let start = matched.start() + leading;
        chars_before += line[scanned..start].chars().count();
        scanned = start;
        let column = chars_before + 1;

        tracing::trace!(lexeme, column, "token");
        tokens.push(Token::new(lexeme, column));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn lexemes(line: &str) -> Vec<String> {
        tokenize(line)
            .unwrap()
            .into_iter()
            .map(|t| t.lexeme)
            .collect()
    }

    #[test]
    fn test_pattern_compiles() {
        assert!(TOKEN_REGEX.is_ok());
    }

    #[test]
    fn test_simple_sexpr() {
        assert_eq!(lexemes("(+ 1 2)"), vec!["(", "+", "1", "2", ")"]);
    }

    #[test]
    fn test_commas_are_separators() {
        assert_eq!(lexemes("[1, 2,,3]"), vec!["[", "1", "2", "3", "]"]);
    }

    #[test]
    fn test_specials() {
        assert_eq!(
            lexemes("~@x ~y 'a `b ^m @d {}"),
            vec!["~@", "x", "~", "y", "'", "a", "`", "b", "^", "m", "@", "d", "{", "}"]
        );
    }

    #[test]
    fn test_escaped_string_is_one_token() {
        let tokens = lexemes(r#""this is a \"test\"""#);
        assert_eq!(tokens, vec![r#""this is a \"test\"""#]);
    }

    #[test]
    fn test_unterminated_string_is_tokenized() {
        assert_eq!(lexemes(r#"(str "abc"#), vec!["(", "str", "\"abc"]);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let tokens = tokenize("(+ 1 2) ; add them").unwrap();
        let last = tokens.last().unwrap();
        assert_eq!(last.lexeme, "; add them");
        assert_eq!(last.kind(), TokenKind::Comment);
    }

    #[test]
    fn test_empty_tokens_dropped() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
        assert!(tokenize(" , ,\t").unwrap().is_empty());
        assert_eq!(lexemes("(a)  "), vec!["(", "a", ")"]);
        assert_eq!(lexemes("()"), vec!["(", ")"]);
    }

    #[test]
    fn test_columns() {
        let tokens = tokenize("  (foo \"bar\")").unwrap();
        let columns: Vec<usize> = tokens.iter().map(|t| t.column).collect();
        assert_eq!(columns, vec![3, 4, 8, 13]);
    }

    #[test]
    fn test_columns_on_long_line() {
        let line = "(é ".repeat(2_000);
        let tokens = tokenize(&line).unwrap();
        assert_eq!(tokens.len(), 4_000);
        for (i, pair) in tokens.chunks(2).enumerate() {
            assert_eq!(pair[0].column, i * 3 + 1);
            assert_eq!(pair[1].column, i * 3 + 2);
        }
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = tokenize("(λ x)").unwrap();
        assert_eq!(tokens[2].lexeme, "x");
        assert_eq!(tokens[2].column, 4);
    }
}
