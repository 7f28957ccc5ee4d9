//! Line-oriented front end: reads one form per input line and prints it back.
//!
//! Run with: `echo '(+ 1 (* 2 3))' | cargo run --bin mal-read`

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mal_reader::{Node, Reader, MAX_DEPTH};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mal-read")]
#[command(about = "Read Lisp forms line by line and print their canonical text", long_about = None)]
struct Cli {
    /// Read lines from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format for each parsed form
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip blank lines instead of reporting them
    #[arg(long)]
    skip_blank: bool,

    /// Maximum list nesting per line
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Canonical parenthesized text
    Text,
    /// One JSON document per line
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(input, &mut out, &cli)
}

fn run(mut input: impl BufRead, out: &mut impl Write, cli: &Cli) -> Result<()> {
    let mut failed = 0usize;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!(line = line_no + 1, error = %e, "Failed to read input");
                return Err(e).context("Failed to read input");
            }
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if let std::borrow::Cow::Owned(_) = line {
            tracing::warn!(line = line_no, "Invalid UTF-8 replaced");
        }

        if cli.skip_blank && line.trim().is_empty() {
            continue;
        }

        match read_line(&line, cli.max_depth) {
            Ok(node) => {
                let rendered = render(&node, cli.format)?;
                writeln!(out, "{}", rendered).context("Failed to write output")?;
            }
            Err(e) => {
                failed += 1;
                tracing::error!(
                    line = line_no,
                    severity = ?e.classify(),
                    error = %e,
                    "Failed to parse line"
                );
            }
        }
    }

    tracing::debug!(failed, "input finished");
    Ok(())
}

fn read_line(line: &str, max_depth: usize) -> mal_reader::Result<Node> {
    let mut reader = Reader::new(line)?.with_max_depth(max_depth);
    reader.parse_ast()
}

fn render(node: &Node, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(node.to_string()),
        OutputFormat::Json => serde_json::to_string(node).context("Failed to serialize node"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(format: OutputFormat, skip_blank: bool) -> Cli {
        Cli {
            input: None,
            format,
            skip_blank,
            max_depth: MAX_DEPTH,
        }
    }

    fn run_str(input: &str, cli: &Cli) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, cli).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_failed_lines_are_skipped() {
        let output = run_str(
            "(+ 1 2)\n(+ 1\n  ( a ,b )  \n",
            &cli(OutputFormat::Text, false),
        );
        assert_eq!(output, "(+ 1 2)\n(a b)\n");
    }

    #[test]
    fn test_blank_lines() {
        let output = run_str("\nx\n\n", &cli(OutputFormat::Text, true));
        assert_eq!(output, "x\n");
    }

    #[test]
    fn test_json_output() {
        let output = run_str("(a \"b\")\n", &cli(OutputFormat::Json, false));
        assert_eq!(output, "{\"List\":[{\"Symbol\":\"a\"},{\"Symbol\":\"\\\"b\\\"\"}]}\n");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_input() {
        let mut out = Vec::new();
        run(
            &b"(a)\n\xff\xfe\n(b \xff)\r\n(c)\n"[..],
            &mut out,
            &cli(OutputFormat::Text, false),
        )
        .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "(a)\n\u{FFFD}\u{FFFD}\n(b \u{FFFD})\n(c)\n");
    }

    #[test]
    fn test_deeply_nested_line_does_not_stop_input() {
        let input = format!("(a)\n{}\n(b)\n", "(".repeat(100_000));
        let output = run_str(&input, &cli(OutputFormat::Text, false));
        assert_eq!(output, "(a)\n(b)\n");
    }

    #[test]
    fn test_last_line_without_newline() {
        let output = run_str("(a)\n(b)", &cli(OutputFormat::Text, false));
        assert_eq!(output, "(a)\n(b)\n");
    }
}
