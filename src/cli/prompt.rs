//! Terminal prompts.
//!
//! Prompts are written to stderr so stdout stays clean for piped output.

use anyhow::{Result, bail};
use std::io::{self, BufRead, Write};

/// Line that ends multi-line input.
pub const END_MARKER: &str = "END";

/// Ask a yes/no question. Only an explicit `y`/`yes` confirms.
pub fn confirm(question: &str) -> Result<bool> {
    let answer = ask(&format!("{question} [y/N] "))?;
    let answer = answer.to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Ask for a single trimmed line.
pub fn ask(prompt: &str) -> Result<String> {
    eprint!("{prompt}");
    io::stderr().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("input closed");
    }
    Ok(input.trim().to_string())
}

/// Ask for multi-line text terminated by a line containing only `END`.
pub fn ask_multiline(prompt: &str) -> Result<String> {
    eprintln!("{prompt}");
    eprintln!("(multi-line input, finish with a line containing only {END_MARKER})");
    read_until_end(io::stdin().lock())
}

/// Collect lines from `reader` until the `END` marker or end of input.
pub fn read_until_end(reader: impl BufRead) -> Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim() == END_MARKER {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_until_end() {
        let input = "first line\n  second  \n END \nignored\n";
        let text = read_until_end(input.as_bytes()).unwrap();
        assert_eq!(text, "first line\n  second  ");
    }

    #[test]
    fn test_read_until_eof_without_marker() {
        let text = read_until_end("only\nlines".as_bytes()).unwrap();
        assert_eq!(text, "only\nlines");
    }
}
