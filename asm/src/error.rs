use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("A symbol can't start with a digit")]
    DigitSymbol,

    #[error("Invalid character inside a symbol: `{0}`")]
    SymbolChar(char),

    #[error("Invalid character inside a constant: `{0}`")]
    ConstantChar(char),

    #[error("Constant exceeds the 15-bit address range: {0}")]
    ConstantRange(String),

    #[error("Expected a symbol")]
    ExpectedSymbol,

    #[error("Unmatched `(`: expected `)` to close the label")]
    UnclosedLabel,

    #[error("Invalid dest inside c-instruction: `{0}`")]
    InvalidDest(String),

    #[error("Invalid comp inside c-instruction: `{0}`")]
    InvalidComp(String),

    #[error("Invalid jump inside c-instruction: `{0}`")]
    InvalidJump(String),

    #[error("Invalid c-instruction `{0}`: it should have either a dest or a jump")]
    MissingEffect(String),

    #[error("No memory address left for variable `{0}`")]
    OutOfAddresses(String),
}

/// A parse failure with its position in the source. `line` is 1-based,
/// `col` is the 0-based character offset within that line. The excerpt
/// is rendered at construction so the error stays self-contained.
#[derive(Error, Debug, Clone)]
#[error("{kind}\n  --> {line}:{col}\n{excerpt}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub line: usize,
    pub col: usize,
    pub excerpt: String,
}

impl ParseError {
    pub fn new(kind: ErrorKind, line: usize, col: usize, source: &str) -> Self {
        ParseError {
            kind,
            line,
            col,
            excerpt: excerpt(source, line),
        }
    }

    /// Print the error with diagnostic context in compiler style.
    pub fn print_diag(&self, path: &str) {
        cprintln!("<red,bold>error</>: {}", self.kind);
        cprintln!("     <blue>--></> <underline>{}:{}:{}</>", path, self.line, self.col);
        cprintln!("      <blue>|</>");
        for line in self.excerpt.lines() {
            println!(" {}", line);
        }
        cprintln!("      <blue>|</>");
    }
}

/// Up to three lines of context on each side, failing line marked.
fn excerpt(source: &str, line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let first = line.saturating_sub(3).max(1);
    let last = (line + 3).min(lines.len().max(line));
    let mut out = String::new();
    for no in first..=last {
        let marker = if no == line { '>' } else { ' ' };
        let text = lines.get(no - 1).copied().unwrap_or("");
        out.push_str(&format!("{} {:>4} | {}\n", marker, no, text));
    }
    out
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot encode instruction {index}: {reason}")]
pub struct EncodeError {
    pub index: usize,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_marks_failing_line() {
        let src = "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight";
        let err = ParseError::new(ErrorKind::ExpectedSymbol, 5, 0, src);
        let lines: Vec<&str> = err.excerpt.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("two"));
        assert!(lines[3].starts_with('>'));
        assert!(lines[3].contains("five"));
        assert!(lines[6].contains("eight"));
    }

    #[test]
    fn excerpt_clamps_at_edges() {
        let err = ParseError::new(ErrorKind::ExpectedSymbol, 1, 0, "only");
        let lines: Vec<&str> = err.excerpt.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('>'));
    }
}
