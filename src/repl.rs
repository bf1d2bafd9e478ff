/// Printed once when an interactive session starts.
pub const BANNER: &str = "Simple calculator REPL. Type 'quit' or 'exit' to leave.";

/// What a line typed into the calculator asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Nothing but whitespace; ignored.
    Empty,
    /// `quit` or `exit`, in any case.
    Quit,
    /// Anything else, trimmed, to be evaluated.
    Expression(&'a str),
}

/// Classifies one input line.
///
/// # Example
/// ```
/// use reckon::repl::{Line, classify_line};
///
/// assert_eq!(classify_line("  QUIT "), Line::Quit);
/// assert_eq!(classify_line(" 1 + 2\n"), Line::Expression("1 + 2"));
/// ```
#[must_use]
pub fn classify_line(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        Line::Empty
    } else if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        Line::Quit
    } else {
        Line::Expression(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(classify_line(""), Line::Empty);
        assert_eq!(classify_line("   "), Line::Empty);
        assert_eq!(classify_line("\t\r\n"), Line::Empty);
    }

    #[test]
    fn quit_words_are_case_insensitive() {
        assert_eq!(classify_line("quit"), Line::Quit);
        assert_eq!(classify_line("  QUIT "), Line::Quit);
        assert_eq!(classify_line("Exit"), Line::Quit);
        assert_eq!(classify_line("quit now"), Line::Expression("quit now"));
    }
}
