//! Line classification helpers shared by the list scanner.

/// Number of leading spaces that make a line an indented continuation.
pub const INDENT_SPACES: usize = 4;

/// Number of leading spaces that make a continuation line a code line.
pub const CODE_INDENT_SPACES: usize = 8;

pub fn is_space_or_tab(ch: u8) -> bool {
    matches!(ch, 9 | 32)
}

/// Whether the line has nothing but whitespace in it.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether the line begins with a tab or at least four spaces.
pub fn is_indented(line: &str) -> bool {
    line.starts_with('\t') || leading_spaces(line) >= INDENT_SPACES
}

/// Whether the line is indented one level beyond a list continuation, i.e.
/// begins with two tabs or eight spaces.
pub fn is_code_line(line: &str) -> bool {
    line.starts_with("\t\t") || leading_spaces(line) >= CODE_INDENT_SPACES
}

/// Whether the line, once left-trimmed, starts with a `>` marker.
pub fn is_blockquote_line(line: &str) -> bool {
    ltrim(line).starts_with('>')
}

pub fn ltrim(line: &str) -> &str {
    line.trim_start()
}

/// Strips the `>` marker from a blockquote line. Anything following the
/// marker, including a separating space, is kept.
pub fn strip_blockquote_marker(line: &str) -> &str {
    let trimmed = ltrim(line);
    trimmed.strip_prefix('>').unwrap_or(trimmed)
}

fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Counts up to `max` leading spaces, returning `None` if there are more.
pub fn marker_indent(line: &str, max: usize) -> Option<usize> {
    let n = leading_spaces(line);
    if n > max || line.as_bytes().get(n) == Some(&b'\t') {
        None
    } else {
        Some(n)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank("   \t "));
        assert!(!is_blank("  a"));
    }

    #[test]
    fn indentation() {
        assert!(is_indented("\tx"));
        assert!(is_indented("    x"));
        assert!(!is_indented("   x"));
        assert!(!is_indented(""));
    }

    #[test]
    fn code_lines() {
        assert!(is_code_line("\t\tx"));
        assert!(is_code_line("        x"));
        assert!(!is_code_line("\tx"));
        assert!(!is_code_line("       x"));
    }

    #[test]
    fn blockquotes() {
        assert!(is_blockquote_line("    > quoted"));
        assert!(!is_blockquote_line("    quoted >"));
        assert_eq!(strip_blockquote_marker("    > quoted"), " quoted");
        assert_eq!(strip_blockquote_marker("\t>x"), "x");
    }

    #[test]
    fn marker_indents() {
        assert_eq!(marker_indent("- a", 3), Some(0));
        assert_eq!(marker_indent("   - a", 3), Some(3));
        assert_eq!(marker_indent("    - a", 3), None);
        assert_eq!(marker_indent("  \t- a", 3), None);
    }
}
