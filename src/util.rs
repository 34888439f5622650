use regex::Regex;

lazy_static! {
    /// The run of spaces and tabs at the start of a line. Always matches, possibly empty.
    static ref LEADING_WHITESPACE: Regex = Regex::new(r"^[ \t]*").unwrap();
}

/// Returns the leading whitespace run of a line
///
/// Only spaces and tabs count. Other whitespace, such as a trailing `\r` from a Windows line
/// ending, ends the run.
pub fn leading_whitespace(line: &str) -> &str {
    LEADING_WHITESPACE.find(line).map_or("", |m| m.as_str())
}

/// True if the line is empty or contains nothing but spaces and tabs
pub fn is_blank(line: &str) -> bool {
    leading_whitespace(line).len() == line.len()
}

/// Length in bytes of the longest common prefix of two strings
///
/// Scans both strings index by index and stops at the first mismatch, so it never looks past the
/// end of the shorter one. The result always lands on a char boundary in both strings.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    let (a_bytes, b_bytes) = (a.as_bytes(), b.as_bytes());
    let shorter = a_bytes.len().min(b_bytes.len());

    let mut i = 0;

    while i < shorter && a_bytes[i] == b_bytes[i] {
        i += 1;
    }

    // A mismatch in the middle of a multibyte character leaves us inside it
    while !a.is_char_boundary(i) {
        i -= 1;
    }

    i
}
