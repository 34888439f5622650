//
// Line selection policies for `indent`
//
// A predicate looks at a single line, without its line break, and decides whether the prefix
// should be added to it. Any `Fn(&str) -> bool` works; the three below are the standard ones.
//

/// A borrowed line selection policy
pub type Predicate<'a> = &'a dyn Fn(&str) -> bool;

/// Selects every line
pub fn any(_line: &str) -> bool {
    true
}

/// Selects no line, which turns `indent` into the identity
pub fn none(_line: &str) -> bool {
    false
}

/// Selects lines with at least one non-whitespace character
///
/// This is the default policy of `indent`. Unlike blank detection in `dedent`, any Unicode
/// whitespace counts here, so a lone `\r` left over from a Windows line ending is not selected.
pub fn non_blank(line: &str) -> bool {
    !line.trim().is_empty()
}
