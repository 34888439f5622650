use crate::dedenting::dedent;
use crate::indenting::indent;
use crate::predicates::Predicate;

/// Method-style access to `dedent` and `indent`
pub trait Reindent {
    /// See [`dedent`](crate::dedent)
    fn dedent(&self) -> String;

    /// Indents every non-blank line, see [`indent`](crate::indent)
    fn indent(&self, prefix: &str) -> String;

    /// Indents the lines selected by `predicate`, see [`indent`](crate::indent)
    fn indent_where(&self, prefix: &str, predicate: Predicate) -> String;
}

impl Reindent for str {
    fn dedent(&self) -> String {
        dedent(self)
    }

    fn indent(&self, prefix: &str) -> String {
        indent(self, prefix, None)
    }

    fn indent_where(&self, prefix: &str, predicate: Predicate) -> String {
        indent(self, prefix, Some(predicate))
    }
}

impl Reindent for String {
    fn dedent(&self) -> String {
        self.as_str().dedent()
    }

    fn indent(&self, prefix: &str) -> String {
        self.as_str().indent(prefix)
    }

    fn indent_where(&self, prefix: &str, predicate: Predicate) -> String {
        self.as_str().indent_where(prefix, predicate)
    }
}
