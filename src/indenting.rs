use tracing::trace;

use crate::predicates::{non_blank, Predicate};

/// Adds `prefix` to the beginning of selected lines in `text`
///
/// Lines are split on `\n` only and the line breaks are kept as they are. If `predicate` is given,
/// the prefix is only added to lines where it returns true. It is called exactly once per line, in
/// order. Without a predicate the prefix goes on every line that isn't empty or whitespace-only.
///
pub fn indent(text: &str, prefix: &str, predicate: Option<Predicate>) -> String {
    let predicate: Predicate = predicate.unwrap_or(&non_blank);

    let mut output = String::with_capacity(text.len());

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            output.push('\n');
        }

        if predicate(line) {
            trace!(index, line, "prefixing line");
            output.push_str(prefix);
        }

        output.push_str(line);
    }

    output
}
