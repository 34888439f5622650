//
// Removal of the common leading whitespace from a block of text.
//
// Tabs and spaces are both whitespace, but they are never equal: "  hello" and "\thello" have no
// common margin at all. Lines that contain only spaces and tabs take no part in finding the margin.
//

use tracing::{debug, trace};

use crate::util::{common_prefix_len, is_blank, leading_whitespace};

/// Finds the longest run of spaces and tabs that starts every non-blank line
///
/// The returned margin borrows from `text`. It is empty if there are no non-blank lines or if the
/// lines don't share any leading whitespace.
///
pub fn find_margin(text: &str) -> &str {
    // None until the first non-blank line has been seen, which keeps "no lines yet" apart from a
    // genuinely empty margin
    let mut margin: Option<&str> = None;

    for (index, line) in text.split('\n').enumerate() {
        if is_blank(line) {
            trace!(index, line, "skipping blank line");
            continue;
        }

        let candidate = leading_whitespace(line);

        let next = match margin {
            None => candidate,

            // At least as deeply indented as the margin, nothing changes
            Some(current) if candidate.starts_with(current) => current,

            // Consistent with the margin but shallower, the margin shrinks to match
            Some(current) if current.starts_with(candidate) => candidate,

            // Diverges somewhere, e.g. a tab where the margin has a space
            Some(current) => &current[..common_prefix_len(current, candidate)],
        };

        if margin != Some(next) {
            trace!(index, candidate, margin = next, "margin updated");
        }

        // The margin never grows again once it's empty
        if next.is_empty() {
            return "";
        }

        margin = Some(next);
    }

    margin.unwrap_or("")
}

/// Removes any common leading whitespace from every line in `text`
///
/// Can be used to line up multi-line strings with the left edge, while still writing them
/// indented in the source code. When a margin is removed, lines consisting solely of spaces and
/// tabs are emptied as well. When there is no margin the text is returned exactly as given,
/// whitespace-only lines included.
///
pub fn dedent(text: &str) -> String {
    let margin = find_margin(text);

    debug!(margin, "found margin");

    if margin.is_empty() {
        return text.to_string();
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect();

    lines.join("\n")
}
