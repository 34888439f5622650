//
// Reindentation of multi-line text: stripping the margin shared by all lines, and prefixing
// selected lines.
//

#[macro_use]
extern crate lazy_static;

pub mod dedenting;
pub mod ext;
pub mod indenting;
pub mod predicates;
mod util;

pub use dedenting::{dedent, find_margin};
pub use ext::Reindent;
pub use indenting::indent;
pub use predicates::Predicate;
