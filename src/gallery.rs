//! Fixed example expressions for quick testing.

use crate::operands::Operands;
use crate::validate::{Rejection, check_expression};

/// Example inputs in display order, a mix of valid and rejected ones.
pub const EXAMPLES: [&str; 10] = [
    "2 + 3", "4 + 5", "3 + 3", "1 + 0", "0 + 6", "9 + 0", "7 + 3", "0 + 0", "12 + 1", "2 * 3",
];

/// One gallery entry with its eagerly computed outcome.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GalleryEntry {
    /// The example text, as it would be typed.
    pub expression: &'static str,
    /// What parsing plus validation yields for it.
    pub outcome: Result<Operands, Rejection>,
}

impl GalleryEntry {
    /// Whether the example can be run.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// All examples, each annotated with its validation outcome.
pub fn gallery() -> Vec<GalleryEntry> {
    EXAMPLES
        .iter()
        .map(|&expression| GalleryEntry {
            expression,
            outcome: check_expression(expression),
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/gallery.rs"]
mod tests;
