//! Addressing for columns in a sectioned horizontal table.

use std::fmt;

/// Address of a column inside a section.
///
/// Index paths order lexicographically by section and then by column, so a
/// sorted collection of index paths walks the table from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    section: usize,
    column: usize,
}

impl IndexPath {
    #[inline]
    pub const fn new(section: usize, column: usize) -> Self {
        Self { section, column }
    }

    #[inline]
    pub const fn section(self) -> usize {
        self.section
    }

    #[inline]
    pub const fn column(self) -> usize {
        self.column
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, column): (usize, usize)) -> Self {
        Self::new(section, column)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.column)
    }
}

#[cfg(test)]
#[path = "tests/index_path_tests.rs"]
mod tests;
