//! Pool of detached cells keyed by reuse identifier.
//!
//! Cells leave the visible set through [`ReusePool::checkin`] and come back
//! through [`ReusePool::checkout`]. The pool imposes no size limit: the
//! visible set is bounded by the viewport, so growth is bounded by how many
//! cells of each identifier were ever visible at once.
//!
//! Check-in takes the cell by value, so a cell can sit in the pool at most
//! once.

use ribbon_core::collections::HashMap;
use ribbon_core::{CellId, TableError};

use super::cell::TableCell;

#[derive(Default)]
pub struct ReusePool {
    by_identifier: HashMap<String, Vec<TableCell>>,
}

impl ReusePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns a pooled cell registered under `identifier`.
    ///
    /// The returned cell's content is stale; callers must run
    /// [`TableCell::prepare_for_reuse`] before rebinding it.
    pub fn checkout(&mut self, identifier: &str) -> Option<TableCell> {
        let cell = self.by_identifier.get_mut(identifier)?.pop()?;
        log::trace!("reuse pool: checkout {} for {identifier:?}", cell.id());
        Some(cell)
    }

    /// Inserts a detached cell under its own reuse identifier.
    ///
    /// The cell is dropped when it is rejected.
    pub fn checkin(&mut self, cell: TableCell) -> Result<(), TableError> {
        if cell.is_attached() {
            return Err(TableError::InvalidState {
                reason: "cannot pool a cell that is still attached",
            });
        }
        let Some(identifier) = cell.reuse_identifier() else {
            return Err(TableError::InvalidState {
                reason: "cell has no reuse identifier",
            });
        };
        let identifier = identifier.to_owned();
        log::trace!("reuse pool: checkin {} under {identifier:?}", cell.id());
        self.by_identifier.entry(identifier).or_default().push(cell);
        Ok(())
    }

    /// Total number of pooled cells.
    pub fn len(&self) -> usize {
        self.by_identifier.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.values().all(Vec::is_empty)
    }

    /// Number of cells pooled under `identifier`.
    pub fn len_for(&self, identifier: &str) -> usize {
        self.by_identifier.get(identifier).map_or(0, Vec::len)
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.by_identifier
            .values()
            .flatten()
            .any(|cell| cell.id() == id)
    }

    /// Drops every pooled cell.
    pub fn clear(&mut self) {
        self.by_identifier.clear();
    }
}

impl std::fmt::Debug for ReusePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .by_identifier
            .iter()
            .map(|(identifier, cells)| (identifier.as_str(), cells.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("ReusePool")
            .field("pooled", &self.len())
            .field("by_identifier", &counts)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/reuse_pool_tests.rs"]
mod tests;
