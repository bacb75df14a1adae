//! Data source contract for [`HorizontalTableView`](super::HorizontalTableView).

use smallvec::SmallVec;

use ribbon_core::collections::HashSet;
use ribbon_core::{CellId, IndexPath};
use ribbon_foundation::lazy::{ReusePool, TableCell};

/// Supplies the shape of the table and the cell for each visible column.
///
/// The table holds its data source weakly and asks it questions only during
/// `reload_data` and while columns scroll into view.
pub trait TableDataSource {
    fn number_of_sections(&self) -> usize;

    fn number_of_columns(&self, section: usize) -> usize;

    /// Returns the cell to display at `index_path`.
    ///
    /// Implementations should first try
    /// [`CellProvider::dequeue_reusable_cell`] and only construct a new cell
    /// when nothing is pooled under the wanted identifier.
    fn cell_for_column(&self, cells: &mut CellProvider<'_>, index_path: IndexPath) -> TableCell;
}

/// Lifetime counters for cells that reached the visible set.
///
/// A dequeued cell counts as reused only once it is attached. Cells handed
/// out by a dequeue wait in `handed_out` until then.
#[derive(Debug, Default)]
pub(crate) struct ReuseCounters {
    pub(crate) created: usize,
    pub(crate) reused: usize,
    pub(crate) handed_out: HashSet<CellId>,
}

impl ReuseCounters {
    /// Counts a cell entering the visible set as either created or reused.
    pub(crate) fn record_attach(&mut self, id: CellId) {
        if self.handed_out.remove(&id) {
            self.reused += 1;
        } else {
            self.created += 1;
        }
    }
}

/// Dequeues pooled cells while the data source builds a column.
pub struct CellProvider<'a> {
    pool: &'a mut ReusePool,
    counters: &'a mut ReuseCounters,
    dequeued: SmallVec<[CellId; 2]>,
}

impl<'a> CellProvider<'a> {
    pub(crate) fn new(pool: &'a mut ReusePool, counters: &'a mut ReuseCounters) -> Self {
        Self {
            pool,
            counters,
            dequeued: SmallVec::new(),
        }
    }

    /// Returns a pooled cell registered under `identifier`, already reset
    /// with `prepare_for_reuse`, or `None` when the pool has none.
    pub fn dequeue_reusable_cell(&mut self, identifier: &str) -> Option<TableCell> {
        let cell = dequeue_prepared(self.pool, self.counters, identifier)?;
        self.dequeued.push(cell.id());
        Some(cell)
    }

    /// Ids of the cells dequeued through this provider.
    pub(crate) fn into_dequeued(self) -> SmallVec<[CellId; 2]> {
        self.dequeued
    }
}

pub(crate) fn dequeue_prepared(
    pool: &mut ReusePool,
    counters: &mut ReuseCounters,
    identifier: &str,
) -> Option<TableCell> {
    let mut cell = pool.checkout(identifier)?;
    cell.prepare_for_reuse();
    counters.handed_out.insert(cell.id());
    Some(cell)
}
