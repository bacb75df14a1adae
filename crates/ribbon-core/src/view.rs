//! View identity and the capability set every hosted view implements.
//!
//! The table never depends on concrete view types. Cells, headers and
//! footers are stored as `Box<dyn ViewContent>` and recovered by callers
//! through [`ViewContent::downcast_ref`] / [`ViewContent::downcast_mut`].

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CELL_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a cell for as long as the cell object lives.
///
/// Identity survives trips through the reuse pool: a recycled cell keeps the
/// id it was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u64);

impl CellId {
    /// Allocates a fresh, process-unique id.
    pub fn next() -> Self {
        Self(NEXT_CELL_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}

/// Key under which the host viewport tracks a placed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Cell(CellId),
    Header(usize),
    Footer(usize),
}

/// Object-safe access to `Any` for trait objects.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Content hosted by the table: a cell body, a header or a footer.
pub trait ViewContent: AsAny {
    /// Resets display state before the view is rebound to another column.
    ///
    /// Invoked by the table when a pooled cell is dequeued, never by the pool.
    fn prepare_for_reuse(&mut self) {}
}

impl dyn ViewContent {
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn ViewContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewContent")
    }
}
