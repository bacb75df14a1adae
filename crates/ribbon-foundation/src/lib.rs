//! Virtualization core for the Ribbon horizontal table view.

pub mod lazy;

pub use ribbon_core::{CellId, IndexPath, TableError, ViewContent};

pub mod prelude {
    pub use crate::lazy::{
        LayoutDefaults, LayoutModel, ReusePool, SectionMetrics, TableCell, VisibilityTracker,
        VisibilityUpdate, VisibleRange,
    };
}
