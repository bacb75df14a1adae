//! Horizontal, sectioned, virtualized table view for Ribbon.
//!
//! The table is driven by a [`HostViewport`] that owns scrolling and view
//! compositing, a [`TableDataSource`] that describes sections and builds
//! cells, and an optional [`TableDelegate`] for widths, supplementary views
//! and display/selection callbacks.

pub mod viewport;
pub mod widgets;

pub use ribbon_core::{CellId, IndexPath, TableError, ViewContent, ViewKey};
pub use ribbon_foundation::lazy::{CellBinding, TableCell};
pub use ribbon_ui_graphics::{Rect, Size, Span};
pub use viewport::HostViewport;
pub use widgets::{
    CellProvider, HorizontalTableView, SupplementaryKind, SupplementaryView, TableConfig,
    TableDataSource, TableDelegate, TableState, TableStats,
};

pub mod prelude {
    pub use crate::viewport::HostViewport;
    pub use crate::widgets::{
        CellProvider, HorizontalTableView, TableConfig, TableDataSource, TableDelegate,
        TableState, TableStats,
    };
    pub use ribbon_core::prelude::*;
    pub use ribbon_foundation::lazy::TableCell;
    pub use ribbon_ui_graphics::prelude::*;
}
