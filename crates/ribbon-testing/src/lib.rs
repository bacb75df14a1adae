//! Testing utilities for Ribbon tables

pub mod assertions;
pub mod data;
pub mod delegate;
pub mod viewport;

pub use assertions::*;
pub use data::{GridDataSource, LabelCell, GRID_CELL_IDENTIFIER};
pub use delegate::{DelegateEvent, RecordingDelegate};
pub use viewport::{FakeViewport, ScrollRequest, ViewEvent};

pub mod prelude {
    pub use crate::assertions;
    pub use crate::data::{GridDataSource, LabelCell, GRID_CELL_IDENTIFIER};
    pub use crate::delegate::{DelegateEvent, RecordingDelegate};
    pub use crate::viewport::{FakeViewport, ScrollRequest, ViewEvent};
}
