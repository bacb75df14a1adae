//! Virtualized layout for sectioned horizontal tables.
//!
//! Only the columns intersecting the scroll window are materialized; views
//! that scroll away are parked in a pool and rebound to columns scrolling in.
//!
//! # Architecture
//!
//! - [`LayoutModel`] - cumulative offset table built from [`SectionMetrics`]
//! - [`VisibilityTracker`] - window to visible-set diffing
//! - [`ReusePool`] - detached cells keyed by reuse identifier
//! - [`TableCell`] - hosted view content plus its index path binding
//!
//! # Example
//!
//! ```rust
//! use ribbon_foundation::lazy::{LayoutDefaults, LayoutModel, SectionMetrics, VisibilityTracker};
//! use ribbon_ui_graphics::Span;
//!
//! struct Strip;
//!
//! impl SectionMetrics for Strip {
//!     fn section_count(&self) -> usize {
//!         1
//!     }
//!     fn column_count(&self, _section: usize) -> usize {
//!         100
//!     }
//! }
//!
//! let layout = LayoutModel::build(&Strip, &LayoutDefaults::default()).unwrap();
//! let mut tracker = VisibilityTracker::new();
//! let update = tracker.update(Span::new(0.0, 320.0), &layout);
//! assert_eq!(update.columns.to_attach.len(), 8);
//! ```

mod cell;
mod layout_model;
mod reuse_pool;
mod visibility_tracker;

pub use cell::*;
pub use layout_model::*;
pub use reuse_pool::*;
pub use visibility_tracker::*;
