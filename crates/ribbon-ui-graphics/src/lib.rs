//! Pure geometry for Ribbon
//!
//! Sizes, rectangles and one-dimensional spans along the scroll axis.
//! Everything here is `Copy` data with no dependencies.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Rect, Size, Span};
}
