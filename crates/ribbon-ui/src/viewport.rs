//! Host viewport interface.
//!
//! The host owns the scroll offset, gestures, momentum and compositing. The
//! table reads the offset and viewport size, publishes the content extent,
//! requests programmatic scrolls and reports where views should be placed.

use ribbon_core::ViewKey;
use ribbon_ui_graphics::{Rect, Size};

pub trait HostViewport {
    /// Current horizontal scroll offset in content coordinates.
    fn scroll_offset(&self) -> f32;

    /// Visible size; the width is the scroll window, the height becomes the
    /// height of every column rect.
    fn viewport_size(&self) -> Size;

    fn set_content_extent(&mut self, extent: f32);

    /// Requests a scroll. Immediate requests are expected to update
    /// [`scroll_offset`](Self::scroll_offset) before returning; animated
    /// ones report progress through the table's `did_scroll`.
    fn scroll_to_offset(&mut self, offset: f32, animated: bool);

    /// A view was placed at `frame` (content coordinates).
    fn attach_view(&mut self, key: ViewKey, frame: Rect) {
        let _ = (key, frame);
    }

    /// A view left the hierarchy.
    fn detach_view(&mut self, key: ViewKey) {
        let _ = key;
    }
}
