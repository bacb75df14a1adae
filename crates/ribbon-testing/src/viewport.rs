//! In-memory host viewport.
//!
//! Records every request the table makes so tests can assert on attach and
//! detach order, published content extent and programmatic scrolls.

use ribbon_core::collections::HashMap;
use ribbon_core::ViewKey;
use ribbon_ui::HostViewport;
use ribbon_ui_graphics::{Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub offset: f32,
    pub animated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    Attached(ViewKey, Rect),
    Detached(ViewKey),
}

/// Host viewport backed by plain fields.
///
/// Immediate scroll requests move the offset right away. Animated ones are
/// parked until [`finish_animation`](Self::finish_animation) is called, which
/// mimics a host that reports the final offset after the animation.
#[derive(Debug, Default)]
pub struct FakeViewport {
    offset: f32,
    size: Size,
    content_extent: f32,
    scroll_requests: Vec<ScrollRequest>,
    pending_animation: Option<f32>,
    events: Vec<ViewEvent>,
    live: HashMap<ViewKey, Rect>,
}

impl FakeViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Moves the offset as a user drag would. The caller still has to
    /// notify the table with `did_scroll`.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Completes a parked animated scroll. Returns whether one was pending.
    pub fn finish_animation(&mut self) -> bool {
        match self.pending_animation.take() {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    /// Keys attached in event order since the last [`take_events`](Self::take_events).
    pub fn attached_keys(&self) -> Vec<ViewKey> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Attached(key, _) => Some(*key),
                ViewEvent::Detached(_) => None,
            })
            .collect()
    }

    pub fn detached_keys(&self) -> Vec<ViewKey> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Detached(key) => Some(*key),
                ViewEvent::Attached(..) => None,
            })
            .collect()
    }

    pub fn is_attached(&self, key: ViewKey) -> bool {
        self.live.contains_key(&key)
    }

    pub fn frame_of(&self, key: ViewKey) -> Option<Rect> {
        self.live.get(&key).copied()
    }

    /// Number of views currently in the fake hierarchy.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl HostViewport for FakeViewport {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn viewport_size(&self) -> Size {
        self.size
    }

    fn set_content_extent(&mut self, extent: f32) {
        self.content_extent = extent;
    }

    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        self.scroll_requests.push(ScrollRequest { offset, animated });
        if animated {
            self.pending_animation = Some(offset);
        } else {
            self.pending_animation = None;
            self.offset = offset;
        }
    }

    fn attach_view(&mut self, key: ViewKey, frame: Rect) {
        if self.live.insert(key, frame).is_some() {
            log::warn!("{key:?} attached twice");
        }
        self.events.push(ViewEvent::Attached(key, frame));
    }

    fn detach_view(&mut self, key: ViewKey) {
        if self.live.remove(&key).is_none() {
            log::warn!("{key:?} detached while not attached");
        }
        self.events.push(ViewEvent::Detached(key));
    }
}

#[cfg(test)]
#[path = "tests/viewport_tests.rs"]
mod tests;
