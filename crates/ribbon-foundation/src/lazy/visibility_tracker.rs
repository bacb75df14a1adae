//! Incremental visible-set tracking.
//!
//! Each scroll tick produces a fresh [`VisibleRange`] for the new window and
//! merges it against the previous one. Entries present in both windows are
//! left alone, so the work done by the caller is proportional to what
//! entered or left the window rather than to everything on screen.

use std::cmp::Ordering;

use ribbon_core::IndexPath;
use ribbon_ui_graphics::Span;

use super::layout_model::{LayoutModel, VisibleRange};

/// Difference between two ascending sequences of keys.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityDiff<T> {
    /// Keys that entered the window, ascending.
    pub to_attach: Vec<T>,
    /// Keys that left the window. Emitted ascending, but callers must not
    /// depend on that order.
    pub to_detach: Vec<T>,
    /// Keys visible in both windows, ascending.
    pub retained: Vec<T>,
}

impl<T> Default for VisibilityDiff<T> {
    fn default() -> Self {
        Self {
            to_attach: Vec::new(),
            to_detach: Vec::new(),
            retained: Vec::new(),
        }
    }
}

impl<T> VisibilityDiff<T> {
    pub fn is_unchanged(&self) -> bool {
        self.to_attach.is_empty() && self.to_detach.is_empty()
    }
}

/// Column, header and footer diffs for one window change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityUpdate {
    pub columns: VisibilityDiff<IndexPath>,
    pub headers: VisibilityDiff<usize>,
    pub footers: VisibilityDiff<usize>,
}

impl VisibilityUpdate {
    pub fn is_unchanged(&self) -> bool {
        self.columns.is_unchanged() && self.headers.is_unchanged() && self.footers.is_unchanged()
    }
}

/// Linear merge of two ascending, duplicate-free key sequences.
pub fn diff_sorted<T>(previous: &[T], next: &[T]) -> VisibilityDiff<T>
where
    T: Ord + Copy,
{
    let mut diff = VisibilityDiff::default();
    let (mut i, mut j) = (0, 0);
    while i < previous.len() && j < next.len() {
        match previous[i].cmp(&next[j]) {
            Ordering::Less => {
                diff.to_detach.push(previous[i]);
                i += 1;
            }
            Ordering::Greater => {
                diff.to_attach.push(next[j]);
                j += 1;
            }
            Ordering::Equal => {
                diff.retained.push(next[j]);
                i += 1;
                j += 1;
            }
        }
    }
    diff.to_detach.extend_from_slice(&previous[i..]);
    diff.to_attach.extend_from_slice(&next[j..]);
    diff
}

/// Diffs two visible ranges band by band.
pub fn diff_visible(previous: &VisibleRange, next: &VisibleRange) -> VisibilityUpdate {
    VisibilityUpdate {
        columns: diff_sorted(&previous.columns, &next.columns),
        headers: diff_sorted(&previous.headers, &next.headers),
        footers: diff_sorted(&previous.footers, &next.footers),
    }
}

/// Remembers the last reported window and its visible range.
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    window: Option<Span>,
    visible: VisibleRange,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The range reported by the last [`update`](Self::update).
    pub fn visible(&self) -> &VisibleRange {
        &self.visible
    }

    pub fn window(&self) -> Option<Span> {
        self.window
    }

    /// Forgets the previous window; the next update reports every visible
    /// entry as entering.
    pub fn reset(&mut self) {
        self.window = None;
        self.visible = VisibleRange::default();
    }

    /// Computes the visible range for `window` and diffs it against the
    /// previous one.
    pub fn update(&mut self, window: Span, layout: &LayoutModel) -> VisibilityUpdate {
        if self.window == Some(window) {
            return VisibilityUpdate {
                columns: VisibilityDiff {
                    retained: self.visible.columns.clone(),
                    ..VisibilityDiff::default()
                },
                headers: VisibilityDiff {
                    retained: self.visible.headers.to_vec(),
                    ..VisibilityDiff::default()
                },
                footers: VisibilityDiff {
                    retained: self.visible.footers.to_vec(),
                    ..VisibilityDiff::default()
                },
            };
        }

        let next = layout.index_paths_intersecting(window.start, window.end);
        let update = diff_visible(&self.visible, &next);
        log::trace!(
            "visibility: window [{}, {}) attach {} detach {} retain {}",
            window.start,
            window.end,
            update.columns.to_attach.len(),
            update.columns.to_detach.len(),
            update.columns.retained.len()
        );
        self.window = Some(window);
        self.visible = next;
        update
    }
}

#[cfg(test)]
#[path = "tests/visibility_tracker_tests.rs"]
mod tests;
