//! Table cells: hosted view content plus its binding to an index path.

use std::fmt;

use ribbon_core::{CellId, IndexPath, ViewContent};
use ribbon_ui_graphics::Rect;

/// Where a cell currently lives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellBinding {
    /// Not part of the visible set: freshly created, pooled, or handed out by
    /// a dequeue and not yet attached.
    Detached,
    /// Part of the visible set, showing `index_path` at `frame`.
    Attached { index_path: IndexPath, frame: Rect },
}

/// A reusable view slot hosted by the table.
///
/// The cell owns its [`ViewContent`] and carries the reuse identifier it was
/// created with. A cell is either attached to exactly one index path or
/// detached; the table flips the binding when it moves the cell between the
/// visible set and the reuse pool.
pub struct TableCell {
    id: CellId,
    reuse_identifier: Option<String>,
    binding: CellBinding,
    content: Box<dyn ViewContent>,
}

impl TableCell {
    /// Creates a cell that may be recycled under `reuse_identifier`.
    pub fn new(reuse_identifier: impl Into<String>, content: impl ViewContent + 'static) -> Self {
        Self::with_identifier(Some(reuse_identifier.into()), Box::new(content))
    }

    /// Creates a cell that is dropped instead of pooled when it scrolls away.
    pub fn unique(content: impl ViewContent + 'static) -> Self {
        Self::with_identifier(None, Box::new(content))
    }

    pub fn with_identifier(reuse_identifier: Option<String>, content: Box<dyn ViewContent>) -> Self {
        Self {
            id: CellId::next(),
            reuse_identifier,
            binding: CellBinding::Detached,
            content,
        }
    }

    #[inline]
    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn reuse_identifier(&self) -> Option<&str> {
        self.reuse_identifier.as_deref()
    }

    pub fn binding(&self) -> CellBinding {
        self.binding
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.binding, CellBinding::Attached { .. })
    }

    /// Index path the cell is bound to while attached.
    pub fn index_path(&self) -> Option<IndexPath> {
        match self.binding {
            CellBinding::Attached { index_path, .. } => Some(index_path),
            CellBinding::Detached => None,
        }
    }

    /// Frame in content coordinates while attached, [`Rect::ZERO`] otherwise.
    pub fn frame(&self) -> Rect {
        match self.binding {
            CellBinding::Attached { frame, .. } => frame,
            CellBinding::Detached => Rect::ZERO,
        }
    }

    pub fn content(&self) -> &dyn ViewContent {
        &*self.content
    }

    pub fn content_mut(&mut self) -> &mut dyn ViewContent {
        &mut *self.content
    }

    /// Typed access to the hosted view.
    pub fn view<T: ViewContent + 'static>(&self) -> Option<&T> {
        (*self.content).downcast_ref::<T>()
    }

    pub fn view_mut<T: ViewContent + 'static>(&mut self) -> Option<&mut T> {
        (*self.content).downcast_mut::<T>()
    }

    pub fn prepare_for_reuse(&mut self) {
        self.content.prepare_for_reuse();
    }

    /// Marks the cell as showing `index_path` at `frame`.
    ///
    /// The owning table manages the binding and restores it after every
    /// display callback.
    #[doc(hidden)]
    pub fn attach(&mut self, index_path: IndexPath, frame: Rect) {
        self.binding = CellBinding::Attached { index_path, frame };
    }

    /// Clears the binding; the cell may now be pooled or dropped.
    #[doc(hidden)]
    pub fn detach(&mut self) {
        self.binding = CellBinding::Detached;
    }
}

impl fmt::Debug for TableCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCell")
            .field("id", &self.id)
            .field("reuse_identifier", &self.reuse_identifier)
            .field("binding", &self.binding)
            .finish()
    }
}
