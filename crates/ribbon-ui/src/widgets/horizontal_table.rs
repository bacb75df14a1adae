//! Horizontally scrolling, sectioned, virtualized table.
//!
//! [`HorizontalTableView`] owns the layout of a loaded table, the set of
//! attached cells and the reuse pool. The host viewport drives it: every
//! scroll tick ends in [`HorizontalTableView::did_scroll`], which diffs the
//! new window against the old one and attaches or recycles only what
//! changed.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use ribbon_core::collections::HashMap;
use ribbon_core::{BandRef, CellId, IndexPath, TableError, ViewContent, ViewKey};
use ribbon_foundation::lazy::{
    LayoutDefaults, LayoutModel, ReusePool, SectionMetrics, TableCell, VisibilityTracker,
    DEFAULT_COLUMN_WIDTH,
};
use ribbon_ui_graphics::{Rect, Span};

use super::table_data_source::{dequeue_prepared, CellProvider, ReuseCounters, TableDataSource};
use super::table_delegate::TableDelegate;
use crate::viewport::HostViewport;

/// Fallback widths used when the delegate does not override them.
///
/// Changes take effect on the next [`HorizontalTableView::reload_data`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableConfig {
    pub column_width: f32,
    pub section_header_width: f32,
    pub section_footer_width: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            section_header_width: 0.0,
            section_footer_width: 0.0,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_width(mut self, width: f32) -> Self {
        self.column_width = width;
        self
    }

    pub fn section_header_width(mut self, width: f32) -> Self {
        self.section_header_width = width;
        self
    }

    pub fn section_footer_width(mut self, width: f32) -> Self {
        self.section_footer_width = width;
        self
    }

    /// Rejects negative and non-finite widths.
    pub fn validate(&self) -> Result<(), TableError> {
        TableError::check_width(BandRef::Config("column width"), self.column_width)?;
        TableError::check_width(
            BandRef::Config("section header width"),
            self.section_header_width,
        )?;
        TableError::check_width(
            BandRef::Config("section footer width"),
            self.section_footer_width,
        )?;
        Ok(())
    }

    fn layout_defaults(&self, cross_axis_extent: f32) -> LayoutDefaults {
        LayoutDefaults {
            column_width: self.column_width,
            header_width: self.section_header_width,
            footer_width: self.section_footer_width,
            cross_axis_extent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableState {
    /// No layout: never loaded, last reload failed, or the data source is gone.
    Empty,
    Loaded,
}

/// Snapshot of cell bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Cells currently attached to visible columns.
    pub cells_in_use: usize,
    /// Detached cells waiting in the reuse pool.
    pub cells_in_pool: usize,
    /// Cells the data source built from scratch.
    pub total_created: usize,
    /// Attaches of a cell that came back out of the pool.
    pub reuse_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupplementaryKind {
    Header,
    Footer,
}

impl SupplementaryKind {
    fn view_key(self, section: usize) -> ViewKey {
        match self {
            SupplementaryKind::Header => ViewKey::Header(section),
            SupplementaryKind::Footer => ViewKey::Footer(section),
        }
    }
}

/// A header or footer view supplied by the delegate. Never pooled.
pub struct SupplementaryView {
    kind: SupplementaryKind,
    section: usize,
    frame: Rect,
    content: Box<dyn ViewContent>,
}

impl SupplementaryView {
    pub fn kind(&self) -> SupplementaryKind {
        self.kind
    }

    pub fn section(&self) -> usize {
        self.section
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn content(&self) -> &dyn ViewContent {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> &mut dyn ViewContent {
        self.content.as_mut()
    }

    pub fn view<T: ViewContent + 'static>(&self) -> Option<&T> {
        (*self.content).downcast_ref::<T>()
    }

    pub fn view_mut<T: ViewContent + 'static>(&mut self) -> Option<&mut T> {
        (*self.content).downcast_mut::<T>()
    }
}

impl fmt::Debug for SupplementaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplementaryView")
            .field("kind", &self.kind)
            .field("section", &self.section)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

/// Routes layout questions to the data source and delegate.
struct CollaboratorMetrics<'a> {
    data_source: &'a dyn TableDataSource,
    delegate: Option<&'a dyn TableDelegate>,
}

impl SectionMetrics for CollaboratorMetrics<'_> {
    fn section_count(&self) -> usize {
        self.data_source.number_of_sections()
    }

    fn column_count(&self, section: usize) -> usize {
        self.data_source.number_of_columns(section)
    }

    fn header_width(&self, section: usize) -> Option<f32> {
        self.delegate.and_then(|d| d.width_for_header(section))
    }

    fn footer_width(&self, section: usize) -> Option<f32> {
        self.delegate.and_then(|d| d.width_for_footer(section))
    }

    fn column_width(&self, index_path: IndexPath) -> Option<f32> {
        self.delegate.and_then(|d| d.width_for_column(index_path))
    }
}

/// Virtualized horizontal table bound to a host viewport.
///
/// Data source and delegate are held weakly; once the data source is dropped
/// the table behaves as [`TableState::Empty`].
pub struct HorizontalTableView<H: HostViewport> {
    host: H,
    config: TableConfig,
    data_source: Option<Weak<dyn TableDataSource>>,
    delegate: Option<Weak<dyn TableDelegate>>,
    layout: Option<LayoutModel>,
    tracker: VisibilityTracker,
    visible: BTreeMap<IndexPath, TableCell>,
    cell_paths: HashMap<CellId, IndexPath>,
    headers: BTreeMap<usize, SupplementaryView>,
    footers: BTreeMap<usize, SupplementaryView>,
    pool: ReusePool,
    counters: ReuseCounters,
}

impl<H: HostViewport> HorizontalTableView<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: TableConfig::default(),
            data_source: None,
            delegate: None,
            layout: None,
            tracker: VisibilityTracker::new(),
            visible: BTreeMap::new(),
            cell_paths: HashMap::default(),
            headers: BTreeMap::new(),
            footers: BTreeMap::new(),
            pool: ReusePool::new(),
            counters: ReuseCounters::default(),
        }
    }

    pub fn with_config(host: H, config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let mut table = Self::new(host);
        table.config = config;
        Ok(table)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> TableConfig {
        self.config
    }

    pub fn set_config(&mut self, config: TableConfig) -> Result<(), TableError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_column_width(&mut self, width: f32) -> Result<(), TableError> {
        self.set_config(self.config.column_width(width))
    }

    pub fn set_section_header_width(&mut self, width: f32) -> Result<(), TableError> {
        self.set_config(self.config.section_header_width(width))
    }

    pub fn set_section_footer_width(&mut self, width: f32) -> Result<(), TableError> {
        self.set_config(self.config.section_footer_width(width))
    }

    pub fn set_data_source<D: TableDataSource + 'static>(&mut self, data_source: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(data_source);
        self.data_source = Some(weak);
    }

    pub fn clear_data_source(&mut self) {
        self.data_source = None;
    }

    /// Installs the delegate.
    ///
    /// Header and footer views it provides appear at once for sections already
    /// in the window. Its widths take effect on the next reload.
    pub fn set_delegate<D: TableDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
        self.attach_missing_supplementary();
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn data_source(&self) -> Option<Rc<dyn TableDataSource>> {
        self.data_source.as_ref()?.upgrade()
    }

    fn delegate(&self) -> Option<Rc<dyn TableDelegate>> {
        self.delegate.as_ref()?.upgrade()
    }

    /// The layout, if loaded and the data source is still alive.
    fn loaded_layout(&self) -> Option<&LayoutModel> {
        let layout = self.layout.as_ref()?;
        let alive = self.data_source.as_ref()?.strong_count() > 0;
        alive.then_some(layout)
    }

    pub fn state(&self) -> TableState {
        if self.loaded_layout().is_some() {
            TableState::Loaded
        } else {
            TableState::Empty
        }
    }

    // ----- loading -----

    /// Discards all geometry and visible views and rebuilds from the data
    /// source and delegate.
    ///
    /// Every attached cell is recycled before the data source is queried, so
    /// dequeues during the rebuild can hand them out again. A missing data
    /// source leaves the table empty. A negative or non-finite width aborts
    /// the reload and leaves the table empty.
    pub fn reload_data(&mut self) -> Result<(), TableError> {
        self.unload();

        let Some(data_source) = self.data_source() else {
            log::debug!("reload_data without a data source; table stays empty");
            self.host.set_content_extent(0.0);
            return Ok(());
        };
        let delegate = self.delegate();
        let metrics = CollaboratorMetrics {
            data_source: data_source.as_ref(),
            delegate: delegate.as_deref(),
        };
        let defaults = self
            .config
            .layout_defaults(self.host.viewport_size().height);

        let layout = match LayoutModel::build(&metrics, &defaults) {
            Ok(layout) => layout,
            Err(err) => {
                log::error!("reload_data failed: {err}");
                self.host.set_content_extent(0.0);
                return Err(err);
            }
        };

        log::debug!(
            "reloaded {} sections, content extent {}",
            layout.section_count(),
            layout.total_extent()
        );
        self.host.set_content_extent(layout.total_extent());
        self.layout = Some(layout);
        self.refresh_visible();
        Ok(())
    }

    /// Detaches everything and drops the layout.
    fn unload(&mut self) {
        for (_, cell) in std::mem::take(&mut self.visible) {
            self.retire_cell(cell);
        }
        self.cell_paths.clear();
        for section in std::mem::take(&mut self.headers).into_keys() {
            self.host.detach_view(ViewKey::Header(section));
        }
        for section in std::mem::take(&mut self.footers).into_keys() {
            self.host.detach_view(ViewKey::Footer(section));
        }
        self.tracker.reset();
        self.counters.handed_out.clear();
        if self.layout.take().is_some() {
            self.host.set_content_extent(0.0);
        }
    }

    // ----- scrolling -----

    /// Called by the host after every scroll offset change.
    pub fn did_scroll(&mut self) {
        if self.layout.is_some() {
            self.refresh_visible();
        }
    }

    /// Scrolls so the column's leading edge sits at the leading edge of the
    /// viewport, clamped to the scrollable range.
    ///
    /// Does nothing while the table is empty. Non-animated scrolls update
    /// visibility before returning.
    pub fn scroll_to_index_path(
        &mut self,
        index_path: IndexPath,
        animated: bool,
    ) -> Result<(), TableError> {
        let target = {
            let Some(layout) = self.loaded_layout() else {
                log::debug!("scroll_to_index_path({index_path}) ignored: table is empty");
                return Ok(());
            };
            let span = layout
                .column_span(index_path)
                .ok_or_else(|| TableError::index_path_out_of_range(index_path))?;
            let max_offset = (layout.total_extent() - self.host.viewport_size().width).max(0.0);
            span.start.clamp(0.0, max_offset)
        };

        log::trace!("scroll to {index_path} at offset {target} (animated: {animated})");
        self.host.scroll_to_offset(target, animated);
        if !animated {
            self.did_scroll();
        }
        Ok(())
    }

    fn scroll_window(&self) -> Span {
        Span::from_start_len(self.host.scroll_offset(), self.host.viewport_size().width)
    }

    fn refresh_visible(&mut self) {
        let Some(data_source) = self.data_source() else {
            log::debug!("data source dropped; unloading table");
            self.unload();
            return;
        };
        let delegate = self.delegate();
        let window = self.scroll_window();

        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let update = self.tracker.update(window, layout);
        if update.is_unchanged() {
            return;
        }

        for &index_path in &update.columns.to_detach {
            self.detach_cell(index_path);
        }
        for &section in &update.headers.to_detach {
            self.detach_supplementary(SupplementaryKind::Header, section);
        }
        for &section in &update.footers.to_detach {
            self.detach_supplementary(SupplementaryKind::Footer, section);
        }

        let delegate = delegate.as_deref();
        for &section in &update.headers.to_attach {
            self.attach_supplementary(SupplementaryKind::Header, section, delegate);
        }
        for &index_path in &update.columns.to_attach {
            self.attach_cell(index_path, data_source.as_ref(), delegate);
        }
        for &section in &update.footers.to_attach {
            self.attach_supplementary(SupplementaryKind::Footer, section, delegate);
        }
    }

    fn attach_cell(
        &mut self,
        index_path: IndexPath,
        data_source: &dyn TableDataSource,
        delegate: Option<&dyn TableDelegate>,
    ) {
        let Some(frame) = self.layout.as_ref().and_then(|l| l.rect(index_path)) else {
            return;
        };

        let (mut cell, dequeued) = {
            let mut provider = CellProvider::new(&mut self.pool, &mut self.counters);
            let cell = data_source.cell_for_column(&mut provider, index_path);
            (cell, provider.into_dequeued())
        };
        for &id in dequeued.iter().filter(|&&id| id != cell.id()) {
            log::warn!("data source discarded dequeued cell {id} at {index_path}");
            self.counters.handed_out.remove(&id);
        }
        self.counters.record_attach(cell.id());

        cell.attach(index_path, frame);
        if let Some(delegate) = delegate {
            delegate.will_display_cell(&mut cell, index_path);
            cell.attach(index_path, frame);
        }
        self.host.attach_view(ViewKey::Cell(cell.id()), frame);
        log::trace!("attached {} at {index_path}", cell.id());

        self.cell_paths.insert(cell.id(), index_path);
        if let Some(previous) = self.visible.insert(index_path, cell) {
            self.cell_paths.remove(&previous.id());
            self.retire_cell(previous);
        }
    }

    fn detach_cell(&mut self, index_path: IndexPath) {
        if let Some(cell) = self.visible.remove(&index_path) {
            self.cell_paths.remove(&cell.id());
            self.retire_cell(cell);
        }
    }

    /// Takes a cell out of the hierarchy and pools it if it has an identifier.
    fn retire_cell(&mut self, mut cell: TableCell) {
        self.host.detach_view(ViewKey::Cell(cell.id()));
        cell.detach();
        if cell.reuse_identifier().is_none() {
            log::trace!("dropping {} without reuse identifier", cell.id());
            return;
        }
        if let Err(err) = self.pool.checkin(cell) {
            log::warn!("could not pool cell: {err}");
        }
    }

    fn attach_supplementary(
        &mut self,
        kind: SupplementaryKind,
        section: usize,
        delegate: Option<&dyn TableDelegate>,
    ) {
        let Some(delegate) = delegate else {
            return;
        };
        let frame = self.layout.as_ref().and_then(|layout| match kind {
            SupplementaryKind::Header => layout.header_rect(section),
            SupplementaryKind::Footer => layout.footer_rect(section),
        });
        let Some(frame) = frame else {
            return;
        };
        let content = match kind {
            SupplementaryKind::Header => delegate.view_for_header(section),
            SupplementaryKind::Footer => delegate.view_for_footer(section),
        };
        let Some(content) = content else {
            return;
        };

        let mut view = SupplementaryView {
            kind,
            section,
            frame,
            content,
        };
        match kind {
            SupplementaryKind::Header => delegate.will_display_header_view(&mut view, section),
            SupplementaryKind::Footer => delegate.will_display_footer_view(&mut view, section),
        }
        self.host.attach_view(kind.view_key(section), frame);
        self.supplementary_map(kind).insert(section, view);
    }

    /// Attaches the delegate's views for visible header and footer bands that
    /// have none yet.
    fn attach_missing_supplementary(&mut self) {
        if self.loaded_layout().is_none() {
            return;
        }
        let Some(delegate) = self.delegate() else {
            return;
        };
        let visible = self.tracker.visible();
        let headers: Vec<usize> = visible
            .headers
            .iter()
            .copied()
            .filter(|section| !self.headers.contains_key(section))
            .collect();
        let footers: Vec<usize> = visible
            .footers
            .iter()
            .copied()
            .filter(|section| !self.footers.contains_key(section))
            .collect();
        for section in headers {
            self.attach_supplementary(SupplementaryKind::Header, section, Some(delegate.as_ref()));
        }
        for section in footers {
            self.attach_supplementary(SupplementaryKind::Footer, section, Some(delegate.as_ref()));
        }
    }

    fn detach_supplementary(&mut self, kind: SupplementaryKind, section: usize) {
        if self.supplementary_map(kind).remove(&section).is_some() {
            self.host.detach_view(kind.view_key(section));
        }
    }

    fn supplementary_map(
        &mut self,
        kind: SupplementaryKind,
    ) -> &mut BTreeMap<usize, SupplementaryView> {
        match kind {
            SupplementaryKind::Header => &mut self.headers,
            SupplementaryKind::Footer => &mut self.footers,
        }
    }

    // ----- queries -----

    /// Section count of the last reload; 0 when empty.
    pub fn number_of_sections(&self) -> usize {
        self.loaded_layout().map_or(0, LayoutModel::section_count)
    }

    /// Column count of `section` from the last reload.
    pub fn number_of_columns(&self, section: usize) -> Result<usize, TableError> {
        self.loaded_layout()
            .and_then(|layout| layout.column_count(section))
            .ok_or_else(|| TableError::section_out_of_range(section))
    }

    /// Returns a pooled cell for `identifier`, already reset for reuse.
    pub fn dequeue_reusable_cell(&mut self, identifier: &str) -> Option<TableCell> {
        dequeue_prepared(&mut self.pool, &mut self.counters, identifier)
    }

    /// The attached cell at `index_path`, or `None` when it is not visible.
    pub fn cell_for_index_path(&self, index_path: IndexPath) -> Option<&TableCell> {
        self.visible.get(&index_path)
    }

    pub fn cell_for_index_path_mut(&mut self, index_path: IndexPath) -> Option<&mut TableCell> {
        self.visible.get_mut(&index_path)
    }

    /// Index path of an attached cell. Pooled or unknown cells have none.
    pub fn index_path_for_cell(&self, id: CellId) -> Option<IndexPath> {
        self.cell_paths.get(&id).copied()
    }

    /// Frame of the column in content coordinates, or [`Rect::ZERO`] when
    /// the index path is not part of the loaded table.
    pub fn rect_for_index_path(&self, index_path: IndexPath) -> Rect {
        self.loaded_layout()
            .and_then(|layout| layout.rect(index_path))
            .unwrap_or(Rect::ZERO)
    }

    pub fn rect_for_header(&self, section: usize) -> Rect {
        self.loaded_layout()
            .and_then(|layout| layout.header_rect(section))
            .unwrap_or(Rect::ZERO)
    }

    pub fn rect_for_footer(&self, section: usize) -> Rect {
        self.loaded_layout()
            .and_then(|layout| layout.footer_rect(section))
            .unwrap_or(Rect::ZERO)
    }

    /// Total content width of the loaded table.
    pub fn content_extent(&self) -> f32 {
        self.loaded_layout().map_or(0.0, LayoutModel::total_extent)
    }

    /// Attached cells in ascending index path order.
    pub fn visible_cells(&self) -> impl Iterator<Item = &TableCell> + '_ {
        self.visible.values()
    }

    pub fn index_paths_for_visible_columns(&self) -> Vec<IndexPath> {
        self.visible.keys().copied().collect()
    }

    pub fn header_view(&self, section: usize) -> Option<&SupplementaryView> {
        self.headers.get(&section)
    }

    pub fn footer_view(&self, section: usize) -> Option<&SupplementaryView> {
        self.footers.get(&section)
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            cells_in_use: self.visible.len(),
            cells_in_pool: self.pool.len(),
            total_created: self.counters.created,
            reuse_count: self.counters.reused,
        }
    }

    // ----- selection -----

    /// Hit-tests a content offset and reports the column under it to the
    /// delegate. Offsets over headers, footers or empty space select nothing.
    pub fn select_column_at(&mut self, offset: f32) -> Option<IndexPath> {
        let index_path = self.loaded_layout()?.index_path_at(offset)?;
        if let Some(delegate) = self.delegate() {
            delegate.did_select_column(index_path);
        }
        Some(index_path)
    }

    pub fn select_column(&mut self, index_path: IndexPath) -> Result<(), TableError> {
        let known = self
            .loaded_layout()
            .is_some_and(|layout| layout.contains(index_path));
        if !known {
            return Err(TableError::index_path_out_of_range(index_path));
        }
        if let Some(delegate) = self.delegate() {
            delegate.did_select_column(index_path);
        }
        Ok(())
    }
}

impl<H: HostViewport + fmt::Debug> fmt::Debug for HorizontalTableView<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HorizontalTableView")
            .field("host", &self.host)
            .field("state", &self.state())
            .field("config", &self.config)
            .field("visible", &self.visible.keys().collect::<Vec<_>>())
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/horizontal_table_tests.rs"]
mod tests;
