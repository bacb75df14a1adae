//! Delegate that records every callback.

use std::cell::RefCell;
use std::rc::Rc;

use ribbon_core::collections::HashMap;
use ribbon_core::{IndexPath, ViewContent};
use ribbon_ui::{SupplementaryView, TableCell, TableDelegate};

use crate::data::LabelCell;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DelegateEvent {
    WillDisplayCell(IndexPath),
    WillDisplayHeader(usize),
    WillDisplayFooter(usize),
    DidSelect(IndexPath),
}

/// Configurable widths, labelled header/footer views and an event log.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    column_width: Option<f32>,
    column_overrides: HashMap<IndexPath, f32>,
    header_width: Option<f32>,
    footer_width: Option<f32>,
    supplementary_views: bool,
    events: RefCell<Vec<DelegateEvent>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_width(mut self, width: f32) -> Self {
        self.column_width = Some(width);
        self
    }

    pub fn column_width_at(mut self, index_path: IndexPath, width: f32) -> Self {
        self.column_overrides.insert(index_path, width);
        self
    }

    pub fn header_width(mut self, width: f32) -> Self {
        self.header_width = Some(width);
        self
    }

    pub fn footer_width(mut self, width: f32) -> Self {
        self.footer_width = Some(width);
        self
    }

    /// Supplies a [`LabelCell`] for every header and footer band.
    pub fn with_supplementary_views(mut self) -> Self {
        self.supplementary_views = true;
        self
    }

    pub fn build(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn displayed_cells(&self) -> Vec<IndexPath> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                DelegateEvent::WillDisplayCell(index_path) => Some(*index_path),
                _ => None,
            })
            .collect()
    }

    pub fn selections(&self) -> Vec<IndexPath> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                DelegateEvent::DidSelect(index_path) => Some(*index_path),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: DelegateEvent) {
        self.events.borrow_mut().push(event);
    }

    fn label(&self, text: String) -> Option<Box<dyn ViewContent>> {
        self.supplementary_views
            .then(|| Box::new(LabelCell { text, reuses: 0 }) as Box<dyn ViewContent>)
    }
}

impl TableDelegate for RecordingDelegate {
    fn width_for_column(&self, index_path: IndexPath) -> Option<f32> {
        self.column_overrides
            .get(&index_path)
            .copied()
            .or(self.column_width)
    }

    fn width_for_header(&self, _section: usize) -> Option<f32> {
        self.header_width
    }

    fn width_for_footer(&self, _section: usize) -> Option<f32> {
        self.footer_width
    }

    fn view_for_header(&self, section: usize) -> Option<Box<dyn ViewContent>> {
        self.label(format!("header {section}"))
    }

    fn view_for_footer(&self, section: usize) -> Option<Box<dyn ViewContent>> {
        self.label(format!("footer {section}"))
    }

    fn will_display_cell(&self, _cell: &mut TableCell, index_path: IndexPath) {
        self.record(DelegateEvent::WillDisplayCell(index_path));
    }

    fn will_display_header_view(&self, _view: &mut SupplementaryView, section: usize) {
        self.record(DelegateEvent::WillDisplayHeader(section));
    }

    fn will_display_footer_view(&self, _view: &mut SupplementaryView, section: usize) {
        self.record(DelegateEvent::WillDisplayFooter(section));
    }

    fn did_select_column(&self, index_path: IndexPath) {
        self.record(DelegateEvent::DidSelect(index_path));
    }
}
