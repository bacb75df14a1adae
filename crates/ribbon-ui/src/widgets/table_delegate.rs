//! Optional delegate hooks for [`HorizontalTableView`](super::HorizontalTableView).

use ribbon_core::{IndexPath, ViewContent};
use ribbon_foundation::lazy::TableCell;

use super::horizontal_table::SupplementaryView;

/// Customizes geometry, supplies header/footer views and observes display
/// and selection events.
///
/// Every method has a default. Width methods returning `None` mean "not
/// overridden": the table falls back to its configured widths.
pub trait TableDelegate {
    fn width_for_column(&self, index_path: IndexPath) -> Option<f32> {
        let _ = index_path;
        None
    }

    fn width_for_header(&self, section: usize) -> Option<f32> {
        let _ = section;
        None
    }

    fn width_for_footer(&self, section: usize) -> Option<f32> {
        let _ = section;
        None
    }

    fn view_for_header(&self, section: usize) -> Option<Box<dyn ViewContent>> {
        let _ = section;
        None
    }

    fn view_for_footer(&self, section: usize) -> Option<Box<dyn ViewContent>> {
        let _ = section;
        None
    }

    fn will_display_cell(&self, cell: &mut TableCell, index_path: IndexPath) {
        let _ = (cell, index_path);
    }

    fn will_display_header_view(&self, view: &mut SupplementaryView, section: usize) {
        let _ = (view, section);
    }

    fn will_display_footer_view(&self, view: &mut SupplementaryView, section: usize) {
        let _ = (view, section);
    }

    fn did_select_column(&self, index_path: IndexPath) {
        let _ = index_path;
    }
}
