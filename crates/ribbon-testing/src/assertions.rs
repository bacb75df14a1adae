//! Assertion helpers for table state.

use ribbon_core::{IndexPath, ViewKey};
use ribbon_ui::{HorizontalTableView, HostViewport};
use ribbon_ui_graphics::{Rect, Span};

use crate::viewport::FakeViewport;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the visible columns, as `(section, column)` pairs in order.
pub fn assert_visible_columns<H: HostViewport>(
    table: &HorizontalTableView<H>,
    expected: &[(usize, usize)],
) {
    let expected: Vec<IndexPath> = expected.iter().map(|&p| IndexPath::from(p)).collect();
    assert_eq!(
        table.index_paths_for_visible_columns(),
        expected,
        "visible columns"
    );
}

/// Assert that the visible set is exactly the positive-width columns
/// intersecting `window`, and that each attached cell sits at its rect.
pub fn assert_visible_matches_window<H: HostViewport>(
    table: &HorizontalTableView<H>,
    window: Span,
) {
    for cell in table.visible_cells() {
        let index_path = cell
            .index_path()
            .unwrap_or_else(|| panic!("{} is in the visible set but detached", cell.id()));
        let rect = table.rect_for_index_path(index_path);
        assert_eq!(cell.frame(), rect, "frame of {index_path}");
        assert!(
            rect.horizontal_span().intersects(&window),
            "{index_path} at {rect:?} is outside {window:?}"
        );
    }

    for section in 0..table.number_of_sections() {
        let columns = table.number_of_columns(section).unwrap_or(0);
        for column in 0..columns {
            let index_path = IndexPath::new(section, column);
            let inside = table
                .rect_for_index_path(index_path)
                .horizontal_span()
                .intersects(&window);
            assert_eq!(
                table.cell_for_index_path(index_path).is_some(),
                inside,
                "visibility of {index_path} in {window:?}"
            );
        }
    }
}

/// Assert that the fake host holds exactly the table's cells at their frames.
pub fn assert_host_in_sync(table: &HorizontalTableView<FakeViewport>) {
    let host = table.host();
    for cell in table.visible_cells() {
        assert_eq!(
            host.frame_of(ViewKey::Cell(cell.id())),
            Some(cell.frame()),
            "host frame of {}",
            cell.id()
        );
    }
    let supplementary = (0..table.number_of_sections())
        .map(|s| table.header_view(s).is_some() as usize + table.footer_view(s).is_some() as usize)
        .sum::<usize>();
    assert_eq!(
        host.live_count(),
        table.stats().cells_in_use + supplementary,
        "views attached to host"
    );
}

/// Assert that frames of consecutive visible cells do not overlap.
pub fn assert_frames_ordered<H: HostViewport>(table: &HorizontalTableView<H>) {
    let frames: Vec<Rect> = table.visible_cells().map(|cell| cell.frame()).collect();
    for pair in frames.windows(2) {
        assert!(
            pair[0].max_x() <= pair[1].min_x(),
            "overlapping frames {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}
