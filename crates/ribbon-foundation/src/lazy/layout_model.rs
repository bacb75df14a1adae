//! Cumulative offset table for sectioned horizontal layouts.
//!
//! Each section contributes a header band, one band per column and a footer
//! band, laid end to end along the scroll axis. The table is rebuilt
//! wholesale on every reload and answers geometry queries with binary
//! searches over the cumulative offsets.

use smallvec::SmallVec;

use ribbon_core::{BandRef, IndexPath, TableError};
use ribbon_ui_graphics::{Rect, Span};

/// Default column width when neither the configuration nor the delegate
/// provide one.
pub const DEFAULT_COLUMN_WIDTH: f32 = 44.0;

/// Inline capacity for header/footer section lists; a window rarely spans
/// more than a handful of sections.
pub type SectionList = SmallVec<[usize; 4]>;

/// Answers the layout questions asked once per reload.
///
/// The width methods are optional: returning `None` falls back to the
/// matching [`LayoutDefaults`] value.
pub trait SectionMetrics {
    fn section_count(&self) -> usize;

    fn column_count(&self, section: usize) -> usize;

    fn header_width(&self, section: usize) -> Option<f32> {
        let _ = section;
        None
    }

    fn footer_width(&self, section: usize) -> Option<f32> {
        let _ = section;
        None
    }

    fn column_width(&self, index_path: IndexPath) -> Option<f32> {
        let _ = index_path;
        None
    }
}

/// Fallback widths and the cross-axis extent applied to every rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutDefaults {
    pub column_width: f32,
    pub header_width: f32,
    pub footer_width: f32,
    /// Height given to column rects.
    pub cross_axis_extent: f32,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            header_width: 0.0,
            footer_width: 0.0,
            cross_axis_extent: 0.0,
        }
    }
}

/// Offsets of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLayout {
    header: Span,
    /// Start offset of every column followed by the end of the last column.
    /// Always holds `column_count + 1` entries.
    column_offsets: Vec<f32>,
    footer: Span,
}

impl SectionLayout {
    pub fn header(&self) -> Span {
        self.header
    }

    pub fn footer(&self) -> Span {
        self.footer
    }

    pub fn column_count(&self) -> usize {
        self.column_offsets.len() - 1
    }

    pub fn column_offsets(&self) -> &[f32] {
        &self.column_offsets
    }

    pub fn column_span(&self, column: usize) -> Option<Span> {
        let start = *self.column_offsets.get(column)?;
        let end = *self.column_offsets.get(column + 1)?;
        Some(Span::new(start, end))
    }

    /// First column whose band ends after `offset`.
    fn first_column_ending_after(&self, offset: f32) -> usize {
        self.column_offsets[1..].partition_point(|&end| end <= offset)
    }
}

/// Index paths and supplementary bands inside a scroll window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibleRange {
    /// Column index paths, ascending.
    pub columns: Vec<IndexPath>,
    /// Sections whose header band intersects the window, ascending.
    pub headers: SectionList,
    /// Sections whose footer band intersects the window, ascending.
    pub footers: SectionList,
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.headers.is_empty() && self.footers.is_empty()
    }
}

/// Immutable geometry of a loaded table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutModel {
    sections: Vec<SectionLayout>,
    total_extent: f32,
    cross_axis_extent: f32,
}

impl LayoutModel {
    /// Builds the offset table.
    ///
    /// Queries the section count once, then for each section its column
    /// count, header width and footer width, then every column width.
    /// Negative or non-finite widths fail with
    /// [`TableError::InvalidLayoutInput`]; zero widths are kept as
    /// zero-extent bands.
    pub fn build<M>(metrics: &M, defaults: &LayoutDefaults) -> Result<Self, TableError>
    where
        M: SectionMetrics + ?Sized,
    {
        let column_default =
            TableError::check_width(BandRef::Config("column_width"), defaults.column_width)?;
        let header_default =
            TableError::check_width(BandRef::Config("section_header_width"), defaults.header_width)?;
        let footer_default =
            TableError::check_width(BandRef::Config("section_footer_width"), defaults.footer_width)?;

        let section_count = metrics.section_count();
        let mut sections = Vec::with_capacity(section_count);
        let mut cursor = 0.0_f32;

        for section in 0..section_count {
            let column_count = metrics.column_count(section);
            let header_width = TableError::check_width(
                BandRef::Header { section },
                metrics.header_width(section).unwrap_or(header_default),
            )?;
            let footer_width = TableError::check_width(
                BandRef::Footer { section },
                metrics.footer_width(section).unwrap_or(footer_default),
            )?;

            let header = Span::from_start_len(cursor, header_width);
            cursor = header.end;

            let mut column_offsets = Vec::with_capacity(column_count + 1);
            column_offsets.push(cursor);
            for column in 0..column_count {
                let index_path = IndexPath::new(section, column);
                let width = TableError::check_width(
                    BandRef::Column(index_path),
                    metrics.column_width(index_path).unwrap_or(column_default),
                )?;
                cursor += width;
                column_offsets.push(cursor);
            }

            let footer = Span::from_start_len(cursor, footer_width);
            cursor = footer.end;

            sections.push(SectionLayout {
                header,
                column_offsets,
                footer,
            });
        }

        log::debug!(
            "layout: built {} sections, total extent {}",
            sections.len(),
            cursor
        );

        Ok(Self {
            sections,
            total_extent: cursor,
            cross_axis_extent: defaults.cross_axis_extent,
        })
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[SectionLayout] {
        &self.sections
    }

    pub fn section(&self, section: usize) -> Option<&SectionLayout> {
        self.sections.get(section)
    }

    pub fn column_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(SectionLayout::column_count)
    }

    /// End offset of the last footer; zero for a table without sections.
    pub fn total_extent(&self) -> f32 {
        self.total_extent
    }

    pub fn contains(&self, index_path: IndexPath) -> bool {
        self.column_count(index_path.section())
            .is_some_and(|count| index_path.column() < count)
    }

    pub fn column_span(&self, index_path: IndexPath) -> Option<Span> {
        self.sections
            .get(index_path.section())?
            .column_span(index_path.column())
    }

    pub fn header_span(&self, section: usize) -> Option<Span> {
        self.sections.get(section).map(SectionLayout::header)
    }

    pub fn footer_span(&self, section: usize) -> Option<Span> {
        self.sections.get(section).map(SectionLayout::footer)
    }

    /// Rect of a column in content coordinates, `None` when out of bounds.
    pub fn rect(&self, index_path: IndexPath) -> Option<Rect> {
        self.column_span(index_path)
            .map(|span| Rect::from_span(span, self.cross_axis_extent))
    }

    pub fn header_rect(&self, section: usize) -> Option<Rect> {
        self.header_span(section)
            .map(|span| Rect::from_span(span, self.cross_axis_extent))
    }

    pub fn footer_rect(&self, section: usize) -> Option<Rect> {
        self.footer_span(section)
            .map(|span| Rect::from_span(span, self.cross_axis_extent))
    }

    /// Everything whose band intersects `[start, end)`.
    ///
    /// Binary-searches the first section ending after `start`, then the first
    /// column ending after `start` inside it, and walks forward until bands
    /// begin at or past `end`. Zero-width bands never intersect.
    pub fn index_paths_intersecting(&self, start: f32, end: f32) -> VisibleRange {
        let window = Span::new(start, end);
        let mut range = VisibleRange::default();
        if window.is_empty() {
            return range;
        }

        let first_section = self.sections.partition_point(|s| s.footer.end <= start);
        for (section_index, section) in self.sections.iter().enumerate().skip(first_section) {
            if section.header.start >= end {
                break;
            }
            if section.header.intersects(&window) {
                range.headers.push(section_index);
            }

            let column_count = section.column_count();
            let mut column = section.first_column_ending_after(start);
            while column < column_count {
                let span = Span::new(
                    section.column_offsets[column],
                    section.column_offsets[column + 1],
                );
                if span.start >= end {
                    break;
                }
                if span.intersects(&window) {
                    range.columns.push(IndexPath::new(section_index, column));
                }
                column += 1;
            }

            if section.footer.intersects(&window) {
                range.footers.push(section_index);
            }
        }
        range
    }

    /// Column whose band contains `offset`, if any.
    pub fn index_path_at(&self, offset: f32) -> Option<IndexPath> {
        let section_index = self.sections.partition_point(|s| s.footer.end <= offset);
        let section = self.sections.get(section_index)?;
        let column = section.first_column_ending_after(offset);
        section
            .column_span(column)
            .filter(|span| span.contains(offset))
            .map(|_| IndexPath::new(section_index, column))
    }
}

#[cfg(test)]
#[path = "tests/layout_model_tests.rs"]
mod tests;
