use super::*;
use std::cell::RefCell;

/// Metrics backed by explicit per-section answers.
#[derive(Default)]
struct Grid {
    sections: Vec<SectionSpec>,
    queries: RefCell<Vec<String>>,
}

#[derive(Clone, Default)]
struct SectionSpec {
    columns: usize,
    widths: Option<Vec<f32>>,
    header: Option<f32>,
    footer: Option<f32>,
}

impl SectionSpec {
    fn columns(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    fn widths(widths: &[f32]) -> Self {
        Self {
            columns: widths.len(),
            widths: Some(widths.to_vec()),
            ..Self::default()
        }
    }

    fn header(mut self, width: f32) -> Self {
        self.header = Some(width);
        self
    }

    fn footer(mut self, width: f32) -> Self {
        self.footer = Some(width);
        self
    }
}

impl Grid {
    fn new(sections: Vec<SectionSpec>) -> Self {
        Self {
            sections,
            queries: RefCell::new(Vec::new()),
        }
    }

    fn log(&self, query: String) {
        self.queries.borrow_mut().push(query);
    }
}

impl SectionMetrics for Grid {
    fn section_count(&self) -> usize {
        self.log("sections".into());
        self.sections.len()
    }

    fn column_count(&self, section: usize) -> usize {
        self.log(format!("columns {section}"));
        self.sections[section].columns
    }

    fn header_width(&self, section: usize) -> Option<f32> {
        self.log(format!("header {section}"));
        self.sections[section].header
    }

    fn footer_width(&self, section: usize) -> Option<f32> {
        self.log(format!("footer {section}"));
        self.sections[section].footer
    }

    fn column_width(&self, index_path: IndexPath) -> Option<f32> {
        self.log(format!("width {index_path}"));
        self.sections[index_path.section()]
            .widths
            .as_ref()
            .map(|widths| widths[index_path.column()])
    }
}

fn build(grid: &Grid) -> LayoutModel {
    LayoutModel::build(grid, &LayoutDefaults::default()).expect("valid layout")
}

fn assert_monotonic(layout: &LayoutModel) {
    let mut previous_end = 0.0_f32;
    for section in layout.sections() {
        assert!(previous_end <= section.header().start);
        assert!(section.header().start <= section.header().end);
        let offsets = section.column_offsets();
        assert_eq!(offsets[0], section.header().end);
        for pair in offsets.windows(2) {
            assert!(pair[0] <= pair[1], "column offsets must not decrease: {pair:?}");
        }
        assert_eq!(*offsets.last().unwrap(), section.footer().start);
        assert!(section.footer().start <= section.footer().end);
        previous_end = section.footer().end;
    }
    assert_eq!(layout.total_extent(), previous_end);
}

#[test]
fn single_section_of_default_columns() {
    let grid = Grid::new(vec![SectionSpec::columns(5)]);
    let layout = build(&grid);

    assert_eq!(layout.total_extent(), 220.0);
    assert_eq!(layout.column_span(IndexPath::new(0, 2)), Some(Span::new(88.0, 132.0)));
    let rect = layout.rect(IndexPath::new(0, 2)).unwrap();
    assert_eq!(rect.x, 88.0);
    assert_eq!(rect.max_x(), 132.0);
    assert_monotonic(&layout);
}

#[test]
fn headers_footers_and_empty_sections() {
    let grid = Grid::new(vec![
        SectionSpec::widths(&[50.0, 50.0, 50.0]).header(20.0),
        SectionSpec::columns(0).footer(10.0),
    ]);
    let layout = build(&grid);

    assert_eq!(layout.header_span(0), Some(Span::new(0.0, 20.0)));
    assert_eq!(layout.column_span(IndexPath::new(0, 0)), Some(Span::new(20.0, 70.0)));
    assert_eq!(layout.column_span(IndexPath::new(0, 1)), Some(Span::new(70.0, 120.0)));
    assert_eq!(layout.column_span(IndexPath::new(0, 2)), Some(Span::new(120.0, 170.0)));
    assert_eq!(layout.footer_span(0), Some(Span::new(170.0, 170.0)));
    assert_eq!(layout.header_span(1), Some(Span::new(170.0, 170.0)));
    assert_eq!(layout.footer_span(1), Some(Span::new(170.0, 180.0)));
    assert_eq!(layout.column_count(1), Some(0));
    assert_eq!(layout.total_extent(), 180.0);
    assert_monotonic(&layout);
}

#[test]
fn queries_follow_documented_order() {
    let grid = Grid::new(vec![SectionSpec::columns(2), SectionSpec::columns(1)]);
    build(&grid);
    assert_eq!(
        *grid.queries.borrow(),
        vec![
            "sections",
            "columns 0",
            "header 0",
            "footer 0",
            "width [0, 0]",
            "width [0, 1]",
            "columns 1",
            "header 1",
            "footer 1",
            "width [1, 0]",
        ]
    );
}

#[test]
fn no_sections_means_zero_extent() {
    let layout = build(&Grid::new(Vec::new()));
    assert_eq!(layout.section_count(), 0);
    assert_eq!(layout.total_extent(), 0.0);
    assert!(layout.index_paths_intersecting(0.0, 100.0).is_empty());
    assert_eq!(layout.index_path_at(0.0), None);
}

#[test]
fn defaults_apply_when_metrics_decline() {
    let grid = Grid::new(vec![SectionSpec::columns(2), SectionSpec::columns(1).header(5.0)]);
    let defaults = LayoutDefaults {
        column_width: 30.0,
        header_width: 8.0,
        footer_width: 2.0,
        cross_axis_extent: 60.0,
    };
    let layout = LayoutModel::build(&grid, &defaults).unwrap();

    assert_eq!(layout.header_span(0), Some(Span::new(0.0, 8.0)));
    assert_eq!(layout.column_span(IndexPath::new(0, 1)), Some(Span::new(38.0, 68.0)));
    assert_eq!(layout.footer_span(0), Some(Span::new(68.0, 70.0)));
    assert_eq!(layout.header_span(1), Some(Span::new(70.0, 75.0)));
    assert_eq!(layout.total_extent(), 107.0);
    assert_eq!(layout.rect(IndexPath::new(1, 0)).unwrap().height, 60.0);
}

#[test]
fn negative_width_is_rejected() {
    let grid = Grid::new(vec![SectionSpec::widths(&[10.0, -1.0])]);
    let err = LayoutModel::build(&grid, &LayoutDefaults::default()).unwrap_err();
    assert_eq!(
        err,
        TableError::InvalidLayoutInput {
            band: BandRef::Column(IndexPath::new(0, 1)),
            width: -1.0,
        }
    );

    let grid = Grid::new(vec![SectionSpec::columns(1).footer(-3.0)]);
    assert!(matches!(
        LayoutModel::build(&grid, &LayoutDefaults::default()),
        Err(TableError::InvalidLayoutInput {
            band: BandRef::Footer { section: 0 },
            ..
        })
    ));
}

#[test]
fn negative_default_is_rejected() {
    let defaults = LayoutDefaults {
        column_width: -44.0,
        ..LayoutDefaults::default()
    };
    let err = LayoutModel::build(&Grid::new(Vec::new()), &defaults).unwrap_err();
    assert!(matches!(
        err,
        TableError::InvalidLayoutInput {
            band: BandRef::Config("column_width"),
            ..
        }
    ));
}

#[test]
fn rect_is_none_out_of_bounds() {
    let layout = build(&Grid::new(vec![SectionSpec::columns(3)]));
    assert!(layout.rect(IndexPath::new(0, 3)).is_none());
    assert!(layout.rect(IndexPath::new(1, 0)).is_none());
    assert!(!layout.contains(IndexPath::new(0, 3)));
    assert!(layout.contains(IndexPath::new(0, 2)));
}

#[test]
fn window_query_returns_sorted_columns_and_bands() {
    let grid = Grid::new(vec![
        SectionSpec::columns(3).header(20.0).footer(10.0),
        SectionSpec::columns(3).header(20.0),
    ]);
    let layout = build(&grid);
    // Section 0: header [0,20) columns [20,64) [64,108) [108,152) footer [152,162)
    // Section 1: header [162,182) columns [182,226) [226,270) [270,314)

    let range = layout.index_paths_intersecting(100.0, 190.0);
    assert_eq!(
        range.columns,
        vec![
            IndexPath::new(0, 1),
            IndexPath::new(0, 2),
            IndexPath::new(1, 0),
        ]
    );
    assert_eq!(range.headers.as_slice(), &[1]);
    assert_eq!(range.footers.as_slice(), &[0]);

    let range = layout.index_paths_intersecting(0.0, 20.0);
    assert!(range.columns.is_empty());
    assert_eq!(range.headers.as_slice(), &[0]);
}

#[test]
fn window_edges_are_half_open() {
    let layout = build(&Grid::new(vec![SectionSpec::columns(5)]));
    let range = layout.index_paths_intersecting(44.0, 88.0);
    assert_eq!(range.columns, vec![IndexPath::new(0, 1)]);

    let range = layout.index_paths_intersecting(43.0, 89.0);
    assert_eq!(
        range.columns,
        vec![IndexPath::new(0, 0), IndexPath::new(0, 1), IndexPath::new(0, 2)]
    );
    assert!(layout.index_paths_intersecting(50.0, 50.0).is_empty());
    assert!(layout.index_paths_intersecting(220.0, 400.0).is_empty());
}

#[test]
fn zero_width_columns_are_never_visible() {
    let grid = Grid::new(vec![SectionSpec::widths(&[40.0, 0.0, 0.0, 40.0])]);
    let layout = build(&grid);
    assert_monotonic(&layout);

    let range = layout.index_paths_intersecting(0.0, 80.0);
    assert_eq!(range.columns, vec![IndexPath::new(0, 0), IndexPath::new(0, 3)]);
    assert_eq!(layout.index_path_at(40.0), Some(IndexPath::new(0, 3)));
}

#[test]
fn every_positive_width_column_round_trips() {
    let grid = Grid::new(vec![
        SectionSpec::widths(&[10.0, 25.5, 3.0]).header(7.0).footer(2.0),
        SectionSpec::columns(0).header(4.0),
        SectionSpec::widths(&[100.0, 0.5, 60.0, 12.0]).footer(9.0),
    ]);
    let layout = build(&grid);
    assert_monotonic(&layout);

    for (section, layout_section) in layout.sections().iter().enumerate() {
        for column in 0..layout_section.column_count() {
            let index_path = IndexPath::new(section, column);
            let span = layout.column_span(index_path).unwrap();
            let range = layout.index_paths_intersecting(span.start, span.end);
            assert!(
                range.columns.contains(&index_path),
                "{index_path} missing from its own window"
            );
            assert_eq!(layout.index_path_at(span.start), Some(index_path));
        }
    }
}

#[test]
fn index_path_at_skips_headers_and_footers() {
    let grid = Grid::new(vec![SectionSpec::columns(2).header(20.0).footer(10.0)]);
    let layout = build(&grid);
    assert_eq!(layout.index_path_at(5.0), None);
    assert_eq!(layout.index_path_at(20.0), Some(IndexPath::new(0, 0)));
    assert_eq!(layout.index_path_at(107.9), Some(IndexPath::new(0, 1)));
    assert_eq!(layout.index_path_at(110.0), None);
    assert_eq!(layout.index_path_at(500.0), None);
}
