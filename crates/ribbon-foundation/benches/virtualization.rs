use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ribbon_foundation::lazy::{LayoutDefaults, LayoutModel, SectionMetrics, VisibilityTracker};
use ribbon_foundation::IndexPath;
use ribbon_ui_graphics::Span;

struct WideTable;

impl SectionMetrics for WideTable {
    fn section_count(&self) -> usize {
        200
    }

    fn column_count(&self, section: usize) -> usize {
        250 + section % 50
    }

    fn header_width(&self, _section: usize) -> Option<f32> {
        Some(24.0)
    }

    fn column_width(&self, index_path: IndexPath) -> Option<f32> {
        Some(40.0 + (index_path.column() % 5) as f32 * 8.0)
    }
}

fn build_layout(c: &mut Criterion) {
    c.bench_function("build_layout_200_sections", |b| {
        b.iter(|| {
            LayoutModel::build(black_box(&WideTable), &LayoutDefaults::default())
                .expect("layout")
        });
    });
}

fn scroll_ticks(c: &mut Criterion) {
    let layout = LayoutModel::build(&WideTable, &LayoutDefaults::default()).expect("layout");
    let extent = layout.total_extent();

    c.bench_function("visibility_update_per_tick", |b| {
        let mut tracker = VisibilityTracker::new();
        let mut offset = 0.0_f32;
        b.iter(|| {
            offset = (offset + 7.5) % (extent - 800.0);
            black_box(tracker.update(Span::new(offset, offset + 800.0), &layout));
        });
    });
}

criterion_group!(benches, build_layout, scroll_ticks);
criterion_main!(benches);
