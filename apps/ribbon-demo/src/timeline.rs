//! A week of hourly slots: one section per day, one column per slot.

use ribbon_ui::{CellProvider, IndexPath, TableCell, TableDataSource, TableDelegate, ViewContent};

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const SLOT_IDENTIFIER: &str = "slot";

pub struct SlotView {
    pub label: String,
}

impl ViewContent for SlotView {
    fn prepare_for_reuse(&mut self) {
        self.label.clear();
    }
}

pub struct DayHeader {
    pub title: &'static str,
}

impl ViewContent for DayHeader {}

pub struct Timeline {
    days: usize,
    slots_per_day: usize,
}

impl Timeline {
    pub fn new(days: usize, slots_per_day: usize) -> Self {
        Self {
            days: days.min(DAYS.len()),
            slots_per_day,
        }
    }
}

impl TableDataSource for Timeline {
    fn number_of_sections(&self) -> usize {
        self.days
    }

    fn number_of_columns(&self, _section: usize) -> usize {
        self.slots_per_day
    }

    fn cell_for_column(&self, cells: &mut CellProvider<'_>, index_path: IndexPath) -> TableCell {
        let mut cell = cells.dequeue_reusable_cell(SLOT_IDENTIFIER).unwrap_or_else(|| {
            TableCell::new(
                SLOT_IDENTIFIER,
                SlotView {
                    label: String::new(),
                },
            )
        });
        if let Some(slot) = cell.view_mut::<SlotView>() {
            slot.label = format!("{:02}:00", index_path.column() % 24);
        }
        cell
    }
}

/// Wide prime-time slots, day headers and a selection log line.
pub struct TimelineDelegate;

impl TableDelegate for TimelineDelegate {
    fn width_for_column(&self, index_path: IndexPath) -> Option<f32> {
        let hour = index_path.column() % 24;
        (18..22).contains(&hour).then_some(88.0)
    }

    fn width_for_header(&self, _section: usize) -> Option<f32> {
        Some(40.0)
    }

    fn view_for_header(&self, section: usize) -> Option<Box<dyn ViewContent>> {
        let title = *DAYS.get(section)?;
        Some(Box::new(DayHeader { title }))
    }

    fn did_select_column(&self, index_path: IndexPath) {
        let day = DAYS[index_path.section() % DAYS.len()];
        log::info!("selected {day} slot {}", index_path.column());
    }
}
