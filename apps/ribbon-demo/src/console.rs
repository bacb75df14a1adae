//! Host viewport that draws the visible strip as text.

use ribbon_core::collections::HashMap;
use ribbon_ui::{HorizontalTableView, HostViewport, Rect, Size, ViewKey};

use crate::timeline::{DayHeader, SlotView};

pub struct ConsoleViewport {
    offset: f32,
    size: Size,
    content_extent: f32,
    placed: HashMap<ViewKey, Rect>,
    attach_count: usize,
}

impl ConsoleViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            offset: 0.0,
            size: Size::new(width, height),
            content_extent: 0.0,
            placed: HashMap::default(),
            attach_count: 0,
        }
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_extent - self.size.width).max(0.0)
    }

    pub fn attach_count(&self) -> usize {
        self.attach_count
    }
}

impl HostViewport for ConsoleViewport {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn viewport_size(&self) -> Size {
        self.size
    }

    fn set_content_extent(&mut self, extent: f32) {
        self.content_extent = extent;
    }

    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        // No animation support: always jump.
        log::debug!("scroll to {offset} (animated: {animated})");
        self.set_offset(offset);
    }

    fn attach_view(&mut self, key: ViewKey, frame: Rect) {
        self.attach_count += 1;
        self.placed.insert(key, frame);
    }

    fn detach_view(&mut self, key: ViewKey) {
        self.placed.remove(&key);
    }
}

/// Renders headers and cells left to right, e.g. `[Mon] 06:00 07:00`.
pub fn render_strip(table: &HorizontalTableView<ConsoleViewport>) -> String {
    let mut items: Vec<(f32, String)> = Vec::new();
    for section in 0..table.number_of_sections() {
        if let Some(header) = table.header_view(section) {
            if let Some(day) = header.view::<DayHeader>() {
                items.push((header.frame().min_x(), format!("[{}]", day.title)));
            }
        }
    }
    for cell in table.visible_cells() {
        if let Some(slot) = cell.view::<SlotView>() {
            items.push((cell.frame().min_x(), slot.label.clone()));
        }
    }
    items.sort_by(|a, b| a.0.total_cmp(&b.0));

    let offset = table.host().scroll_offset();
    let body: Vec<String> = items.into_iter().map(|(_, text)| text).collect();
    format!("{offset:>7.1} | {}", body.join(" "))
}
