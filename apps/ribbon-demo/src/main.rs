mod console;
mod timeline;

use std::rc::Rc;

use anyhow::Context;
use ribbon_ui::{HorizontalTableView, HostViewport, IndexPath, TableConfig};

use console::{render_strip, ConsoleViewport};
use timeline::{Timeline, TimelineDelegate};

const DEFAULT_SLOTS: usize = 24;

fn slots_per_day() -> anyhow::Result<usize> {
    match std::env::var("RIBBON_DEMO_COLUMNS") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("RIBBON_DEMO_COLUMNS must be a column count, got {raw:?}")),
        Err(_) => Ok(DEFAULT_SLOTS),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let slots = slots_per_day()?;
    let source = Rc::new(Timeline::new(3, slots));
    let delegate = Rc::new(TimelineDelegate);

    let config = TableConfig::new().column_width(48.0);
    let mut table = HorizontalTableView::with_config(ConsoleViewport::new(360.0, 32.0), config)?;
    table.set_data_source(&source);
    table.set_delegate(&delegate);
    table.reload_data().context("initial reload")?;

    println!("=== Ribbon horizontal table ===");
    println!(
        "{} days x {} slots, content width {}",
        table.number_of_sections(),
        slots,
        table.content_extent()
    );
    println!("{}", render_strip(&table));

    // Drag through the first day.
    for _ in 0..8 {
        let next = table.host().scroll_offset() + 130.0;
        table.host_mut().set_offset(next);
        table.did_scroll();
        println!("{}", render_strip(&table));
    }

    if slots > 0 {
        let target = IndexPath::new(2, slots / 2);
        table.scroll_to_index_path(target, false)?;
        println!("jump to {target}:");
        println!("{}", render_strip(&table));
    }

    let tap = table.host().scroll_offset() + 10.0;
    if table.select_column_at(tap).is_none() {
        log::info!("tap at {tap} hit a header");
    }

    let stats = table.stats();
    println!(
        "cells in use {}, pooled {}, created {}, reused {}, host attaches {}",
        stats.cells_in_use,
        stats.cells_in_pool,
        stats.total_created,
        stats.reuse_count,
        table.host().attach_count()
    );
    Ok(())
}
