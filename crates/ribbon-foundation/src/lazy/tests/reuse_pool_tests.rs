use super::ReusePool;
use crate::lazy::TableCell;
use ribbon_core::{IndexPath, TableError, ViewContent};
use ribbon_ui_graphics::Rect;

struct Swatch {
    tint: u32,
}

impl ViewContent for Swatch {
    fn prepare_for_reuse(&mut self) {
        self.tint = 0;
    }
}

fn swatch(identifier: &str, tint: u32) -> TableCell {
    TableCell::new(identifier, Swatch { tint })
}

#[test]
fn checkout_on_empty_pool_returns_none() {
    let mut pool = ReusePool::new();
    assert!(pool.checkout("X").is_none());
    assert!(pool.is_empty());
}

#[test]
fn checkout_after_checkin_returns_a_cell() {
    let mut pool = ReusePool::new();
    let cell = swatch("X", 7);
    let id = cell.id();
    pool.checkin(cell).expect("detached cell is accepted");
    assert_eq!(pool.len(), 1);
    assert!(pool.contains(id));

    let back = pool.checkout("X").expect("pooled cell");
    assert_eq!(back.id(), id);
    // Content is untouched by the pool.
    assert_eq!(back.view::<Swatch>().map(|s| s.tint), Some(7));
    assert!(pool.is_empty());
    assert!(pool.checkout("X").is_none());
}

#[test]
fn identifiers_are_kept_apart() {
    let mut pool = ReusePool::new();
    pool.checkin(swatch("wide", 1)).unwrap();
    pool.checkin(swatch("narrow", 2)).unwrap();
    pool.checkin(swatch("narrow", 3)).unwrap();

    assert_eq!(pool.len_for("wide"), 1);
    assert_eq!(pool.len_for("narrow"), 2);
    assert_eq!(pool.len_for("missing"), 0);

    let cell = pool.checkout("wide").unwrap();
    assert_eq!(cell.reuse_identifier(), Some("wide"));
    assert!(pool.checkout("wide").is_none());
    assert_eq!(pool.len(), 2);
}

#[test]
fn checkin_rejects_attached_cell() {
    let mut pool = ReusePool::new();
    let mut cell = swatch("X", 1);
    cell.attach(IndexPath::new(0, 0), Rect::new(0.0, 0.0, 44.0, 10.0));

    let err = pool.checkin(cell).unwrap_err();
    assert!(matches!(err, TableError::InvalidState { .. }));
    assert!(pool.is_empty());
}

#[test]
fn checkin_rejects_cell_without_identifier() {
    let mut pool = ReusePool::new();
    let err = pool.checkin(TableCell::unique(Swatch { tint: 3 })).unwrap_err();
    assert!(matches!(err, TableError::InvalidState { .. }));
}

#[test]
fn clear_drops_everything() {
    let mut pool = ReusePool::new();
    pool.checkin(swatch("a", 1)).unwrap();
    pool.checkin(swatch("b", 1)).unwrap();
    pool.clear();
    assert!(pool.is_empty());
    assert_eq!(pool.len_for("a"), 0);
}

#[test]
fn counts_track_every_identifier() {
    let mut pool = ReusePool::new();
    let first = swatch("wide", 1);
    let first_id = first.id();
    let second = swatch("narrow", 2);
    let second_id = second.id();
    pool.checkin(first).unwrap();
    pool.checkin(second).unwrap();
    pool.checkin(swatch("narrow", 3)).unwrap();
    assert_eq!(pool.len(), 3);
    assert!(pool.contains(first_id));
    assert!(pool.contains(second_id));

    let taken = pool.checkout("wide").unwrap();
    assert_eq!(taken.id(), first_id);
    assert!(!pool.contains(first_id));
    assert_eq!(pool.len(), 2);
    assert!(!pool.is_empty());

    pool.checkout("narrow").unwrap();
    pool.checkout("narrow").unwrap();
    assert_eq!(pool.len(), 0);
    assert!(pool.is_empty());
    assert!(!pool.contains(second_id));
}
