//! Grid-shaped data source with labelled cells.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ribbon_core::{IndexPath, ViewContent};
use ribbon_ui::{CellProvider, TableCell, TableDataSource};

pub const GRID_CELL_IDENTIFIER: &str = "grid-cell";

/// Cell body carrying the label of the column it is bound to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelCell {
    pub text: String,
    /// How many times the cell was prepared for reuse.
    pub reuses: usize,
}

impl ViewContent for LabelCell {
    fn prepare_for_reuse(&mut self) {
        self.reuses += 1;
        self.text.clear();
    }
}

pub fn label_for(index_path: IndexPath) -> String {
    format!("S{}C{}", index_path.section(), index_path.column())
}

/// Data source with a mutable column count per section.
///
/// Cells are dequeued under [`GRID_CELL_IDENTIFIER`] (or built fresh) and
/// labelled with [`label_for`].
#[derive(Debug)]
pub struct GridDataSource {
    sections: RefCell<Vec<usize>>,
    identifier: Option<String>,
    cell_requests: Cell<usize>,
}

impl GridDataSource {
    pub fn new(columns_per_section: impl Into<Vec<usize>>) -> Rc<Self> {
        Rc::new(Self {
            sections: RefCell::new(columns_per_section.into()),
            identifier: Some(GRID_CELL_IDENTIFIER.to_string()),
            cell_requests: Cell::new(0),
        })
    }

    pub fn uniform(sections: usize, columns: usize) -> Rc<Self> {
        Self::new(vec![columns; sections])
    }

    /// Builds cells without a reuse identifier; they are never pooled.
    pub fn unkeyed(columns_per_section: impl Into<Vec<usize>>) -> Rc<Self> {
        Rc::new(Self {
            sections: RefCell::new(columns_per_section.into()),
            identifier: None,
            cell_requests: Cell::new(0),
        })
    }

    /// Replaces the table shape. Takes effect on the next `reload_data`.
    pub fn set_sections(&self, columns_per_section: impl Into<Vec<usize>>) {
        *self.sections.borrow_mut() = columns_per_section.into();
    }

    /// Number of `cell_for_column` calls so far.
    pub fn cell_requests(&self) -> usize {
        self.cell_requests.get()
    }
}

impl TableDataSource for GridDataSource {
    fn number_of_sections(&self) -> usize {
        self.sections.borrow().len()
    }

    fn number_of_columns(&self, section: usize) -> usize {
        self.sections.borrow().get(section).copied().unwrap_or(0)
    }

    fn cell_for_column(&self, cells: &mut CellProvider<'_>, index_path: IndexPath) -> TableCell {
        self.cell_requests.set(self.cell_requests.get() + 1);
        let mut cell = match &self.identifier {
            Some(identifier) => cells
                .dequeue_reusable_cell(identifier)
                .unwrap_or_else(|| TableCell::new(identifier.as_str(), LabelCell::default())),
            None => TableCell::unique(LabelCell::default()),
        };
        if let Some(label) = cell.view_mut::<LabelCell>() {
            label.text = label_for(index_path);
        }
        cell
    }
}

#[cfg(test)]
#[path = "tests/data_tests.rs"]
mod tests;
