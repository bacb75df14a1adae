//! Table widgets.

pub mod horizontal_table;
pub mod table_data_source;
pub mod table_delegate;

pub use horizontal_table::{
    HorizontalTableView, SupplementaryKind, SupplementaryView, TableConfig, TableState, TableStats,
};
pub use table_data_source::{CellProvider, TableDataSource};
pub use table_delegate::TableDelegate;
