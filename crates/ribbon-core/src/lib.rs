#![doc = r"Core value types for the Ribbon horizontal table view."]

pub extern crate self as ribbon_core;

pub mod collections;
mod error;
mod index_path;
mod view;

pub use error::{BandRef, RangeTarget, TableError};
pub use index_path::IndexPath;
pub use view::{AsAny, CellId, ViewContent, ViewKey};

pub mod prelude {
    pub use crate::error::TableError;
    pub use crate::index_path::IndexPath;
    pub use crate::view::{CellId, ViewContent, ViewKey};
}
