//! Error taxonomy for table layout, reuse and queries.

use std::fmt;

use crate::IndexPath;

/// Identifies which band of the layout produced a width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandRef {
    Header { section: usize },
    Column(IndexPath),
    Footer { section: usize },
    /// A table-wide configuration default, named by its option.
    Config(&'static str),
}

impl fmt::Display for BandRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandRef::Header { section } => write!(f, "header of section {section}"),
            BandRef::Column(index_path) => write!(f, "column {index_path}"),
            BandRef::Footer { section } => write!(f, "footer of section {section}"),
            BandRef::Config(option) => write!(f, "configured {option}"),
        }
    }
}

/// Target of a lookup that fell outside the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTarget {
    Section(usize),
    IndexPath(IndexPath),
}

impl fmt::Display for RangeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeTarget::Section(section) => write!(f, "section {section}"),
            RangeTarget::IndexPath(index_path) => write!(f, "index path {index_path}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// A width answered by the data source, delegate or configuration cannot
    /// be laid out. Widths are never clamped.
    #[error("invalid layout input: {band} has width {width}")]
    InvalidLayoutInput { band: BandRef, width: f32 },

    #[error("{target} is out of range")]
    OutOfRange { target: RangeTarget },

    #[error("invalid state: {reason}")]
    InvalidState { reason: &'static str },
}

impl TableError {
    pub fn section_out_of_range(section: usize) -> Self {
        TableError::OutOfRange {
            target: RangeTarget::Section(section),
        }
    }

    pub fn index_path_out_of_range(index_path: IndexPath) -> Self {
        TableError::OutOfRange {
            target: RangeTarget::IndexPath(index_path),
        }
    }

    /// Checks a width answer, rejecting negative and non-finite values.
    pub fn check_width(band: BandRef, width: f32) -> Result<f32, TableError> {
        if width.is_finite() && width >= 0.0 {
            Ok(width)
        } else {
            Err(TableError::InvalidLayoutInput { band, width })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_width_accepts_zero_and_positive() {
        assert_eq!(TableError::check_width(BandRef::Config("column_width"), 0.0), Ok(0.0));
        assert_eq!(
            TableError::check_width(BandRef::Header { section: 0 }, 12.5),
            Ok(12.5)
        );
    }

    #[test]
    fn check_width_rejects_negative_and_nan() {
        let band = BandRef::Column(IndexPath::new(1, 2));
        assert!(matches!(
            TableError::check_width(band, -1.0),
            Err(TableError::InvalidLayoutInput { width, .. }) if width == -1.0
        ));
        assert!(TableError::check_width(band, f32::NAN).is_err());
        assert!(TableError::check_width(band, f32::INFINITY).is_err());
    }

    #[test]
    fn messages_name_the_offending_band() {
        let err = TableError::InvalidLayoutInput {
            band: BandRef::Footer { section: 3 },
            width: -4.0,
        };
        assert_eq!(err.to_string(), "invalid layout input: footer of section 3 has width -4");
        assert_eq!(
            TableError::index_path_out_of_range(IndexPath::new(0, 9)).to_string(),
            "index path [0, 9] is out of range"
        );
    }
}
