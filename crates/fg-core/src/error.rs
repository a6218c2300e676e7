// ABOUTME: Error kinds raised by the layout engine.
// ABOUTME: All variants are local, synchronous, and recoverable by the caller.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid {field}: {value} (must be finite and non-negative)")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("Cannot reshape {panels} panels into {rows}x{cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        panels: usize,
    },

    #[error("A {rows}x{cols} grid does not fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Reject negative, NaN, and infinite lengths.
pub fn check_length(field: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension { field, value })
    }
}

/// Aspect ratios must be strictly positive.
pub fn check_aspect(value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension {
            field: "aspect",
            value,
        })
    }
}
