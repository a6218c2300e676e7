// ABOUTME: Canvas backends for the figgrid layout engine.
// ABOUTME: A recording canvas for inspection and tests, and an SVG preview writer.

pub mod recording;
pub mod svg;

pub use recording::{CanvasOp, RecordingCanvas};
pub use svg::{Decoration, SvgCanvas};

/// Opaque handle for a rectangle placed on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("Invalid dpi {0} (must be finite and positive)")]
    InvalidDpi(f64),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
