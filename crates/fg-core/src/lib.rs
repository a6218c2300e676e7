// ABOUTME: Shared types and configuration for figgrid.
// ABOUTME: Defines geometry, margins, layout errors, the canvas boundary, and config files.

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod margin;

pub use canvas::{Canvas, NullCanvas};
pub use color::Color;
pub use config::{BandColors, ConfigError, Settings};
pub use error::LayoutError;
pub use figure::{CellOverride, EdgeTemplates, FigureSpec, PanelTemplate};
pub use geometry::{Rect, Size};
pub use margin::{Margin, MarginSpec};
