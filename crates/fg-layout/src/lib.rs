// ABOUTME: Panel grid layout engine for figures measured in inches.
// ABOUTME: Computes canvas size and absolute panel rectangles from sizes, aspects, and margins.

mod batch;
mod edge;
mod figure;
mod grid;
mod layout;
mod panel;

pub use batch::Batch;
pub use edge::Edge;
pub use grid::Grid;
pub use layout::{Layout, MarginBands, PlacedPanel};
pub use panel::{CellIndex, Panel, PanelId};
