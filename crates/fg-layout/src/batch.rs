// ABOUTME: Scoped access to a grid's panels without per-edit recomputation.
// ABOUTME: The grid recomputes once when the batch closure returns.

use fg_core::{LayoutError, PanelTemplate};

use crate::edge::{Edge, EdgeSets};
use crate::grid::Slot;
use crate::panel::Panel;

/// Mutable view of every panel in a grid, handed out by [`Grid::batch`](crate::Grid::batch).
///
/// Structural changes (reshape, append) are not available here; only panel state
/// can be edited.
pub struct Batch<'a, S> {
    rows: usize,
    cols: usize,
    slots: &'a mut [Slot<S>],
    edges: &'a EdgeSets,
}

impl<'a, S> Batch<'a, S> {
    pub(crate) fn new(
        rows: usize,
        cols: usize,
        slots: &'a mut [Slot<S>],
        edges: &'a EdgeSets,
    ) -> Self {
        Self {
            rows,
            cols,
            slots,
            edges,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, LayoutError> {
        crate::grid::offset(self.rows, self.cols, row, col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&Panel, LayoutError> {
        let offset = self.offset(row, col)?;
        Ok(&self.slots[offset].panel)
    }

    pub fn panel_mut(&mut self, row: usize, col: usize) -> Result<&mut Panel, LayoutError> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.slots[offset].panel)
    }

    /// All panels, row-major
    pub fn panels_mut(&mut self) -> impl Iterator<Item = &mut Panel> + '_ {
        self.slots.iter_mut().map(|slot| &mut slot.panel)
    }

    /// Run `f` on every panel of one edge, stopping at the first error
    pub fn for_edge<F>(&mut self, edge: Edge, mut f: F) -> Result<(), LayoutError>
    where
        F: FnMut(&mut Panel) -> Result<(), LayoutError>,
    {
        let edges = self.edges;
        for cell in edges.get(edge) {
            let offset = self.offset(cell.row, cell.col)?;
            f(&mut self.slots[offset].panel)?;
        }
        Ok(())
    }

    pub fn apply_all(&mut self, template: &PanelTemplate) -> Result<(), LayoutError> {
        for panel in self.panels_mut() {
            panel.apply(template)?;
        }
        Ok(())
    }

    pub fn apply_edge(&mut self, edge: Edge, template: &PanelTemplate) -> Result<(), LayoutError> {
        self.for_edge(edge, |panel| panel.apply(template))
    }
}
