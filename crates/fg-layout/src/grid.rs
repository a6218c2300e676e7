// ABOUTME: Rectangular arrangement of panels that owns its canvas collaborator.
// ABOUTME: Every mutation recomputes geometry and re-places surfaces before returning.

use std::fmt;

use fg_core::error::check_length;
use fg_core::{Canvas, LayoutError, NullCanvas, PanelTemplate, Rect, Size};

use crate::batch::Batch;
use crate::edge::{Edge, EdgeSets};
use crate::layout::{self, Geometry, Layout, MarginBands, PlacedPanel};
use crate::panel::{CellIndex, Panel, PanelId};

/// A panel plus the drawable surface the canvas handed out for it
pub(crate) struct Slot<S> {
    pub panel: Panel,
    pub surface: Option<S>,
}

impl<S> Slot<S> {
    fn new(panel: Panel) -> Self {
        Self {
            panel,
            surface: None,
        }
    }
}

pub(crate) fn offset(rows: usize, cols: usize, row: usize, col: usize) -> Result<usize, LayoutError> {
    if row < rows && col < cols {
        Ok(row * cols + col)
    } else {
        Err(LayoutError::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        })
    }
}

fn check_shape(rows: usize, cols: usize) -> Result<(), LayoutError> {
    if rows == 0 {
        return Err(LayoutError::InvalidDimension {
            field: "rows",
            value: 0.0,
        });
    }
    if cols == 0 {
        return Err(LayoutError::InvalidDimension {
            field: "cols",
            value: 0.0,
        });
    }
    Ok(())
}

/// Empty slot storage with room for a `rows` x `cols` grid
fn reserve_slots<S>(rows: usize, cols: usize) -> Result<Vec<Slot<S>>, LayoutError> {
    let too_large = || LayoutError::TooLarge { rows, cols };
    let len = rows.checked_mul(cols).ok_or_else(too_large)?;
    let mut slots = Vec::new();
    slots.try_reserve_exact(len).map_err(|_| too_large())?;
    Ok(slots)
}

/// Panels addressed by `(row, col)`, row 0 at the top.
///
/// Geometry is measured in inches from the bottom-left corner of the canvas. The
/// grid recomputes all positions after every mutation and pushes the results to
/// its [`Canvas`]: the canvas is resized when the derived size changes, a surface
/// is placed the first time a panel has a non-empty content area, and that same
/// surface is repositioned on every later pass.
pub struct Grid<C: Canvas = NullCanvas> {
    rows: usize,
    cols: usize,
    /// Row-major
    slots: Vec<Slot<C::Surface>>,
    edges: EdgeSets,
    geometry: Geometry,
    canvas: C,
    handle: C::Handle,
    canvas_size: Size,
    next_id: u64,
}

impl Grid<NullCanvas> {
    /// A grid without a rendering backend
    pub fn detached(rows: usize, cols: usize) -> Result<Self, LayoutError> {
        Self::new(rows, cols, NullCanvas)
    }
}

impl<C: Canvas> Grid<C> {
    pub fn new(rows: usize, cols: usize, canvas: C) -> Result<Self, LayoutError> {
        Self::with_size_hint(rows, cols, canvas, Size::ZERO)
    }

    /// Create the canvas at `hint`; it is resized as soon as the panels call for another size
    pub fn with_size_hint(
        rows: usize,
        cols: usize,
        mut canvas: C,
        hint: Size,
    ) -> Result<Self, LayoutError> {
        check_shape(rows, cols)?;
        check_length("canvas width", hint.width)?;
        check_length("canvas height", hint.height)?;
        let mut slots = reserve_slots(rows, cols)?;
        slots.resize_with(rows * cols, || Slot::new(Panel::new()));
        let handle = canvas.create_canvas(hint.width, hint.height);

        let mut grid = Self {
            rows,
            cols,
            slots,
            edges: EdgeSets::default(),
            geometry: Geometry::default(),
            canvas,
            handle,
            canvas_size: hint,
            next_id: 0,
        };
        grid.restructure();
        tracing::debug!("Created {}x{} grid", rows, cols);
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of panels, always `rows * cols`
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, LayoutError> {
        offset(self.rows, self.cols, row, col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&Panel, LayoutError> {
        let offset = self.offset(row, col)?;
        Ok(&self.slots[offset].panel)
    }

    /// All panels, row-major
    pub fn panels(&self) -> impl Iterator<Item = &Panel> + '_ {
        self.slots.iter().map(|slot| &slot.panel)
    }

    pub fn row(&self, row: usize) -> Result<impl Iterator<Item = &Panel> + '_, LayoutError> {
        let start = self.offset(row, 0)?;
        Ok(self.slots[start..start + self.cols]
            .iter()
            .map(|slot| &slot.panel))
    }

    /// Cells on one edge: columns top to bottom, rows left to right
    pub fn edge(&self, edge: Edge) -> &[CellIndex] {
        self.edges.get(edge)
    }

    pub fn edge_panels(&self, edge: Edge) -> impl Iterator<Item = &Panel> + '_ {
        self.edges
            .get(edge)
            .iter()
            .map(|cell| &self.slots[cell.row * self.cols + cell.col].panel)
    }

    /// Width of the widest row
    pub fn canvas_width(&self) -> f64 {
        self.canvas_size.width
    }

    /// Sum of the row heights
    pub fn canvas_height(&self) -> f64 {
        self.canvas_size.height
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Height of each row (its tallest panel footprint), top to bottom
    pub fn row_heights(&self) -> &[f64] {
        &self.geometry.row_heights
    }

    /// Absolute content rectangle of a panel
    pub fn rect(&self, row: usize, col: usize) -> Result<Rect, LayoutError> {
        let offset = self.offset(row, col)?;
        Ok(self.geometry.rects[offset])
    }

    /// Offset of a panel's content area from the canvas origin (bottom-left)
    pub fn position(&self, row: usize, col: usize) -> Result<(f64, f64), LayoutError> {
        self.rect(row, col).map(|rect| rect.origin())
    }

    pub fn margin_bands(&self, row: usize, col: usize) -> Result<MarginBands, LayoutError> {
        let offset = self.offset(row, col)?;
        Ok(MarginBands::around(
            self.geometry.rects[offset],
            self.slots[offset].panel.margin(),
        ))
    }

    fn extent<F>(&self, footprint: F) -> Size
    where
        F: for<'p> Fn(&'p Panel) -> Size,
    {
        let panels: Vec<&Panel> = self.panels().collect();
        layout::extent(self.cols, &panels, footprint)
    }

    /// Canvas size the margins alone would need, ignoring content
    pub fn spacing_size(&self) -> Size {
        self.extent(Panel::spacing_size)
    }

    pub fn spacing_width(&self) -> f64 {
        self.spacing_size().width
    }

    pub fn spacing_height(&self) -> f64 {
        self.spacing_size().height
    }

    pub fn layout(&self) -> Layout {
        let panels = self
            .slots
            .iter()
            .zip(&self.geometry.rects)
            .enumerate()
            .map(|(i, (slot, rect))| PlacedPanel {
                id: slot.panel.id(),
                cell: CellIndex::new(i / self.cols, i % self.cols),
                rect: *rect,
                margin: *slot.panel.margin(),
            })
            .collect();

        Layout {
            rows: self.rows,
            cols: self.cols,
            canvas: self.canvas_size,
            panels,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_handle(&self) -> &C::Handle {
        &self.handle
    }

    /// The surface placed for a panel, if its content area has ever been non-empty
    pub fn surface(&self, row: usize, col: usize) -> Result<Option<&C::Surface>, LayoutError> {
        let offset = self.offset(row, col)?;
        Ok(self.slots[offset].surface.as_ref())
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Edit panels in a scope and recompute once when it ends, even on error
    pub fn batch<R, F>(&mut self, f: F) -> Result<R, LayoutError>
    where
        F: FnOnce(&mut Batch<'_, C::Surface>) -> Result<R, LayoutError>,
    {
        let result = {
            let mut batch = Batch::new(self.rows, self.cols, &mut self.slots, &self.edges);
            f(&mut batch)
        };
        self.relayout();
        result
    }

    /// Edit one panel
    pub fn update<R, F>(&mut self, row: usize, col: usize, f: F) -> Result<R, LayoutError>
    where
        F: FnOnce(&mut Panel) -> Result<R, LayoutError>,
    {
        self.offset(row, col)?;
        self.batch(|batch| f(batch.panel_mut(row, col)?))
    }

    pub fn update_all<F>(&mut self, mut f: F) -> Result<(), LayoutError>
    where
        F: FnMut(&mut Panel) -> Result<(), LayoutError>,
    {
        self.batch(|batch| batch.panels_mut().try_for_each(&mut f))
    }

    pub fn update_edge<F>(&mut self, edge: Edge, f: F) -> Result<(), LayoutError>
    where
        F: FnMut(&mut Panel) -> Result<(), LayoutError>,
    {
        self.batch(|batch| batch.for_edge(edge, f))
    }

    /// Redistribute the existing panels row-major into a new shape.
    ///
    /// The panel count must stay the same. Panels keep their state and surfaces but
    /// may land in a different cell; callers are responsible for that.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<(), LayoutError> {
        let panels = self.slots.len();
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(panels) {
            return Err(LayoutError::ShapeMismatch { rows, cols, panels });
        }
        self.rows = rows;
        self.cols = cols;
        self.restructure();
        tracing::debug!("Reshaped grid to {}x{}", rows, cols);
        Ok(())
    }

    /// Add `count` rows at the bottom
    pub fn append_rows(
        &mut self,
        count: usize,
        template: Option<&PanelTemplate>,
    ) -> Result<(), LayoutError> {
        let rows = self.rows.saturating_add(count);
        let mut slots = reserve_slots(rows, self.cols)?;
        let fresh = fresh_panels(count * self.cols, template)?;

        slots.append(&mut self.slots);
        slots.extend(fresh.into_iter().map(Slot::new));
        self.slots = slots;
        self.rows = rows;
        self.restructure();
        tracing::debug!("Appended {} rows, grid is now {}x{}", count, self.rows, self.cols);
        Ok(())
    }

    /// Add `count` columns on the right
    pub fn append_cols(
        &mut self,
        count: usize,
        template: Option<&PanelTemplate>,
    ) -> Result<(), LayoutError> {
        let cols = self.cols.saturating_add(count);
        let mut slots = reserve_slots(self.rows, cols)?;
        let mut fresh = fresh_panels(count * self.rows, template)?.into_iter();
        let mut old = std::mem::take(&mut self.slots).into_iter();

        for _ in 0..self.rows {
            slots.extend(old.by_ref().take(self.cols));
            slots.extend(fresh.by_ref().take(count).map(Slot::new));
        }
        debug_assert!(old.next().is_none());

        self.slots = slots;
        self.cols = cols;
        self.restructure();
        tracing::debug!("Appended {} columns, grid is now {}x{}", count, self.rows, self.cols);
        Ok(())
    }

    /// Put `panel` into a cell and return the panel it displaces, detached.
    ///
    /// The incoming panel gets a fresh id from this grid. The cell's surface is
    /// kept and repositioned for it.
    pub fn replace(&mut self, row: usize, col: usize, mut panel: Panel) -> Result<Panel, LayoutError> {
        let offset = self.offset(row, col)?;
        panel.set_id(self.allocate_id());
        let mut old = std::mem::replace(&mut self.slots[offset].panel, panel);
        old.set_cell(None);
        self.relayout();
        Ok(old)
    }

    fn allocate_id(&mut self) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Recompute edges after a change of shape, then recompute geometry
    fn restructure(&mut self) {
        debug_assert_eq!(self.rows * self.cols, self.slots.len());
        self.edges = EdgeSets::compute(self.rows, self.cols);
        self.relayout();
    }

    /// Stamp every panel with its cell, and an id if it has none yet.
    ///
    /// Panels can be swapped or overwritten through `&mut Panel`, so this runs on
    /// every pass rather than only on structural changes.
    fn adopt_panels(&mut self) {
        let cols = self.cols;
        for i in 0..self.slots.len() {
            if self.slots[i].panel.id().is_none() {
                let id = self.allocate_id();
                self.slots[i].panel.set_id(id);
            }
            self.slots[i]
                .panel
                .set_cell(Some(CellIndex::new(i / cols, i % cols)));
        }
    }

    fn relayout(&mut self) {
        self.adopt_panels();
        let geometry = {
            let panels: Vec<&Panel> = self.panels().collect();
            layout::compute(self.rows, self.cols, &panels)
        };

        if geometry.canvas != self.canvas_size {
            tracing::debug!(
                "Resizing canvas to {:.3}\" x {:.3}\"",
                geometry.canvas.width,
                geometry.canvas.height
            );
            self.canvas
                .resize_canvas(&self.handle, geometry.canvas.width, geometry.canvas.height);
            self.canvas_size = geometry.canvas;
        }

        for (slot, rect) in self.slots.iter_mut().zip(&geometry.rects) {
            if let Some(surface) = &slot.surface {
                self.canvas.reposition_rectangle(surface, *rect);
            } else if !rect.is_degenerate() {
                tracing::trace!("Placing panel {:?} at {:?}", slot.panel.cell(), rect);
                slot.surface = Some(self.canvas.place_rectangle(&self.handle, *rect));
            }
        }

        self.geometry = geometry;
    }
}

fn fresh_panels(count: usize, template: Option<&PanelTemplate>) -> Result<Vec<Panel>, LayoutError> {
    (0..count)
        .map(|_| match template {
            Some(template) => Panel::from_template(template),
            None => Ok(Panel::new()),
        })
        .collect()
}

impl<C: Canvas> fmt::Debug for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("canvas_size", &self.canvas_size)
            .field("panels", &self.panels().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
