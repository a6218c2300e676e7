// ABOUTME: Canvas that records every backend call in order.
// ABOUTME: Keeps the current size and surface rectangles for inspection.

use fg_core::{Canvas, Rect, Size};

use crate::SurfaceId;

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Create { width: f64, height: f64 },
    Resize { width: f64, height: f64 },
    Place { surface: SurfaceId, rect: Rect },
    Reposition { surface: SurfaceId, rect: Rect },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    size: Size,
    /// Indexed by surface id
    surfaces: Vec<Rect>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Forget recorded operations, keeping size and surfaces
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn surface_rect(&self, surface: SurfaceId) -> Option<Rect> {
        self.surfaces.get(surface.0 as usize).copied()
    }

    pub fn resize_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::Resize { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    type Handle = ();
    type Surface = SurfaceId;

    fn create_canvas(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
        self.ops.push(CanvasOp::Create { width, height });
    }

    fn resize_canvas(&mut self, _handle: &(), width: f64, height: f64) {
        self.size = Size::new(width, height);
        self.ops.push(CanvasOp::Resize { width, height });
    }

    fn place_rectangle(&mut self, _handle: &(), rect: Rect) -> SurfaceId {
        let surface = SurfaceId(self.surfaces.len() as u64);
        self.surfaces.push(rect);
        self.ops.push(CanvasOp::Place { surface, rect });
        surface
    }

    fn reposition_rectangle(&mut self, surface: &SurfaceId, rect: Rect) {
        if let Some(slot) = self.surfaces.get_mut(surface.0 as usize) {
            *slot = rect;
        }
        self.ops.push(CanvasOp::Reposition {
            surface: *surface,
            rect,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.create_canvas(1.0, 2.0);
        let surface = canvas.place_rectangle(&(), Rect::new(0.0, 0.0, 1.0, 1.0));
        canvas.reposition_rectangle(&surface, Rect::new(0.5, 0.5, 1.0, 1.0));
        canvas.resize_canvas(&(), 3.0, 3.0);

        assert_eq!(canvas.ops().len(), 4);
        assert_eq!(canvas.size(), Size::new(3.0, 3.0));
        assert_eq!(
            canvas.surface_rect(surface),
            Some(Rect::new(0.5, 0.5, 1.0, 1.0))
        );
        assert_eq!(canvas.resize_count(), 1);
    }
}
