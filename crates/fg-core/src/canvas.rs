// ABOUTME: Boundary between the layout engine and a rendering backend.
// ABOUTME: The grid drives a Canvas; panels never talk to it directly.

use crate::geometry::Rect;

/// A rendering backend that receives physical panel placements.
///
/// Implementations hand out opaque handles: one per canvas, and one per placed
/// rectangle. The grid keeps the surface handle for each panel and repositions it
/// on every recompute instead of placing a new one.
pub trait Canvas {
    type Handle;
    type Surface;

    fn create_canvas(&mut self, width: f64, height: f64) -> Self::Handle;

    fn resize_canvas(&mut self, handle: &Self::Handle, width: f64, height: f64);

    fn place_rectangle(&mut self, handle: &Self::Handle, rect: Rect) -> Self::Surface;

    fn reposition_rectangle(&mut self, surface: &Self::Surface, rect: Rect);
}

/// A canvas that ignores every call. Useful for pure geometry work.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    type Handle = ();
    type Surface = ();

    fn create_canvas(&mut self, _width: f64, _height: f64) {}

    fn resize_canvas(&mut self, _handle: &(), _width: f64, _height: f64) {}

    fn place_rectangle(&mut self, _handle: &(), _rect: Rect) {}

    fn reposition_rectangle(&mut self, _surface: &(), _rect: Rect) {}
}
