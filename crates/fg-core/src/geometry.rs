// ABOUTME: Physical geometry primitives measured in inches.
// ABOUTME: Rectangles use a bottom-left origin, matching the canvas convention.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

/// Rectangle in inches, `(x, y)` is the bottom-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Zero-extent rectangles are legal layout results but have nothing to draw
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the two rectangles share interior area (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_bottom_left_origin() {
        let rect = Rect::new(0.5, 0.25, 1.5, 1.25);
        assert_eq!(rect.right(), 2.0);
        assert_eq!(rect.top(), 1.5);
        assert_eq!(rect.origin(), (0.5, 0.25));
    }

    #[test]
    fn adjacent_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(0.5, 0.5, 1.0, 1.0)));
    }

    #[test]
    fn zero_width_is_degenerate() {
        assert!(Rect::new(1.0, 1.0, 0.0, 2.0).is_degenerate());
        assert!(!Rect::new(1.0, 1.0, 0.1, 2.0).is_degenerate());
    }
}
