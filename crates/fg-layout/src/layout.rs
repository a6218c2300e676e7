// ABOUTME: The additive layout algorithm and its result types.
// ABOUTME: Turns row-major panel footprints into a canvas size and absolute content rectangles.

use fg_core::{Margin, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::panel::{CellIndex, Panel, PanelId};

/// Result of one layout pass over a grid
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Geometry {
    pub canvas: Size,
    pub row_heights: Vec<f64>,
    /// Content rectangles, row-major
    pub rects: Vec<Rect>,
}

/// Reduce a row-major arrangement to a bounding size.
///
/// Width is the widest row (sum of footprints along the row), height is the sum of
/// row heights (tallest footprint in each row).
pub(crate) fn extent<'a, F>(cols: usize, panels: &[&'a Panel], footprint: F) -> Size
where
    F: Fn(&'a Panel) -> Size,
{
    let mut size = Size::ZERO;
    for row in panels.chunks(cols.max(1)) {
        let mut row_width = 0.0_f64;
        let mut row_height = 0.0_f64;
        for &panel in row {
            let fp = footprint(panel);
            row_width += fp.width;
            row_height = row_height.max(fp.height);
        }
        size.width = size.width.max(row_width);
        size.height += row_height;
    }
    size
}

/// Compute canvas size and every panel's absolute content rectangle.
///
/// Origin is the bottom-left corner of the canvas and row 0 is the top row, so a
/// panel's `y` is the combined height of all rows below it plus its own bottom margin.
pub(crate) fn compute(rows: usize, cols: usize, panels: &[&Panel]) -> Geometry {
    debug_assert_eq!(rows * cols, panels.len());

    let row_heights: Vec<f64> = panels
        .chunks(cols.max(1))
        .map(|row| row.iter().map(|p| p.total_height()).fold(0.0, f64::max))
        .collect();

    // below[r] = sum of heights of rows r+1..rows
    let mut below = vec![0.0; row_heights.len()];
    let mut acc = 0.0;
    for (r, height) in row_heights.iter().enumerate().rev() {
        below[r] = acc;
        acc += height;
    }

    let mut rects = Vec::with_capacity(panels.len());
    let mut canvas_width = 0.0_f64;
    for (r, row) in panels.chunks(cols.max(1)).enumerate() {
        let mut x = 0.0;
        for panel in row {
            let margin = panel.margin();
            rects.push(Rect::new(
                x + margin.left(),
                below[r] + margin.bottom(),
                panel.width(),
                panel.height(),
            ));
            x += panel.total_width();
        }
        canvas_width = canvas_width.max(x);
    }

    Geometry {
        canvas: Size::new(canvas_width, acc),
        row_heights,
        rects,
    }
}

/// Absolute rectangles covering a panel's four margins.
///
/// Left and right bands span the content height, top and bottom bands span the
/// content width; corners are not covered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginBands {
    pub left: Rect,
    pub right: Rect,
    pub top: Rect,
    pub bottom: Rect,
}

impl MarginBands {
    pub fn around(content: Rect, margin: &Margin) -> Self {
        Self {
            left: Rect::new(
                content.x - margin.left(),
                content.y,
                margin.left(),
                content.height,
            ),
            right: Rect::new(content.right(), content.y, margin.right(), content.height),
            top: Rect::new(content.x, content.top(), content.width, margin.top()),
            bottom: Rect::new(
                content.x,
                content.y - margin.bottom(),
                content.width,
                margin.bottom(),
            ),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        [&self.left, &self.right, &self.top, &self.bottom].into_iter()
    }
}

/// One panel's placement within a layout snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPanel {
    pub id: Option<PanelId>,
    pub cell: CellIndex,
    pub rect: Rect,
    pub margin: Margin,
}

impl PlacedPanel {
    pub fn bands(&self) -> MarginBands {
        MarginBands::around(self.rect, &self.margin)
    }
}

/// Snapshot of a grid's computed geometry, suitable for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub canvas: Size,
    /// Row-major
    pub panels: Vec<PlacedPanel>,
}
