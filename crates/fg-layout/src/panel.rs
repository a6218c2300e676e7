// ABOUTME: A single grid cell: content size, optional aspect lock, and margin.
// ABOUTME: Panels only hold geometry; the owning grid places them on the canvas.

use fg_core::error::{check_aspect, check_length};
use fg_core::{LayoutError, Margin, MarginSpec, PanelTemplate, Size};
use serde::{Deserialize, Serialize};

/// Stable identity of a panel, handed out by the grid that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub u64);

/// Position of a panel inside its grid. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, PartialEq)]
pub struct Panel {
    id: Option<PanelId>,
    cell: Option<CellIndex>,
    width: f64,
    height: f64,
    aspect: Option<f64>,
    margin: Margin,
}

impl Panel {
    /// A detached panel with zero size and zero margin
    pub fn new() -> Self {
        Self {
            id: None,
            cell: None,
            width: 0.0,
            height: 0.0,
            aspect: None,
            margin: Margin::default(),
        }
    }

    pub fn from_template(template: &PanelTemplate) -> Result<Self, LayoutError> {
        let mut panel = Self::new();
        panel.apply(template)?;
        Ok(panel)
    }

    /// Identity assigned by the grid; `None` until the panel is placed in one
    pub fn id(&self) -> Option<PanelId> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: PanelId) {
        self.id = Some(id);
    }

    /// The cell this panel occupies, or `None` if it is not part of a grid
    pub fn cell(&self) -> Option<CellIndex> {
        self.cell
    }

    pub(crate) fn set_cell(&mut self, cell: Option<CellIndex>) {
        self.cell = cell;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn aspect(&self) -> Option<f64> {
        self.aspect
    }

    pub fn margin(&self) -> &Margin {
        &self.margin
    }

    /// Set the content width. With an aspect lock the height follows as `width / aspect`.
    pub fn set_width(&mut self, width: f64) -> Result<(), LayoutError> {
        self.set_size(Some(width), None)
    }

    /// Set the content height. With an aspect lock the width follows as `height * aspect`.
    pub fn set_height(&mut self, height: f64) -> Result<(), LayoutError> {
        self.set_size(None, Some(height))
    }

    /// Set or clear the aspect lock (width / height).
    ///
    /// Does not resize; the lock takes effect on the next width or height change.
    pub fn set_aspect(&mut self, aspect: Option<f64>) -> Result<(), LayoutError> {
        self.aspect = aspect.map(check_aspect).transpose()?;
        Ok(())
    }

    /// Set whichever dimensions are given, width first.
    ///
    /// Under an aspect lock the later call wins, so passing both leaves the
    /// height as given and the width derived from it. Nothing changes on error.
    pub fn set_size(&mut self, width: Option<f64>, height: Option<f64>) -> Result<(), LayoutError> {
        let (width, height) = self.resolve_size(self.aspect, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Final content size after writing `width` then `height` under `aspect`.
    /// Derived dimensions are validated like given ones.
    fn resolve_size(
        &self,
        aspect: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<(f64, f64), LayoutError> {
        let width = width.map(|w| check_length("width", w)).transpose()?;
        let height = height.map(|h| check_length("height", h)).transpose()?;

        match (aspect, width, height) {
            (Some(aspect), _, Some(height)) => Ok((check_length("width", height * aspect)?, height)),
            (Some(aspect), Some(width), None) => Ok((width, check_length("height", width / aspect)?)),
            (_, width, height) => Ok((
                width.unwrap_or(self.width),
                height.unwrap_or(self.height),
            )),
        }
    }

    pub fn set_margin(&mut self, spec: &MarginSpec) -> Result<(), LayoutError> {
        self.margin.apply(spec)
    }

    pub fn set_left(&mut self, left: f64) -> Result<(), LayoutError> {
        self.margin.set_left(left)
    }

    pub fn set_right(&mut self, right: f64) -> Result<(), LayoutError> {
        self.margin.set_right(right)
    }

    pub fn set_top(&mut self, top: f64) -> Result<(), LayoutError> {
        self.margin.set_top(top)
    }

    pub fn set_bottom(&mut self, bottom: f64) -> Result<(), LayoutError> {
        self.margin.set_bottom(bottom)
    }

    /// Apply aspect, then size, then margin. Nothing changes if any value is invalid.
    pub fn apply(&mut self, template: &PanelTemplate) -> Result<(), LayoutError> {
        let aspect = match template.aspect {
            Some(aspect) => Some(check_aspect(aspect)?),
            None => self.aspect,
        };
        let (width, height) = self.resolve_size(aspect, template.width, template.height)?;
        template.margin.validate()?;

        self.aspect = aspect;
        self.width = width;
        self.height = height;
        self.set_margin(&template.margin)
    }

    pub fn spacing_width(&self) -> f64 {
        self.margin.horizontal()
    }

    pub fn spacing_height(&self) -> f64 {
        self.margin.vertical()
    }

    pub fn spacing_size(&self) -> Size {
        Size::new(self.spacing_width(), self.spacing_height())
    }

    /// Footprint width: left margin + content + right margin
    pub fn total_width(&self) -> f64 {
        self.margin.left() + self.width + self.margin.right()
    }

    /// Footprint height: top margin + content + bottom margin
    pub fn total_height(&self) -> f64 {
        self.margin.top() + self.height + self.margin.bottom()
    }

    pub fn total_size(&self) -> Size {
        Size::new(self.total_width(), self.total_height())
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}
