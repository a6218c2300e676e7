// ABOUTME: SVG preview backend.
// ABOUTME: Converts inch geometry with a bottom-left origin into top-left SVG pixels.

use std::fmt::Write as _;
use std::path::Path;

use fg_core::{Canvas, Color, Rect, Settings, Size};

use crate::{CanvasError, SurfaceId};

/// An extra filled rectangle drawn beneath the panel surfaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub rect: Rect,
    pub color: Color,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct SvgCanvas {
    dpi: f64,
    panel_fill: Color,
    panel_stroke: Color,
    background: Color,
    size: Size,
    surfaces: Vec<Rect>,
}

impl SvgCanvas {
    pub fn new(dpi: f64) -> Result<Self, CanvasError> {
        Self::from_settings(&Settings {
            dpi,
            ..Settings::default()
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CanvasError> {
        if !(settings.dpi.is_finite() && settings.dpi > 0.0) {
            return Err(CanvasError::InvalidDpi(settings.dpi));
        }
        Ok(Self {
            dpi: settings.dpi,
            panel_fill: settings.panel_fill,
            panel_stroke: settings.panel_stroke,
            background: settings.background,
            size: Size::ZERO,
            surfaces: Vec::new(),
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Size of the output image in pixels
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.size.width * self.dpi, self.size.height * self.dpi)
    }

    /// Flip to a top-left origin and scale to pixels
    fn to_pixels(&self, rect: &Rect) -> (f64, f64, f64, f64) {
        (
            rect.x * self.dpi,
            (self.size.height - rect.top()) * self.dpi,
            rect.width * self.dpi,
            rect.height * self.dpi,
        )
    }

    pub fn render(&self, decorations: &[Decoration]) -> String {
        let (width, height) = self.pixel_size();
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.2}" height="{height:.2}" viewBox="0 0 {width:.2} {height:.2}">"#
        );
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{width:.2}" height="{height:.2}" fill="{}"/>"#,
            self.background.to_hex()
        );

        for decoration in decorations.iter().filter(|d| !d.rect.is_degenerate()) {
            let (x, y, w, h) = self.to_pixels(&decoration.rect);
            let _ = writeln!(
                out,
                r#"  <rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{}" fill-opacity="{:.2}"/>"#,
                decoration.color.to_hex(),
                decoration.opacity
            );
        }

        for rect in self.surfaces.iter().filter(|r| !r.is_degenerate()) {
            let (x, y, w, h) = self.to_pixels(rect);
            let _ = writeln!(
                out,
                r#"  <rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{}" stroke="{}" stroke-width="1"/>"#,
                self.panel_fill.to_hex(),
                self.panel_stroke.to_hex()
            );
        }

        out.push_str("</svg>\n");
        out
    }

    pub fn save(&self, path: &Path, decorations: &[Decoration]) -> Result<(), CanvasError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render(decorations))?;
        let (width, height) = self.pixel_size();
        tracing::info!(
            "Wrote {} ({:.0}x{:.0} px, {} panels)",
            path.display(),
            width,
            height,
            self.surfaces.len()
        );
        Ok(())
    }
}

impl Canvas for SvgCanvas {
    type Handle = ();
    type Surface = SurfaceId;

    fn create_canvas(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    fn resize_canvas(&mut self, _handle: &(), width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    fn place_rectangle(&mut self, _handle: &(), rect: Rect) -> SurfaceId {
        self.surfaces.push(rect);
        SurfaceId(self.surfaces.len() as u64 - 1)
    }

    fn reposition_rectangle(&mut self, surface: &SurfaceId, rect: Rect) {
        match self.surfaces.get_mut(surface.0 as usize) {
            Some(slot) => *slot = rect,
            None => tracing::warn!("Reposition of unknown surface {:?}", surface),
        }
    }
}
