// ABOUTME: Declarative figure descriptions loaded from TOML.
// ABOUTME: A figure names its grid shape plus templates for all panels, edges, and single cells.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::MarginSpec;

/// Initial values for a panel. Absent fields leave the panel untouched.
///
/// Applied in the order aspect, size, margin, so that an aspect lock given here
/// already constrains the size given alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTemplate {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub aspect: Option<f64>,
    pub margin: MarginSpec,
}

impl PanelTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn aspect(mut self, aspect: f64) -> Self {
        self.aspect = Some(aspect);
        self
    }

    pub fn margin(mut self, margin: MarginSpec) -> Self {
        self.margin = margin;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Templates applied to the panels on each edge of the grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeTemplates {
    pub left: Option<PanelTemplate>,
    pub right: Option<PanelTemplate>,
    pub top: Option<PanelTemplate>,
    pub bottom: Option<PanelTemplate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellOverride {
    pub row: usize,
    pub col: usize,
    #[serde(flatten)]
    pub template: PanelTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    pub rows: usize,
    pub cols: usize,

    /// Applied to every panel first
    #[serde(default)]
    pub defaults: PanelTemplate,

    /// Applied after `defaults`, in the order left, right, top, bottom
    #[serde(default)]
    pub edges: EdgeTemplates,

    /// Applied last, in file order
    #[serde(default)]
    pub cells: Vec<CellOverride>,
}

impl FigureSpec {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIGURE: &str = r#"
rows = 2
cols = 3

[defaults]
aspect = 1.0
width = 1.5
margin = { every = 0.025 }

[edges.left]
margin = { left = 0.2 }

[edges.top.margin]
top = 0.2

[[cells]]
row = 1
col = 2
height = 0.75
margin = { bottom = 0.1 }
"#;

    #[test]
    fn parses_full_figure() {
        let figure = FigureSpec::parse(FIGURE).unwrap();

        assert_eq!((figure.rows, figure.cols), (2, 3));
        assert_eq!(figure.defaults.aspect, Some(1.0));
        assert_eq!(figure.defaults.margin, MarginSpec::every(0.025));
        assert_eq!(
            figure.edges.left,
            Some(PanelTemplate::new().margin(MarginSpec::new().left(0.2)))
        );
        assert!(figure.edges.right.is_none());
        assert_eq!(figure.edges.top.unwrap().margin.top, Some(0.2));

        let cell = &figure.cells[0];
        assert_eq!((cell.row, cell.col), (1, 2));
        assert_eq!(cell.template.height, Some(0.75));
        assert_eq!(cell.template.margin.bottom, Some(0.1));
    }

    #[test]
    fn minimal_figure_has_empty_templates() {
        let figure = FigureSpec::parse("rows = 1\ncols = 1").unwrap();
        assert!(figure.defaults.is_empty());
        assert!(figure.cells.is_empty());
    }

    #[test]
    fn missing_shape_is_an_error() {
        assert!(matches!(
            FigureSpec::parse("cols = 1"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
