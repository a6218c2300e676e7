// ABOUTME: Builds a grid from a declarative figure description.
// ABOUTME: Templates apply in order: defaults, edges (left, right, top, bottom), cells.

use fg_core::{Canvas, FigureSpec, LayoutError};

use crate::edge::Edge;
use crate::grid::Grid;

impl<C: Canvas> Grid<C> {
    pub fn from_figure(figure: &FigureSpec, canvas: C) -> Result<Self, LayoutError> {
        let mut grid = Self::new(figure.rows, figure.cols, canvas)?;
        grid.apply_figure(figure)?;
        Ok(grid)
    }

    /// Apply a figure's templates to this grid's panels in a single recompute.
    ///
    /// The figure's shape is not checked against the grid; cell overrides outside
    /// the grid fail with `IndexOutOfRange`.
    pub fn apply_figure(&mut self, figure: &FigureSpec) -> Result<(), LayoutError> {
        let edges = [
            (Edge::Left, &figure.edges.left),
            (Edge::Right, &figure.edges.right),
            (Edge::Top, &figure.edges.top),
            (Edge::Bottom, &figure.edges.bottom),
        ];

        self.batch(|batch| {
            batch.apply_all(&figure.defaults)?;
            for (edge, template) in edges {
                if let Some(template) = template {
                    batch.apply_edge(edge, template)?;
                }
            }
            for cell in &figure.cells {
                batch.panel_mut(cell.row, cell.col)?.apply(&cell.template)?;
            }
            Ok(())
        })?;

        tracing::debug!(
            "Applied figure: {} cell overrides, canvas {:.3}\" x {:.3}\"",
            figure.cells.len(),
            self.canvas_width(),
            self.canvas_height()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::{MarginSpec, NullCanvas, Size};

    #[test]
    fn edges_override_defaults_and_cells_override_edges() {
        let figure = FigureSpec::parse(
            r#"
rows = 2
cols = 2

[defaults]
width = 1.0
height = 1.0
margin = { every = 0.1 }

[edges.left]
margin = { left = 0.3 }

[[cells]]
row = 1
col = 0
margin = { left = 0.0 }
"#,
        )
        .unwrap();

        let grid = Grid::from_figure(&figure, NullCanvas).unwrap();

        assert_eq!(grid.get(0, 0).unwrap().margin().left(), 0.3);
        assert_eq!(grid.get(1, 0).unwrap().margin().left(), 0.0);
        assert_eq!(grid.get(0, 1).unwrap().margin().left(), 0.1);
        assert_eq!(grid.get(1, 1).unwrap().size(), Size::new(1.0, 1.0));
    }

    #[test]
    fn cell_outside_grid_is_rejected() {
        let mut figure = FigureSpec::parse("rows = 1\ncols = 1").unwrap();
        figure.cells.push(fg_core::CellOverride {
            row: 0,
            col: 4,
            template: fg_core::PanelTemplate::new().margin(MarginSpec::every(0.1)),
        });

        assert!(matches!(
            Grid::from_figure(&figure, NullCanvas),
            Err(LayoutError::IndexOutOfRange { col: 4, .. })
        ));
    }
}
