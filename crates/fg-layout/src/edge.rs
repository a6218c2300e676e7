// ABOUTME: Edge subsets of a grid: first/last row and first/last column.
// ABOUTME: Used only as targets for bulk edits; recomputed whenever the grid changes shape.

use serde::{Deserialize, Serialize};

use crate::panel::CellIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Column 0
    Left,
    /// Last column
    Right,
    /// Row 0
    Top,
    /// Last row
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct EdgeSets {
    left: Vec<CellIndex>,
    right: Vec<CellIndex>,
    top: Vec<CellIndex>,
    bottom: Vec<CellIndex>,
}

impl EdgeSets {
    /// Columns are listed top to bottom, rows left to right
    pub fn compute(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::default();
        }
        Self {
            left: (0..rows).map(|r| CellIndex::new(r, 0)).collect(),
            right: (0..rows).map(|r| CellIndex::new(r, cols - 1)).collect(),
            top: (0..cols).map(|c| CellIndex::new(0, c)).collect(),
            bottom: (0..cols).map(|c| CellIndex::new(rows - 1, c)).collect(),
        }
    }

    pub fn get(&self, edge: Edge) -> &[CellIndex] {
        match edge {
            Edge::Left => &self.left,
            Edge::Right => &self.right,
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_is_on_every_edge() {
        let edges = EdgeSets::compute(1, 1);
        for edge in Edge::ALL {
            assert_eq!(edges.get(edge), &[CellIndex::new(0, 0)]);
        }
    }

    #[test]
    fn edges_of_two_by_three() {
        let edges = EdgeSets::compute(2, 3);
        assert_eq!(
            edges.get(Edge::Right),
            &[CellIndex::new(0, 2), CellIndex::new(1, 2)]
        );
        assert_eq!(
            edges.get(Edge::Bottom),
            &[
                CellIndex::new(1, 0),
                CellIndex::new(1, 1),
                CellIndex::new(1, 2)
            ]
        );
        assert_eq!(edges.get(Edge::Left).len(), 2);
        assert_eq!(edges.get(Edge::Top).len(), 3);
    }
}
