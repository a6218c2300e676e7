// ABOUTME: Integration tests that lay out the figure descriptions in demos/.
// ABOUTME: Checks canvas sizes, positions and edge templates against hand-computed values.

use std::path::PathBuf;

use fg_core::{FigureSpec, NullCanvas, Size};
use fg_layout::{Edge, Grid};

fn demo(name: &str) -> Grid {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name);
    let figure = FigureSpec::load(&path).unwrap();
    Grid::from_figure(&figure, NullCanvas).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn single_panel_fills_three_inches() {
    let grid = demo("single_panel.toml");
    assert_eq!(grid.canvas_size(), Size::new(3.0, 3.0));
    assert_eq!(grid.position(0, 0).unwrap(), (0.5, 0.5));
}

#[test]
fn uniform_grid_is_four_inches() {
    let grid = demo("uniform_4x4.toml");
    assert!(close(grid.canvas_width(), 4.0));
    assert!(close(grid.canvas_height(), 4.0));

    let (x, y) = grid.position(0, 3).unwrap();
    assert!(close(x, 3.1));
    assert!(close(y, 3.1));
}

#[test]
fn edge_templates_widen_labelled_edges() {
    let grid = demo("labelled_edges.toml");

    assert!(grid.edge_panels(Edge::Left).all(|p| p.margin().left() == 0.2));
    assert!(grid.edge_panels(Edge::Top).all(|p| p.margin().top() == 0.2));
    assert_eq!(grid.get(1, 1).unwrap().margin().left(), 0.025);
    assert_eq!(grid.get(1, 2).unwrap().margin().bottom(), 0.2);

    // aspect lock derives the content height from the width
    assert!(close(grid.get(0, 0).unwrap().height(), 1.05));

    // 0.2 + 1.4 + 0.025, then two panels of 0.025 + 1.4 + 0.025
    assert!(close(grid.canvas_width(), 4.525));
    // top row 0.2 + 1.05 + 0.025, bottom row 0.025 + 1.05 + 0.2
    assert!(close(grid.canvas_height(), 2.55));
}
