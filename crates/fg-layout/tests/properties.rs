// ABOUTME: Property tests for the layout algorithm.
// ABOUTME: Canvas reductions, placement formulas, aspect locks and reshape ordering.

use fg_core::{MarginSpec, Rect, Size};
use fg_layout::{Grid, Panel};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy)]
struct Spec {
    width: f64,
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

fn spec() -> impl Strategy<Value = Spec> {
    (
        0.0f64..3.0,
        0.0f64..3.0,
        0.0f64..0.5,
        0.0f64..0.5,
        0.0f64..0.5,
        0.0f64..0.5,
    )
        .prop_map(|(width, height, left, right, top, bottom)| Spec {
            width,
            height,
            left,
            right,
            top,
            bottom,
        })
}

/// A grid shape plus one spec per cell
fn grid_specs() -> impl Strategy<Value = (usize, usize, Vec<Spec>)> {
    (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(spec(), rows * cols),
        )
    })
}

fn build(rows: usize, cols: usize, specs: &[Spec]) -> Grid {
    let mut grid = Grid::detached(rows, cols).unwrap();
    grid.batch(|batch| {
        for (panel, s) in batch.panels_mut().zip(specs) {
            panel.set_size(Some(s.width), Some(s.height))?;
            panel.set_margin(
                &MarginSpec::new()
                    .left(s.left)
                    .right(s.right)
                    .top(s.top)
                    .bottom(s.bottom),
            )?;
        }
        Ok(())
    })
    .unwrap();
    grid
}

fn strictly_overlap(a: &Rect, b: &Rect) -> bool {
    a.x + EPS < b.right() && b.x + EPS < a.right() && a.y + EPS < b.top() && b.y + EPS < a.top()
}

proptest! {
    #[test]
    fn prop_canvas_matches_row_reductions((rows, cols, specs) in grid_specs()) {
        let grid = build(rows, cols, &specs);

        let mut width = 0.0f64;
        let mut height = 0.0;
        for r in 0..rows {
            let row: Vec<&Panel> = grid.row(r).unwrap().collect();
            width = width.max(row.iter().map(|p| p.total_width()).sum::<f64>());
            height += row.iter().map(|p| p.total_height()).fold(0.0, f64::max);
        }

        prop_assert!((grid.canvas_width() - width).abs() < EPS);
        prop_assert!((grid.canvas_height() - height).abs() < EPS);
    }

    #[test]
    fn prop_panels_stay_inside_canvas_without_overlap((rows, cols, specs) in grid_specs()) {
        let grid = build(rows, cols, &specs);
        let Size { width, height } = grid.canvas_size();

        let rects: Vec<Rect> = grid.layout().panels.iter().map(|p| p.rect).collect();
        for rect in &rects {
            prop_assert!(rect.x >= 0.0 && rect.y >= 0.0);
            prop_assert!(rect.right() <= width + EPS);
            prop_assert!(rect.top() <= height + EPS);
        }
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(!strictly_overlap(a, b));
            }
        }
    }

    #[test]
    fn prop_position_is_left_sum_plus_margin((rows, cols, specs) in grid_specs()) {
        let grid = build(rows, cols, &specs);
        let heights = grid.row_heights().to_vec();

        for r in 0..rows {
            let row: Vec<&Panel> = grid.row(r).unwrap().collect();
            let below: f64 = heights[r + 1..].iter().sum();
            for (c, panel) in row.iter().enumerate() {
                let left: f64 = row[..c].iter().map(|p| p.total_width()).sum();
                let (x, y) = grid.position(r, c).unwrap();
                prop_assert!((x - (left + panel.margin().left())).abs() < EPS);
                prop_assert!((y - (below + panel.margin().bottom())).abs() < EPS);
            }
        }
    }

    #[test]
    fn prop_aspect_lock(aspect in 0.1f64..10.0, w in 0.0f64..5.0, h in 0.0f64..5.0) {
        let mut panel = Panel::new();
        panel.set_aspect(Some(aspect)).unwrap();

        panel.set_width(w).unwrap();
        prop_assert!((panel.height() - w / aspect).abs() < EPS);

        panel.set_height(h).unwrap();
        prop_assert!((panel.width() - h * aspect).abs() < EPS);
    }

    #[test]
    fn prop_set_margin_is_idempotent(s in spec(), every in 0.0f64..0.5) {
        let margin = MarginSpec::every(every).left(s.left).top(s.top);
        let mut grid = Grid::detached(1, 1).unwrap();

        grid.update(0, 0, |p| p.set_margin(&margin)).unwrap();
        let first = (*grid.get(0, 0).unwrap().margin(), grid.canvas_size());
        grid.update(0, 0, |p| p.set_margin(&margin)).unwrap();
        let second = (*grid.get(0, 0).unwrap().margin(), grid.canvas_size());

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reshape_preserves_identity_order((rows, cols, specs) in grid_specs()) {
        let mut grid = build(rows, cols, &specs);
        let before: Vec<_> = grid.panels().map(Panel::id).collect();

        grid.reshape(cols, rows).unwrap();
        prop_assert_eq!(&grid.panels().map(Panel::id).collect::<Vec<_>>(), &before);

        grid.reshape(1, rows * cols).unwrap();
        prop_assert_eq!(&grid.panels().map(Panel::id).collect::<Vec<_>>(), &before);
    }

    #[test]
    fn prop_zero_panels_add_nothing((rows, cols, specs) in grid_specs()) {
        let mut grid = build(rows, cols, &specs);
        let size = grid.canvas_size();

        grid.append_cols(1, None).unwrap();

        prop_assert_eq!(grid.canvas_size(), size);
    }
}
