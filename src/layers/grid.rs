use crate::foundation::core::{Point, Rgba};
use crate::layers::STROKE_UNIT;
use crate::layers::primitive::Primitive;

const GRID_ALPHA: f64 = 0.08;
const GRID_LW: f64 = 1.0;

/// Full-span translucent-white ruling at `i/n` for `i` in `[1, n-1]`.
///
/// Emits `2(n-1)` lines; `n <= 1` is a no-op.
pub(crate) fn grid_layer(n: u32) -> Vec<Primitive> {
    if n <= 1 {
        return Vec::new();
    }
    let color = Rgba::new(1.0, 1.0, 1.0, GRID_ALPHA);
    let width = GRID_LW * STROKE_UNIT;

    let mut out = Vec::with_capacity(2 * (n as usize - 1));
    for i in 1..n {
        let s = f64::from(i) / f64::from(n);
        out.push(Primitive::segment(
            Point::new(0.0, s),
            Point::new(1.0, s),
            color,
            width,
        ));
        out.push(Primitive::segment(
            Point::new(s, 0.0),
            Point::new(s, 1.0),
            color,
            width,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_two_lines_per_division() {
        assert_eq!(grid_layer(4).len(), 6);
        assert_eq!(grid_layer(16).len(), 30);
    }

    #[test]
    fn degenerate_grid_is_empty() {
        assert!(grid_layer(0).is_empty());
        assert!(grid_layer(1).is_empty());
    }

    #[test]
    fn lines_sit_at_fractional_positions() {
        let prims = grid_layer(2);
        let Primitive::Polyline { points, .. } = &prims[0] else {
            panic!("grid emits polylines");
        };
        assert_eq!(points[0], Point::new(0.0, 0.5));
        assert_eq!(points[1], Point::new(1.0, 0.5));
    }
}
