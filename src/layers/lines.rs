use crate::foundation::core::{Point, Rgba};
use crate::layers::STROKE_UNIT;
use crate::layers::primitive::Primitive;

// The pre-rotation family spans [-L, L] in both axes so that any rotation
// still covers the unit square after the 0.5*p + 0.5 remap.
const SPAN: f64 = 2.5;

/// Rotated family of evenly spaced parallel lines.
///
/// Each line is emitted at full span; the rasterizer clips to the canvas.
pub(crate) fn parallel_lines(
    angle_deg: f64,
    density: u32,
    lw: f64,
    alpha: f64,
) -> Vec<Primitive> {
    let color = Rgba::new(0.0, 0.0, 0.0, alpha);
    let width = lw * STROKE_UNIT;
    let angle = angle_deg.to_radians();
    let (sin, cos) = angle.sin_cos();
    let rotate = |x: f64, y: f64| {
        Point::new(
            0.5 * (cos * x - sin * y) + 0.5,
            0.5 * (sin * x + cos * y) + 0.5,
        )
    };

    let n = density.max(2);
    (0..n)
        .map(|i| {
            let offset = -SPAN + 2.0 * SPAN * f64::from(i) / f64::from(n - 1);
            Primitive::segment(
                rotate(-SPAN, offset),
                rotate(SPAN, offset),
                color,
                width,
            )
        })
        .collect()
}
