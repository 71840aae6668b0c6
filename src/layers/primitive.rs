use crate::foundation::core::{Point, Rect, Rgba};

/// One drawable unit emitted by a layer and consumed by the rasterizer.
///
/// Geometry lives in the unit square `[0,1]×[0,1]` with the origin at the
/// bottom-left; stroke widths and circle radii are fractions of the canvas
/// side. Primitives may extend past the unit square — clipping to the
/// viewport happens at rasterization.
#[derive(Clone, Debug)]
pub(crate) enum Primitive {
    /// Stroked open polyline.
    Polyline {
        /// Vertices in draw order.
        points: Vec<Point>,
        /// Straight-alpha stroke color.
        color: Rgba,
        /// Stroke width as a fraction of the canvas side.
        width: f64,
        /// Butt caps for ruled lines, round caps for freehand curves.
        round_caps: bool,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius as a fraction of the canvas side.
        radius: f64,
        /// Straight-alpha fill color.
        color: Rgba,
    },
    /// Filled axis-aligned rectangle.
    RectFill {
        /// Extent, `y0`/`y1` in bottom-up unit coordinates.
        rect: Rect,
        /// Straight-alpha fill color.
        color: Rgba,
    },
}

impl Primitive {
    pub(crate) fn segment(p0: Point, p1: Point, color: Rgba, width: f64) -> Self {
        Self::Polyline {
            points: vec![p0, p1],
            color,
            width,
            round_caps: false,
        }
    }
}
