pub(crate) mod arcs;
pub(crate) mod blocks;
pub(crate) mod dots;
pub(crate) mod grid;
pub(crate) mod isolines;
pub(crate) mod lines;
pub(crate) mod primitive;

/// Stroke widths are typographic points on the 6-inch reference canvas
/// (432 pt per side); the rasterizer multiplies by the pixel side length.
pub(crate) const STROKE_UNIT: f64 = 1.0 / 432.0;
