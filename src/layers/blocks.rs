use crate::field::rng::SeedStream;
use crate::foundation::core::{Rect, Rgba};
use crate::layers::primitive::Primitive;

// Placement band along the lower-left of the canvas.
const W_RANGE: (f64, f64) = (0.06, 0.18);
const H_RANGE: (f64, f64) = (0.12, 0.28);
const X_RANGE: (f64, f64) = (0.06, 0.36);
const Y_RANGE: (f64, f64) = (0.04, 0.14);

// Opaque accent palette: black and near-white.
const PALETTE: [Rgba; 2] = [
    Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    },
    Rgba {
        r: 0.95,
        g: 0.95,
        b: 0.95,
        a: 1.0,
    },
];

/// Randomly placed filled accent rectangles.
///
/// Each rectangle consumes exactly five draws in order: width, height, x, y,
/// palette index. Keeping that count fixed is what makes seeded output stable
/// when other layers are toggled.
pub(crate) fn blocks_layer(count: u32, rng: &mut SeedStream) -> Vec<Primitive> {
    (0..count)
        .map(|_| {
            let w = rng.next_uniform(W_RANGE.0, W_RANGE.1);
            let h = rng.next_uniform(H_RANGE.0, H_RANGE.1);
            let x = rng.next_uniform(X_RANGE.0, X_RANGE.1);
            let y = rng.next_uniform(Y_RANGE.0, Y_RANGE.1);
            let color = PALETTE[rng.next_index(PALETTE.len())];
            Primitive::RectFill {
                rect: Rect::new(x, y, x + w, y + h),
                color,
            }
        })
        .collect()
}
