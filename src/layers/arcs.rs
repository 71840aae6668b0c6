use std::f64::consts::PI;

use crate::foundation::core::{Point, Rgba};
use crate::layers::STROKE_UNIT;
use crate::layers::primitive::Primitive;

// Anchor near the bottom-right corner; the sweep opens upward.
const CENTER: Point = Point::new(0.78, 0.12);
const SWEEP_START: f64 = 0.1 * PI;
const SWEEP_END: f64 = 0.9 * PI;
const SAMPLES: usize = 240;
// Six full jitter oscillations across the sweep.
const JITTER_CYCLES: f64 = 6.0 * PI;

const ARC_COLOR: (f64, f64, f64) = (1.0, 0.25, 0.25);

/// Jittered concentric arcs fanned around a fixed corner anchor.
///
/// Radii are linearly spaced in `[r_min, r_max]`; each arc's radius is
/// perturbed by `jitter * sin(6*pi*t)` along the sweep for a hand-drawn look.
pub(crate) fn concentric_arcs(
    count: u32,
    r_min: f64,
    r_max: f64,
    jitter: f64,
    lw: f64,
    alpha: f64,
) -> Vec<Primitive> {
    let color = Rgba::new(ARC_COLOR.0, ARC_COLOR.1, ARC_COLOR.2, alpha);
    let width = lw * STROKE_UNIT;

    (0..count)
        .map(|k| {
            let r = if count > 1 {
                r_min + (r_max - r_min) * f64::from(k) / f64::from(count - 1)
            } else {
                r_min
            };
            let points = (0..SAMPLES)
                .map(|s| {
                    let t = s as f64 / (SAMPLES - 1) as f64;
                    let theta = SWEEP_START + (SWEEP_END - SWEEP_START) * t;
                    let jr = jitter * (JITTER_CYCLES * t).sin();
                    Point::new(
                        CENTER.x + (r + jr) * theta.cos(),
                        CENTER.y + (r + jr) * theta.sin(),
                    )
                })
                .collect();
            Primitive::Polyline {
                points,
                color,
                width,
                round_caps: true,
            }
        })
        .collect()
}
