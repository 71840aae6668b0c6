use crate::field::blur::gaussian_blur_plane;
use crate::field::rng::SeedStream;
use crate::foundation::core::{Point, Rgba};
use crate::foundation::error::AstraResult;
use crate::layers::primitive::Primitive;
use crate::raster::Raster;

const LUMA_SIGMA: f64 = 3.0;
const DOT_ALPHA: f64 = 0.45;
// Center jitter sigma as a fraction of the sampling step.
const JITTER_FRAC: f64 = 0.25;

/// Halftone dot screen driven by the graded raster's luminance.
///
/// Samples a regular `step`-pixel grid row-major (y outer, x inner). Darker
/// pixels grow larger dots; each dot consumes two Gaussian draws (x then y
/// jitter) from `rng`.
pub(crate) fn halftone_dots(
    graded: &Raster,
    step: u32,
    dot_min: f64,
    dot_max: f64,
    rng: &mut SeedStream,
) -> AstraResult<Vec<Primitive>> {
    let side = graded.size() as usize;
    let luma = gaussian_blur_plane(&graded.luminance_plane(), side, side, LUMA_SIGMA)?;

    let color = Rgba::new(0.0, 0.0, 0.0, DOT_ALPHA);
    let step_px = step.max(1) as usize;
    let jitter_sigma = JITTER_FRAC * step_px as f64;
    let inv_side = 1.0 / side as f64;

    let mut out = Vec::new();
    for y in (step_px / 2..side).step_by(step_px) {
        for x in (step_px / 2..side).step_by(step_px) {
            let lum = f64::from(luma[y * side + x]);
            let radius = dot_min + (1.0 - lum) * (dot_max - dot_min);
            let jx = rng.next_gaussian() * jitter_sigma;
            let jy = rng.next_gaussian() * jitter_sigma;
            out.push(Primitive::Circle {
                center: Point::new(
                    (x as f64 + jx) * inv_side,
                    1.0 - (y as f64 + jy) * inv_side,
                ),
                radius: radius * inv_side,
                color,
            });
        }
    }
    Ok(out)
}
