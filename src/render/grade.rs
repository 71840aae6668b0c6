use crate::assets::color::Color;
use crate::field::blur::gaussian_blur_plane;
use crate::foundation::error::AstraResult;
use crate::raster::Raster;

// Luminance smoothing before the remap, to suppress sensor grain.
const GRADE_SIGMA: f64 = 2.0;

/// Duotone color grade.
///
/// Luminance (BT.709, blurred) drives a remap onto the `lo -> hi` segment,
/// blended with the original by `strength`. `strength = 0` is a byte-exact
/// identity; `strength = 1` is a pure duotone. Deterministic, no randomness.
pub(crate) fn grade(base: &Raster, lo: Color, hi: Color, strength: f64) -> AstraResult<Raster> {
    let side = base.size() as usize;
    let luma = gaussian_blur_plane(&base.luminance_plane(), side, side, GRADE_SIGMA)?;

    let mut out = base.clone();
    for (px, &l) in out.data_mut().chunks_exact_mut(3).zip(luma.iter()) {
        let l = f64::from(l);
        let mapped = [
            (1.0 - l) * lo.r + l * hi.r,
            (1.0 - l) * lo.g + l * hi.g,
            (1.0 - l) * lo.b + l * hi.b,
        ];
        for (c, m) in px.iter_mut().zip(mapped) {
            let orig = f64::from(*c) / 255.0;
            let v = (strength * m + (1.0 - strength) * orig).clamp(0.0, 1.0);
            *c = (v * 255.0).round() as u8;
        }
    }
    Ok(out)
}
