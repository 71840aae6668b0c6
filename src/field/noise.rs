use crate::field::blur::gaussian_blur_plane;
use crate::field::rng::SeedStream;
use crate::foundation::error::AstraResult;

/// Fixed sampling grid for the contour scalar field.
pub(crate) const FIELD_SIDE: usize = 220;

/// Smoothing sigma applied to the raw noise before contouring.
pub(crate) const FIELD_SIGMA: f64 = 2.5;

/// Smoothed scalar field in `[0, 1]`, row-major `height`×`width`.
pub(crate) struct ScalarField {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) values: Vec<f32>,
}

/// Generate a seeded noise field.
///
/// Consumes exactly `height * width` draws from `rng` in row-major order —
/// callers rely on this count for the cross-layer reproducibility contract.
/// The blurred result is renormalized to span `[0, 1]`; a degenerate constant
/// field maps to all 0.5.
pub(crate) fn noise_field(
    height: usize,
    width: usize,
    rng: &mut SeedStream,
) -> AstraResult<ScalarField> {
    let mut base = Vec::with_capacity(height * width);
    for _ in 0..height * width {
        base.push(rng.next_float() as f32);
    }

    let blurred = gaussian_blur_plane(&base, width, height, FIELD_SIGMA)?;

    let (mut lo, mut hi) = (f32::INFINITY, f32::NEG_INFINITY);
    for &v in &blurred {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    let span = hi - lo;
    let values = if span > 0.0 {
        blurred.iter().map(|v| (v - lo) / span).collect()
    } else {
        vec![0.5; blurred.len()]
    };

    Ok(ScalarField {
        width,
        height,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let mut a = SeedStream::new(Some(42));
        let mut b = SeedStream::new(Some(42));
        let fa = noise_field(32, 32, &mut a).unwrap();
        let fb = noise_field(32, 32, &mut b).unwrap();
        assert_eq!(fa.values, fb.values);
    }

    #[test]
    fn consumes_exactly_h_times_w_draws() {
        let mut a = SeedStream::new(Some(11));
        let mut b = SeedStream::new(Some(11));
        let _ = noise_field(16, 24, &mut a).unwrap();
        for _ in 0..16 * 24 {
            let _ = b.next_float();
        }
        assert_eq!(a.next_float().to_bits(), b.next_float().to_bits());
    }

    #[test]
    fn renormalized_to_unit_range() {
        let mut rng = SeedStream::new(Some(5));
        let f = noise_field(48, 48, &mut rng).unwrap();
        let lo = f.values.iter().cloned().fold(f32::INFINITY, f32::min);
        let hi = f.values.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 1.0);
    }
}
