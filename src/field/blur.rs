use crate::foundation::error::{AstraError, AstraResult};

/// Separable Gaussian blur over an f32 plane with edge-clamped sampling.
///
/// The kernel radius is `ceil(3*sigma)`, wide enough that the truncated tail
/// is negligible for the sigmas used in grading and field smoothing.
pub(crate) fn gaussian_blur_plane(
    src: &[f32],
    width: usize,
    height: usize,
    sigma: f64,
) -> AstraResult<Vec<f32>> {
    if src.len() != width * height {
        return Err(AstraError::render(format!(
            "blur plane expects {width}x{height} = {} samples, got {}",
            width * height,
            src.len()
        )));
    }
    if sigma <= 0.0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel(sigma)?;
    let mut tmp = vec![0.0f32; src.len()];
    let mut out = vec![0.0f32; src.len()];
    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn gaussian_kernel(sigma: f64) -> AstraResult<Vec<f32>> {
    if !sigma.is_finite() {
        return Err(AstraError::render("blur sigma must be finite"));
    }
    let radius = (3.0 * sigma).ceil() as i32;
    let denom = 2.0 * sigma * sigma;

    let mut weights = Vec::with_capacity((2 * radius + 1) as usize);
    let mut sum = 0.0f64;
    for i in -radius..=radius {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights.push(w);
        sum += w;
    }
    Ok(weights.iter().map(|w| (w / sum) as f32).collect())
}

fn horizontal_pass(src: &[f32], dst: &mut [f32], width: usize, height: usize, k: &[f32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height {
        let row = y * width;
        for x in 0..w {
            let mut acc = 0.0f32;
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1) as usize;
                acc += kw * src[row + sx];
            }
            dst[row + x as usize] = acc;
        }
    }
}

fn vertical_pass(src: &[f32], dst: &mut [f32], width: usize, height: usize, k: &[f32]) {
    let radius = (k.len() / 2) as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..width {
            let mut acc = 0.0f32;
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1) as usize;
                acc += kw * src[sy * width + x];
            }
            dst[y as usize * width + x] = acc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_plane_is_preserved() {
        let src = vec![0.37f32; 6 * 4];
        let out = gaussian_blur_plane(&src, 6, 4, 2.0).unwrap();
        assert!(out.iter().all(|v| (v - 0.37).abs() < 1e-5));
    }

    #[test]
    fn impulse_spreads_but_conserves_mass() {
        let (w, h) = (9, 9);
        let mut src = vec![0.0f32; w * h];
        src[4 * w + 4] = 1.0;
        let out = gaussian_blur_plane(&src, w, h, 1.0).unwrap();

        let nonzero = out.iter().filter(|v| **v > 1e-6).count();
        assert!(nonzero > 1);

        let total: f32 = out.iter().sum();
        assert!((total - 1.0).abs() < 1e-3);
        assert!(out[4 * w + 4] < 1.0);
    }

    #[test]
    fn rejects_mismatched_plane() {
        assert!(gaussian_blur_plane(&[0.0; 5], 2, 2, 1.0).is_err());
    }
}
