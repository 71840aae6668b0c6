use crate::foundation::error::{AstraError, AstraResult};

// BT.709 luma weights, applied to normalized channels.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Owned square RGB8 raster, row-major from the top-left pixel.
///
/// This is the only pixel container crossing the pipeline boundary: the
/// graded base enters as a `Raster` and every intermediate plane is derived
/// from it per render call.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    size: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a solid-color raster of `size`×`size`.
    pub fn solid(size: u32, rgb: [u8; 3]) -> Self {
        let px = (size as usize) * (size as usize);
        let mut data = Vec::with_capacity(px * 3);
        for _ in 0..px {
            data.extend_from_slice(&rgb);
        }
        Self { size, data }
    }

    /// Wrap an existing RGB8 buffer, validating its length.
    pub fn from_rgb8(size: u32, data: Vec<u8>) -> AstraResult<Self> {
        let expected = (size as usize)
            .checked_mul(size as usize)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| AstraError::raster("raster byte size overflow"))?;
        if data.len() != expected {
            return Err(AstraError::raster(format!(
                "expected {expected} bytes for a {size}x{size} RGB raster, got {}",
                data.len()
            )));
        }
        Ok(Self { size, data })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGB8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// BT.709 luminance plane over normalized channels, one f32 per pixel.
    pub(crate) fn luminance_plane(&self) -> Vec<f32> {
        self.data
            .chunks_exact(3)
            .map(|px| {
                let r = f32::from(px[0]) / 255.0;
                let g = f32::from(px[1]) / 255.0;
                let b = f32::from(px[2]) / 255.0;
                LUMA_R * r + LUMA_G * g + LUMA_B * b
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_fill_repeats_the_color() {
        let r = Raster::solid(4, [10, 20, 30]);
        assert_eq!(r.size(), 4);
        assert_eq!(r.data().len(), 4 * 4 * 3);
        assert!(r.data().chunks_exact(3).all(|px| px == [10, 20, 30]));
    }

    #[test]
    fn from_rgb8_rejects_wrong_length() {
        let err = Raster::from_rgb8(4, vec![0; 10]).unwrap_err();
        assert!(matches!(err, AstraError::Raster(_)));
    }

    #[test]
    fn luminance_is_unit_for_white_and_zero_for_black() {
        let white = Raster::solid(2, [255, 255, 255]);
        let black = Raster::solid(2, [0, 0, 0]);
        assert!(white.luminance_plane().iter().all(|l| (l - 1.0).abs() < 1e-4));
        assert!(black.luminance_plane().iter().all(|l| *l == 0.0));
    }
}
