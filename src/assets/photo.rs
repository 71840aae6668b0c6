use std::io::Cursor;

use image::ImageDecoder as _;
use image::imageops::FilterType;
use image::metadata::Orientation;

use crate::foundation::error::{AstraError, AstraResult};
use crate::raster::Raster;

/// Decode an uploaded photo into a square base raster.
///
/// Applies the EXIF orientation when present, center-crops to the shorter
/// side, and resizes to `size`×`size` with a Lanczos filter. Undecodable
/// input is an [`AstraError::Raster`].
pub fn decode_photo(bytes: &[u8], size: u32) -> AstraResult<Raster> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AstraError::raster(format!("could not probe image format: {e}")))?;
    let mut decoder = reader
        .into_decoder()
        .map_err(|e| AstraError::raster(format!("could not decode image: {e}")))?;
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);
    let mut img = image::DynamicImage::from_decoder(decoder)
        .map_err(|e| AstraError::raster(format!("could not decode image: {e}")))?;
    img.apply_orientation(orientation);

    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(AstraError::raster("image has zero dimension"));
    }
    let side = w.min(h);
    let left = (w - side) / 2;
    let top = (h - side) / 2;
    let square = img
        .crop_imm(left, top, side, side)
        .resize_exact(size, size, FilterType::Lanczos3);

    Raster::from_rgb8(size, square.to_rgb8().into_raw())
}
