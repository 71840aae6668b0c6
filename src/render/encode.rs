use std::io::Cursor;

use crate::foundation::error::{AstraError, AstraResult};
use crate::raster::Raster;

/// Encode the finished canvas as PNG at its native pixel size.
pub(crate) fn encode_png(canvas: &Raster) -> AstraResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut buf,
        canvas.data(),
        canvas.size(),
        canvas.size(),
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| AstraError::render(format!("png encode failed: {e}")))?;
    Ok(buf.into_inner())
}
