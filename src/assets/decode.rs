use std::sync::Arc;

use crate::foundation::error::{FingersumError, FingersumResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Decoded photo ready for compositing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, tightly packed, row-major.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode any format `image` understands into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> FingersumResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FingersumError::asset(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(FingersumError::asset("image has no pixels"));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
