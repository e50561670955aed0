use crate::error::{Error, Result};
use crate::pixel::PixelBuffer;

/// Rec. 709 weights for R, G and B.
pub const LUMINANCE_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

pub const MAX_BRIGHTNESS: f32 = 255.0;

/// Brightness of an 8-bit RGB pixel in `[0, 255]`.
///
/// The weights sum to one, so white lands on 255 up to f32 rounding; the
/// result is clamped so it never leaves the range.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f32 {
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    (wr * r as f32 + wg * g as f32 + wb * b as f32).min(MAX_BRIGHTNESS)
}

#[inline]
pub fn brightness_of(pixel: [u8; 3]) -> f32 {
    brightness(pixel[0], pixel[1], pixel[2])
}

/// Brightness of every pixel, in flat index order.
pub fn compute_brightness(buffer: &PixelBuffer) -> Vec<f32> {
    buffer.pixels().map(brightness_of).collect()
}

pub fn compute_brightness_into(buffer: &PixelBuffer, out: &mut [f32]) -> Result<()> {
    if out.len() != buffer.pixel_count() {
        return Err(Error::OutputLength {
            actual: out.len(),
            expected: buffer.pixel_count(),
        });
    }

    for (dst, px) in out.iter_mut().zip(buffer.pixels()) {
        *dst = brightness_of(px);
    }
    Ok(())
}
