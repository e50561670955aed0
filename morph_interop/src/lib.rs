#![deny(improper_ctypes_definitions)]

//! C ABI over `morph` for hosts that can only pass flat memory regions
//! (e.g. a managed runtime calling into a compiled module). Every pointer comes
//! with an explicit element count; nothing here owns host memory.

use morph::{ChannelCount, ImageSize, MorphConfig, PixelBuffer, RankPairMapper};

pub use crate::ffi::FfiBuf;
use crate::slice::{slice_from_raw, slice_from_raw_mut};
use crate::status::{status_of, InteropError, InteropResult};

pub use crate::status::FfiStatus;

mod ffi;
mod slice;
mod status;

unsafe fn pixel_buffer<'a>(
    ptr: *const u8,
    len: usize,
    size: ImageSize,
    channel_count: ChannelCount,
    name: &'static str,
) -> InteropResult<PixelBuffer<'a>> {
    let bytes = slice_from_raw(ptr, len, name)?;
    Ok(PixelBuffer::new(bytes, size, channel_count)?)
}

fn mapper_for(channels: u32) -> InteropResult<(RankPairMapper, ChannelCount)> {
    let channel_count = ChannelCount::try_from(channels)?;
    let config = MorphConfig::default().with_channel_count(channel_count);
    Ok((RankPairMapper::new(config), channel_count))
}

/// Fills `out_map[s]` with the target index paired with source pixel `s`.
///
/// # Safety
/// Each pointer must be valid for its length (`*_len` in bytes for pixels,
/// in `u32` entries for `out_map`), or null with a zero length.
#[no_mangle]
pub unsafe extern "C" fn compute_mapping(
    source: *const u8,
    source_len: usize,
    target: *const u8,
    target_len: usize,
    width: u32,
    height: u32,
    channels: u32,
    out_map: *mut u32,
    out_len: usize,
) -> FfiStatus {
    status_of("compute_mapping", || {
        let (mapper, channel_count) = mapper_for(channels)?;
        let size = ImageSize::new(width, height);
        let source = pixel_buffer(source, source_len, size, channel_count, "source")?;
        let target = pixel_buffer(target, target_len, size, channel_count, "target")?;
        let out = slice_from_raw_mut(out_map, out_len, "out_map")?;

        mapper.map_into(&source, &target, out)?;
        Ok(())
    })
}

/// Same as [`compute_mapping`] but returns a library-owned buffer of `u32`
/// entries. A null buffer signals failure (details go to the log). Release it
/// with [`destroy_ffi_buf`].
///
/// # Safety
/// See [`compute_mapping`].
#[no_mangle]
pub unsafe extern "C" fn compute_mapping_owned(
    source: *const u8,
    source_len: usize,
    target: *const u8,
    target_len: usize,
    width: u32,
    height: u32,
    channels: u32,
) -> FfiBuf {
    let result = (|| -> InteropResult<FfiBuf> {
        let (mapper, channel_count) = mapper_for(channels)?;
        let size = ImageSize::new(width, height);
        let source = pixel_buffer(source, source_len, size, channel_count, "source")?;
        let target = pixel_buffer(target, target_len, size, channel_count, "target")?;

        Ok(mapper.map(&source, &target)?.into_vec().into())
    })();

    result.unwrap_or_else(|err| {
        log::error!("compute_mapping_owned failed: {}", err);
        FfiBuf::default()
    })
}

/// Writes the brightness of every pixel to `out_brightness`.
///
/// # Safety
/// `pixels` must be valid for `pixels_len` bytes and `out_brightness` for
/// `out_len` floats, or null with a zero length.
#[no_mangle]
pub unsafe extern "C" fn compute_brightness(
    pixels: *const u8,
    pixels_len: usize,
    width: u32,
    height: u32,
    channels: u32,
    out_brightness: *mut f32,
    out_len: usize,
) -> FfiStatus {
    status_of("compute_brightness", || {
        let channel_count = ChannelCount::try_from(channels)?;
        let size = ImageSize::new(width, height);
        let pixels = pixel_buffer(pixels, pixels_len, size, channel_count, "pixels")?;
        let out = slice_from_raw_mut(out_brightness, out_len, "out_brightness")?;

        morph::compute_brightness_into(&pixels, out)?;
        Ok(())
    })
}

/// Writes the indices of `brightness_values` from darkest to brightest.
///
/// # Safety
/// `brightness_values` and `out_indices` must both be valid for `count`
/// elements, or null with a zero count.
#[no_mangle]
pub unsafe extern "C" fn sort_indices_by_brightness(
    brightness_values: *const f32,
    count: usize,
    out_indices: *mut u32,
) -> FfiStatus {
    status_of("sort_indices_by_brightness", || {
        let values = slice_from_raw(brightness_values, count, "brightness_values")?;
        let out = slice_from_raw_mut(out_indices, count, "out_indices")?;

        out.copy_from_slice(&morph::sort_indices_by_brightness(values)?);
        Ok(())
    })
}

/// `out_map[src_sorted[i]] = tgt_sorted[i]` for every `i < count`.
///
/// # Safety
/// All three pointers must be valid for `count` elements, or null with a zero
/// count.
#[no_mangle]
pub unsafe extern "C" fn build_mapping(
    src_sorted: *const u32,
    tgt_sorted: *const u32,
    count: usize,
    out_map: *mut u32,
) -> FfiStatus {
    status_of("build_mapping", || {
        let src_sorted = slice_from_raw(src_sorted, count, "src_sorted")?;
        let tgt_sorted = slice_from_raw(tgt_sorted, count, "tgt_sorted")?;
        let out = slice_from_raw_mut(out_map, count, "out_map")?;

        morph::build_mapping_into(src_sorted, tgt_sorted, out)?;
        Ok(())
    })
}

#[no_mangle]
pub extern "C" fn destroy_ffi_buf(buf: FfiBuf) {
    drop(buf);
}

/// Starts file logging with a `flexi_logger` specification such as `"info"`
/// or `"morph=debug"`.
///
/// # Safety
/// `spec` must be valid for `spec_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn init_logging(spec: *const u8, spec_len: usize) -> FfiStatus {
    let result = (|| -> InteropResult<()> {
        let bytes = slice_from_raw(spec, spec_len, "spec")?;
        let spec = std::str::from_utf8(bytes)?;
        common::try_setup_logging(spec).map_err(|e| InteropError::Logging(e.to_string()))
    })();

    match result {
        Ok(()) => FfiStatus::Ok,
        // No logger to report to.
        Err(err) => err.status(),
    }
}
