pub mod config;
pub mod error;
pub mod luminance;
pub mod mapping;
pub mod pixel;
pub mod ranking;

#[cfg(test)]
mod tests;

pub use config::MorphConfig;
pub use error::{Error, Result};
pub use luminance::{brightness, compute_brightness, compute_brightness_into, MAX_BRIGHTNESS};
pub use mapping::{
    build_mapping, build_mapping_into, compute_mapping, compute_mapping_with, pair_rankings,
    IndexMapping, RankPairMapper,
};
pub use pixel::{ChannelCount, ImageSize, PixelBuffer, MAX_PIXEL_COUNT};
pub use ranking::{rank_brightness, rank_pixels, sort_indices_by_brightness, RankedPixel};
