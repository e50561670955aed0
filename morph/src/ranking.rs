use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::luminance::brightness_of;
use crate::pixel::{PixelBuffer, MAX_PIXEL_COUNT};

/// A pixel's brightness together with its flat index in the source image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPixel {
    pub brightness: f32,
    pub index: u32,
}

impl RankedPixel {
    /// Darkest first; equal brightness falls back to the lower flat index.
    #[inline]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.brightness
            .total_cmp(&other.brightness)
            .then(self.index.cmp(&other.index))
    }
}

fn sort_ranked(ranked: &mut [RankedPixel]) {
    // Keys are unique (index breaks every tie), so an unstable sort is deterministic.
    ranked.sort_unstable_by(RankedPixel::cmp_rank);
}

/// Scores every pixel of `buffer` and orders them by brightness.
pub fn rank_pixels(buffer: &PixelBuffer) -> Vec<RankedPixel> {
    let mut ranked: Vec<RankedPixel> = buffer
        .pixels()
        .enumerate()
        .map(|(index, px)| RankedPixel {
            brightness: brightness_of(px),
            index: index as u32,
        })
        .collect();

    sort_ranked(&mut ranked);
    ranked
}

/// Orders precomputed brightness values.
pub fn rank_brightness(values: &[f32]) -> Result<Vec<RankedPixel>> {
    if values.len() > MAX_PIXEL_COUNT {
        return Err(Error::IndexSpaceOverflow {
            count: values.len(),
        });
    }

    let mut ranked: Vec<RankedPixel> = values
        .iter()
        .enumerate()
        .map(|(index, &brightness)| RankedPixel {
            brightness,
            index: index as u32,
        })
        .collect();

    sort_ranked(&mut ranked);
    Ok(ranked)
}

/// Flat indices of `values` from darkest to brightest.
pub fn sort_indices_by_brightness(values: &[f32]) -> Result<Vec<u32>> {
    Ok(rank_brightness(values)?
        .into_iter()
        .map(|ranked| ranked.index)
        .collect())
}
