use crate::config::MorphConfig;
use crate::error::{Error, Result};
use crate::pixel::{ImageSize, PixelBuffer};
use crate::ranking::{rank_pixels, RankedPixel};

/// For every source pixel (by flat index), the flat index of the target pixel
/// it moves to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexMapping(Vec<u32>);

impl IndexMapping {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn target_of(&self, source_index: u32) -> Option<u32> {
        self.0.get(source_index as usize).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }

    /// `(source_index, target_index)` pairs in source order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (u32, u32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(source, &target)| (source as u32, target))
    }

    /// True when every target index in `[0, len)` appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &target in &self.0 {
            match seen.get_mut(target as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl From<IndexMapping> for Vec<u32> {
    fn from(mapping: IndexMapping) -> Self {
        mapping.0
    }
}

impl AsRef<[u32]> for IndexMapping {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

/// Pairs the i-th ranked source pixel with the i-th ranked target pixel.
pub fn pair_rankings(
    source: &[RankedPixel],
    target: &[RankedPixel],
    out: &mut [u32],
) -> Result<()> {
    check_pair_lengths(source.len(), target.len(), out.len())?;

    for (src, tgt) in source.iter().zip(target) {
        out[src.index as usize] = tgt.index;
    }
    Ok(())
}

/// Builds the mapping from two index lists already sorted by brightness.
///
/// Only when both lists are permutations of `[0, count)` is the result a bijection.
pub fn build_mapping(src_sorted: &[u32], tgt_sorted: &[u32]) -> Result<IndexMapping> {
    let mut out = vec![0u32; src_sorted.len()];
    build_mapping_into(src_sorted, tgt_sorted, &mut out)?;
    Ok(IndexMapping(out))
}

pub fn build_mapping_into(src_sorted: &[u32], tgt_sorted: &[u32], out: &mut [u32]) -> Result<()> {
    check_pair_lengths(src_sorted.len(), tgt_sorted.len(), out.len())?;

    let count = out.len();
    if let Some(&index) = src_sorted
        .iter()
        .chain(tgt_sorted)
        .find(|&&index| index as usize >= count)
    {
        return Err(Error::IndexOutOfRange { index, count });
    }

    for (&src, &tgt) in src_sorted.iter().zip(tgt_sorted) {
        out[src as usize] = tgt;
    }
    Ok(())
}

fn check_pair_lengths(source_count: usize, target_count: usize, out_len: usize) -> Result<()> {
    if source_count != target_count {
        return Err(Error::PixelCountMismatch {
            source_count,
            target_count,
        });
    }
    if out_len != source_count {
        return Err(Error::OutputLength {
            actual: out_len,
            expected: source_count,
        });
    }
    Ok(())
}

/// Maps source pixels onto target pixels of matching brightness rank.
#[derive(Debug, Clone, Default)]
pub struct RankPairMapper {
    config: MorphConfig,
}

impl RankPairMapper {
    pub fn new(config: MorphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn map(&self, source: &PixelBuffer, target: &PixelBuffer) -> Result<IndexMapping> {
        let mut out = vec![0u32; source.pixel_count()];
        self.map_into(source, target, &mut out)?;
        Ok(IndexMapping(out))
    }

    /// Fills `out` (one entry per source pixel) in place.
    pub fn map_into(
        &self,
        source: &PixelBuffer,
        target: &PixelBuffer,
        out: &mut [u32],
    ) -> Result<()> {
        let count = source.pixel_count();
        check_pair_lengths(count, target.pixel_count(), out.len())?;

        if count == 0 {
            return Ok(());
        }

        let parallel = self.config.runs_parallel(count);
        log::debug!(
            "Mapping {} pixels ({} -> {}), parallel: {}",
            count,
            source.size(),
            target.size(),
            parallel
        );

        let (source_ranked, target_ranked) = common::parallel::join_if(
            parallel,
            || rank_pixels(source),
            || rank_pixels(target),
        );

        pair_rankings(&source_ranked, &target_ranked, out)
    }

    /// Maps raw buffers laid out as `config.channel_count`.
    pub fn map_bytes(
        &self,
        source: &[u8],
        target: &[u8],
        width: u32,
        height: u32,
    ) -> Result<IndexMapping> {
        let size = ImageSize::new(width, height);
        let source = PixelBuffer::new(source, size, self.config.channel_count)?;
        let target = PixelBuffer::new(target, size, self.config.channel_count)?;
        self.map(&source, &target)
    }
}

/// Rank-pair mapping of two packed RGB buffers of `width * height` pixels.
pub fn compute_mapping(
    source: &[u8],
    target: &[u8],
    width: u32,
    height: u32,
) -> Result<IndexMapping> {
    RankPairMapper::default().map_bytes(source, target, width, height)
}

pub fn compute_mapping_with(
    config: &MorphConfig,
    source: &[u8],
    target: &[u8],
    width: u32,
    height: u32,
) -> Result<IndexMapping> {
    RankPairMapper::new(config.clone()).map_bytes(source, target, width, height)
}
