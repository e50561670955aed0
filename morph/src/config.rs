use std::path::Path;

use serde::{Deserialize, Serialize};

use common::file_format::FileFormat;

use crate::pixel::ChannelCount;

/// Pixel count of one 256x256 canvas.
pub const DEFAULT_PARALLEL_MIN_PIXELS: usize = 256 * 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Layout of the buffers handed to [`crate::compute_mapping_with`].
    pub channel_count: ChannelCount,
    /// Rank source and target on separate rayon workers.
    pub parallel: bool,
    /// Images smaller than this are ranked on the calling thread even when
    /// `parallel` is set.
    pub parallel_min_pixels: usize,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            channel_count: ChannelCount::Rgb,
            parallel: true,
            parallel_min_pixels: DEFAULT_PARALLEL_MIN_PIXELS,
        }
    }
}

impl MorphConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_channel_count(mut self, channel_count: ChannelCount) -> Self {
        self.channel_count = channel_count;
        self
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config: Self = common::serde::deserialize_file(path)?;
        log::debug!("Loaded morph config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_text(text: &str, format: FileFormat) -> anyhow::Result<Self> {
        common::serde::deserialize(text.as_bytes(), format)
    }

    pub fn to_text(&self, format: FileFormat) -> anyhow::Result<String> {
        common::serde::serialize(self, format)
    }

    pub(crate) fn runs_parallel(&self, pixel_count: usize) -> bool {
        self.parallel && pixel_count >= self.parallel_min_pixels
    }
}
