use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest image the mapper accepts. Flat indices must fit the signed 32-bit
/// integers hosts read the mapping back as.
pub const MAX_PIXEL_COUNT: usize = i32::MAX as usize;

#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ChannelCount {
    #[default]
    Rgb = 3,
    Rgba = 4,
}

impl ChannelCount {
    pub fn channel_count(&self) -> u8 {
        *self as u8
    }

    pub fn byte_count(&self) -> usize {
        self.channel_count() as usize
    }
}

impl TryFrom<u32> for ChannelCount {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            3 => Ok(ChannelCount::Rgb),
            4 => Ok(ChannelCount::Rgba),
            _ => Err(Error::UnsupportedChannelCount(value)),
        }
    }
}

impl std::fmt::Display for ChannelCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelCount::Rgb => write!(f, "RGB"),
            ChannelCount::Rgba => write!(f, "RGBA"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel_count(&self) -> Result<usize> {
        let count = self.width as u64 * self.height as u64;
        if count > MAX_PIXEL_COUNT as u64 {
            return Err(Error::TooManyPixels {
                width: self.width,
                height: self.height,
            });
        }
        Ok(count as usize)
    }

    pub fn byte_len(&self, channel_count: ChannelCount) -> Result<usize> {
        Ok(self.pixel_count()? * channel_count.byte_count())
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Read-only view of `width * height` pixels stored row-major with 3 or 4
/// 8-bit channels each. The length is checked once at construction.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    bytes: &'a [u8],
    size: ImageSize,
    channel_count: ChannelCount,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(bytes: &'a [u8], size: ImageSize, channel_count: ChannelCount) -> Result<Self> {
        let expected = size.byte_len(channel_count)?;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                actual: bytes.len(),
                expected,
            });
        }

        Ok(Self {
            bytes,
            size,
            channel_count,
        })
    }

    pub fn rgb(bytes: &'a [u8], width: u32, height: u32) -> Result<Self> {
        Self::new(bytes, ImageSize::new(width, height), ChannelCount::Rgb)
    }

    pub fn rgba(bytes: &'a [u8], width: u32, height: u32) -> Result<Self> {
        Self::new(bytes, ImageSize::new(width, height), ChannelCount::Rgba)
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[inline]
    pub fn channel_count(&self) -> ChannelCount {
        self.channel_count
    }

    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.bytes.len() / self.channel_count.byte_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Pixels as `[r, g, b]` in flat index order; alpha is skipped.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = [u8; 3]> + 'a {
        self.bytes
            .chunks_exact(self.channel_count.byte_count())
            .map(|px| [px[0], px[1], px[2]])
    }

    /// Packed RGB copy of the buffer.
    pub fn to_rgb(&self) -> Vec<u8> {
        match self.channel_count {
            ChannelCount::Rgb => self.bytes.to_vec(),
            ChannelCount::Rgba => {
                let mut rgb = Vec::with_capacity(self.pixel_count() * 3);
                for px in self.pixels() {
                    rgb.extend_from_slice(&px);
                }
                rgb
            }
        }
    }
}
