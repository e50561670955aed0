#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferLength { actual: usize, expected: usize },
    #[error("Source has {source_count} pixels but target has {target_count}")]
    PixelCountMismatch {
        source_count: usize,
        target_count: usize,
    },
    #[error("Output holds {actual} entries, expected {expected}")]
    OutputLength { actual: usize, expected: usize },
    #[error("Unsupported channel count: {0}, expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannelCount(u32),
    #[error("Image of {width}x{height} exceeds the maximum pixel count")]
    TooManyPixels { width: u32, height: u32 },
    #[error("{count} values exceed the 32-bit index space")]
    IndexSpaceOverflow { count: usize },
    #[error("Pixel index {index} out of range for {count} pixels")]
    IndexOutOfRange { index: u32, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
