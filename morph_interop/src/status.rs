use std::str::Utf8Error;

/// Result code of every exported call. `Ok` is zero.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiStatus {
    Ok = 0,
    NullPointer = 1,
    Misaligned = 2,
    InvalidUtf8 = 3,
    BufferLength = 4,
    PixelCountMismatch = 5,
    OutputLength = 6,
    UnsupportedChannelCount = 7,
    TooManyPixels = 8,
    IndexOutOfRange = 9,
    LoggingFailed = 10,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum InteropError {
    #[error("Null pointer passed for non-empty `{0}`")]
    NullPointer(&'static str),
    #[error("Misaligned pointer passed for `{0}`")]
    Misaligned(&'static str),
    #[error("Log specification is not valid UTF-8")]
    InvalidUtf8(#[from] Utf8Error),
    #[error("Logger initialization failed: {0}")]
    Logging(String),
    #[error(transparent)]
    Morph(#[from] morph::Error),
}

impl InteropError {
    pub(crate) fn status(&self) -> FfiStatus {
        match self {
            InteropError::NullPointer(_) => FfiStatus::NullPointer,
            InteropError::Misaligned(_) => FfiStatus::Misaligned,
            InteropError::InvalidUtf8(_) => FfiStatus::InvalidUtf8,
            InteropError::Logging(_) => FfiStatus::LoggingFailed,
            InteropError::Morph(err) => match err {
                morph::Error::BufferLength { .. } => FfiStatus::BufferLength,
                morph::Error::PixelCountMismatch { .. } => FfiStatus::PixelCountMismatch,
                morph::Error::OutputLength { .. } => FfiStatus::OutputLength,
                morph::Error::UnsupportedChannelCount(_) => FfiStatus::UnsupportedChannelCount,
                morph::Error::TooManyPixels { .. } | morph::Error::IndexSpaceOverflow { .. } => {
                    FfiStatus::TooManyPixels
                }
                morph::Error::IndexOutOfRange { .. } => FfiStatus::IndexOutOfRange,
            },
        }
    }
}

pub(crate) type InteropResult<T> = Result<T, InteropError>;

/// Runs an exported call body, logging and translating its failure.
pub(crate) fn status_of(op: &str, f: impl FnOnce() -> InteropResult<()>) -> FfiStatus {
    match f() {
        Ok(()) => FfiStatus::Ok,
        Err(err) => {
            log::error!("{} failed: {}", op, err);
            err.status()
        }
    }
}
