use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("failed to encode image: {0}")]
    EncodeError(String),

    #[error("width and height must be positive")]
    InvalidDimension,

    #[error("custom size {width}x{height} is outside the 100..=5000 px range")]
    CustomSizeOutOfRange { width: u32, height: u32 },

    #[error("quality must be between 10 and 100, got {0}")]
    InvalidQuality(u8),
}
