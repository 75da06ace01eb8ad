use thiserror::Error;

#[derive(Error, Debug)]
pub enum SilhouetteError {
    #[error("Invalid image dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid color sample {sample:?} at ({x}, {y}): channels must be within 0..={channel_max}")]
    InvalidColorSample {
        x: u32,
        y: u32,
        channel_max: u16,
        sample: [u16; 3],
    },

    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SilhouetteError>;
