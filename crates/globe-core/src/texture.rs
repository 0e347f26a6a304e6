//! Decoding of the equirectangular world map into tightly packed RGBA8.

/// Errors that can occur while turning fetched bytes into texture data.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("could not decode world map: {0}")]
    Decode(#[from] image::ImageError),

    #[error("texture dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    #[error("texture {width}x{height} exceeds the {max}px limit")]
    TooLarge { width: u32, height: u32, max: u32 },
}

/// CPU-side RGBA8 image ready for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Decode PNG or JPEG bytes. Images larger than `max_dimension` on either
    /// side are rejected rather than silently downscaled.
    pub fn decode(bytes: &[u8], max_dimension: u32) -> Result<Self, TextureError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroDimensions { width, height });
        }
        if width > max_dimension || height > max_dimension {
            return Err(TextureError::TooLarge {
                width,
                height,
                max: max_dimension,
            });
        }
        log::debug!("decoded world map {}x{}", width, height);
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Single mid-grey texel used until the world map arrives.
    pub fn fallback() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![96, 96, 96, 255],
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}
