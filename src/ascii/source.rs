//! Image sources and luminance sampling.
//!
//! A profile picture arrives either as a filesystem path or as an inline
//! base64 payload (typically from the `PROFILE_IMAGE_BASE64` secret).

use std::path::{Path, PathBuf};

use base64::Engine;
use image::imageops::{self, FilterType};
use image::DynamicImage;
use thiserror::Error;

use super::dimensions::output_height;
use super::mapping::LuminanceGrid;

/// Environment variable carrying an inline base64 image.
pub const PROFILE_IMAGE_ENV: &str = "PROFILE_IMAGE_BASE64";

/// Inputs longer than this are treated as base64 payloads.
pub const INLINE_PAYLOAD_THRESHOLD: usize = 500;

/// Prefix of a data URI carrying an image.
const DATA_IMAGE_PREFIX: &str = "data:image";

/// Errors raised while loading the profile image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to open image '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to decode image payload: {0}")]
    Decode(#[source] image::ImageError),
}

/// Where the profile image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image file on disk
    Path(PathBuf),
    /// Base64 payload, data-URI prefix already stripped
    Inline(String),
}

impl ImageSource {
    /// Classify a raw setting as a path or an inline payload.
    ///
    /// Inline when the value starts with a `data:image` marker or is longer
    /// than [`INLINE_PAYLOAD_THRESHOLD`] characters; a path otherwise.
    pub fn detect(raw: &str) -> Self {
        if raw.starts_with(DATA_IMAGE_PREFIX) || raw.chars().count() > INLINE_PAYLOAD_THRESHOLD {
            let payload = match raw.split_once(',') {
                Some((_, data)) => data,
                None => raw,
            };
            ImageSource::Inline(payload.to_string())
        } else {
            ImageSource::Path(PathBuf::from(raw))
        }
    }

    /// Short description for log lines, never the payload itself.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Inline(payload) => format!("inline payload ({} bytes)", payload.len()),
        }
    }

    /// Decode the image.
    pub fn decode(&self) -> Result<DynamicImage, ImageError> {
        match self {
            ImageSource::Path(path) => open_path(path),
            ImageSource::Inline(payload) => {
                let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
                let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
                image::load_from_memory(&bytes).map_err(ImageError::Decode)
            }
        }
    }
}

fn open_path(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path).map_err(|source| ImageError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Sample an image as luminance at `output_width` columns.
///
/// The image is converted to 8-bit luma and resized with a bicubic filter to
/// `output_width x output_height(...)`. A zero output size yields an empty grid.
pub fn sample_luminance(image: &DynamicImage, output_width: u32) -> LuminanceGrid {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();
    let out_height = output_height(width, height, output_width);

    if output_width == 0 || out_height == 0 {
        return LuminanceGrid::empty(output_width);
    }

    let resized = imageops::resize(&gray, output_width, out_height, FilterType::CatmullRom);
    LuminanceGrid::new(output_width, out_height, resized.into_raw())
        .unwrap_or_else(|| LuminanceGrid::empty(output_width))
}
