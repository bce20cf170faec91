//! ASCII renderer for converting a profile photo to ASCII art.
//!
//! Pipeline:
//!
//! 1. **Source** - path or inline base64 payload, decoded with `image`
//! 2. **Sampling** - luma conversion and aspect-corrected resize
//! 3. **Mapping** - each sample becomes one glyph of a [`GlyphRamp`]

mod charset;
mod dimensions;
mod mapping;
mod source;

pub use charset::{
    resolve_ramp, GlyphRamp, RampError, RampPreset, BLOCKS_RAMP, CLASSIC_RAMP, MINIMAL_RAMP,
    STANDARD_RAMP,
};
pub use dimensions::{output_height, output_height_with_correction, CELL_ASPECT_CORRECTION};
pub use mapping::{map_to_chars, render_block, AsciiBlock, LuminanceGrid};
pub use source::{
    sample_luminance, ImageError, ImageSource, INLINE_PAYLOAD_THRESHOLD, PROFILE_IMAGE_ENV,
};

/// Decode `source` and render it as an ASCII block `output_width` columns wide.
pub fn image_to_ascii(
    source: &ImageSource,
    output_width: u32,
    ramp: &GlyphRamp,
    invert: bool,
) -> Result<AsciiBlock, ImageError> {
    let image = source.decode()?;
    let grid = sample_luminance(&image, output_width);
    log::debug!(
        "Sampled {} as {}x{} luminance grid",
        source.describe(),
        grid.width(),
        grid.height()
    );
    Ok(render_block(&grid, ramp, invert))
}
