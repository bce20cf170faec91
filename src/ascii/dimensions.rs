//! Dimension calculation for aspect-ratio-correct ASCII rendering.

/// Glyph cell correction factor.
/// Monospace glyph cells are taller than wide, so rows are squashed by this
/// factor to keep the portrait's proportions.
pub const CELL_ASPECT_CORRECTION: f64 = 0.55;

/// Calculate the number of output lines for a given output width.
///
/// `height = round(output_width * (img_height / img_width) * 0.55)`
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `output_width` - Output width in characters
///
/// # Returns
/// The output height in lines, 0 when any input is 0.
pub fn output_height(img_width: u32, img_height: u32, output_width: u32) -> u32 {
    output_height_with_correction(img_width, img_height, output_width, CELL_ASPECT_CORRECTION)
}

/// Same as [`output_height`] with a custom cell correction factor.
pub fn output_height_with_correction(
    img_width: u32,
    img_height: u32,
    output_width: u32,
    correction: f64,
) -> u32 {
    if img_width == 0 || img_height == 0 || output_width == 0 {
        return 0;
    }

    let aspect = img_height as f64 / img_width as f64;
    (output_width as f64 * aspect * correction).round() as u32
}
