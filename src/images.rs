use std::path::Path;

use image::{DynamicImage, ImageFormat};
use log::debug;

use crate::error::Result;

/// Split a square CAPTCHA image into its grid of tiles.
///
/// `tile_count` of 9 yields a 3×3 grid; anything else yields 4×4 — only
/// 9 and 16 are meaningful, and other values are a caller bug that is
/// not validated. Tiles are cropped row-major at `width / row_length`
/// intervals and written to `output_dir` as `{index}.jpg` with
/// `index = y * row_length + x`. The source is assumed square;
/// non-square inputs silently produce clipped tiles.
pub fn split_image(image: &DynamicImage, tile_count: u32, output_dir: &Path) -> Result<()> {
    let row_length = if tile_count == 9 { 3 } else { 4 };
    let interval = image.width() / row_length;

    debug!(
        "splitting {}x{} image into {} tiles of {}px",
        image.width(),
        image.height(),
        row_length * row_length,
        interval
    );

    for y in 0..row_length {
        for x in 0..row_length {
            let tile = image.crop_imm(x * interval, y * interval, interval, interval);
            let index = y * row_length + x;
            tile.into_rgb8()
                .save_with_format(output_dir.join(format!("{}.jpg", index)), ImageFormat::Jpeg)?;
        }
    }
    Ok(())
}
