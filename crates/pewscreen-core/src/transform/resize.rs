//! Bringing a bilevel image to the size-factor target.
//!
//! Rescaling samples the nearest source pixel, so no intermediate grey
//! levels are introduced and the output is still strictly two-tone.

use image::imageops::{self, FilterType};
use tracing::{debug, trace};

use super::{BilevelImage, ResizeMode, SizeFactor, TransformError};

/// Bring `image` to the target size of `size_factor` using `mode`.
///
/// # Errors
///
/// * `TransformError::EmptySource` when rescaling an image with no pixels
/// * `TransformError::InsufficientSource` when cropping a source that is
///   narrower or shorter than the target
pub fn resize(
    image: BilevelImage,
    size_factor: SizeFactor,
    mode: ResizeMode,
) -> Result<BilevelImage, TransformError> {
    let (width, height) = size_factor.target_size();
    debug!(
        size_factor = size_factor.get(),
        %mode,
        width,
        height,
        "Resizing image"
    );

    match mode {
        ResizeMode::Resize => rescale(image, width, height),
        ResizeMode::Crop => crop_top_left(&image, width, height),
    }
}

/// Rescale to exact dimensions with nearest-neighbour sampling.
fn rescale(image: BilevelImage, width: u32, height: u32) -> Result<BilevelImage, TransformError> {
    // Fast path: if dimensions match, hand the image straight back
    if image.width() == width && image.height() == height {
        return Ok(image);
    }
    if image.is_empty() {
        return Err(TransformError::EmptySource);
    }

    let gray = image.to_gray_image();
    let resized = imageops::resize(&gray, width, height, FilterType::Nearest);
    trace!(
        from_width = image.width(),
        from_height = image.height(),
        width,
        height,
        "Rescaled"
    );

    Ok(BilevelImage::from_gray_image(&resized))
}

/// Keep the `width x height` region anchored at the top-left corner.
fn crop_top_left(
    image: &BilevelImage,
    width: u32,
    height: u32,
) -> Result<BilevelImage, TransformError> {
    if image.width() < width || image.height() < height {
        return Err(TransformError::InsufficientSource {
            source_width: image.width(),
            source_height: image.height(),
            target_width: width,
            target_height: height,
        });
    }

    let src_width = image.width() as usize;
    let pixels = image
        .pixels()
        .chunks_exact(src_width)
        .take(height as usize)
        .flat_map(|row| &row[..width as usize])
        .copied()
        .collect();

    Ok(BilevelImage::new(width, height, pixels))
}
