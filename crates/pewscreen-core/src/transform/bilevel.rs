//! Bilevel (1-bit) images and Floyd-Steinberg conversion.

use image::{GrayImage, Luma};
use tracing::debug;

use crate::decode::DecodedImage;
use crate::luminance::calculate_luminance_u8;

/// Grey values at or above this are ON.
const ON_THRESHOLD: u8 = 128;

/// A two-tone image. `true` is ON (white), `false` is OFF (black).
///
/// The pixel buffer always holds exactly `width * height` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilevelImage {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl BilevelImage {
    pub(crate) fn new(width: u32, height: u32, pixels: Vec<bool>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An image with every pixel set to `on`.
    pub fn filled(width: u32, height: u32, on: bool) -> Self {
        Self::new(width, height, vec![on; (width as usize) * (height as usize)])
    }

    /// Read a greyscale image, mapping values of 128 and up to ON.
    pub fn from_gray_image(img: &GrayImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.as_raw().iter().map(|&v| v >= ON_THRESHOLD).collect();
        Self::new(width, height, pixels)
    }

    /// Render as pure black and white greyscale (0 and 255).
    pub fn to_gray_image(&self) -> GrayImage {
        let stride = self.width as usize;
        GrayImage::from_fn(self.width, self.height, |x, y| {
            let on = self.pixels[(y as usize) * stride + x as usize];
            Luma([if on { 255 } else { 0 }])
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    #[cfg(test)]
    pub(crate) fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y as usize) * (self.width as usize) + x as usize)
            .copied()
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Convert an RGB image to bilevel using Floyd-Steinberg error diffusion.
///
/// Each pixel is first reduced to BT.601 luminance, then quantized to black
/// or white with the quantization error spread to unvisited neighbours
/// (7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right). The
/// threshold is fixed. Any size is accepted, including single rows,
/// single columns and empty images.
pub fn to_bilevel(image: &DecodedImage) -> BilevelImage {
    debug!(
        width = image.width,
        height = image.height,
        "Converting image to bilevel"
    );

    floyd_steinberg(&to_luma(image))
}

fn to_luma(image: &DecodedImage) -> GrayImage {
    let mut gray = GrayImage::new(image.width, image.height);
    for (dst, rgb) in gray.pixels_mut().zip(image.pixels.chunks_exact(3)) {
        *dst = Luma([calculate_luminance_u8(rgb[0], rgb[1], rgb[2])]);
    }
    gray
}

fn floyd_steinberg(gray: &GrayImage) -> BilevelImage {
    let (width, height) = gray.dimensions();
    let (w, h) = (width as usize, height as usize);

    // i16 leaves room for accumulated error on either side of 0..=255
    let mut levels: Vec<i16> = gray.as_raw().iter().map(|&v| i16::from(v)).collect();
    let mut pixels = Vec::with_capacity(levels.len());

    for y in 0..h {
        for x in 0..w {
            let old = levels[y * w + x];
            let on = old >= i16::from(ON_THRESHOLD);
            let error = old - if on { 255 } else { 0 };
            pixels.push(on);

            distribute_error(&mut levels, x, y, w, h, error);
        }
    }

    BilevelImage::new(width, height, pixels)
}

/// Spread quantization error to the neighbours that exist.
fn distribute_error(levels: &mut [i16], x: usize, y: usize, w: usize, h: usize, error: i16) {
    let below = y + 1 < h;

    if x + 1 < w {
        levels[y * w + x + 1] += error * 7 / 16;
    }
    if below && x > 0 {
        levels[(y + 1) * w + x - 1] += error * 3 / 16;
    }
    if below {
        levels[(y + 1) * w + x] += error * 5 / 16;
    }
    if below && x + 1 < w {
        levels[(y + 1) * w + x + 1] += error / 16;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: output pixel count always matches the input dimensions.
        #[test]
        fn prop_pixel_count_matches(
            (width, height) in (1u32..=40, 1u32..=40),
            seed in 0u8..=255,
        ) {
            let size = (width as usize) * (height as usize) * 3;
            let pixels: Vec<u8> = (0..size).map(|i| ((i * 37) as u8).wrapping_add(seed)).collect();
            let img = DecodedImage::new(width, height, pixels);

            let result = to_bilevel(&img);
            prop_assert_eq!(result.pixel_count(), (width * height) as usize);
        }

        /// Property: the gray rendering only ever contains pure black and white.
        #[test]
        fn prop_gray_is_two_tone(value in 0u8..=255) {
            let img = DecodedImage::new(8, 8, vec![value; 8 * 8 * 3]);
            let gray = to_bilevel(&img).to_gray_image();

            prop_assert!(gray.as_raw().iter().all(|&v| v == 0 || v == 255));
        }
    }
}
