//! Core types for image decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for image loading and decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input path does not resolve to a file.
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error while reading the input file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not in an image format the decoder knows.
    #[error("Invalid or unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_image_creation() {
        let pixels = vec![0u8; 28 * 10 * 3];
        let img = DecodedImage::new(28, 10, pixels);

        assert_eq!(img.width, 28);
        assert_eq!(img.height, 10);
        assert_eq!(img.pixels.len(), 28 * 10 * 3);
    }

    #[test]
    fn test_from_rgb_image() {
        let rgb = image::RgbImage::from_pixel(3, 2, image::Rgb([1, 2, 3]));
        let img = DecodedImage::from_rgb_image(rgb);

        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(&img.pixels[..6], &[1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::NotFound(PathBuf::from("missing.png"));
        assert_eq!(err.to_string(), "Image not found: missing.png");

        let err = DecodeError::UnsupportedFormat("unknown magic".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid or unsupported image format: unknown magic"
        );
    }
}
