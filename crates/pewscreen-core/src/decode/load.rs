//! Image loading from disk or memory.

use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use image::{ImageError, ImageReader};
use tracing::debug;

use super::{DecodeError, DecodedImage};

/// Read and decode an image file from disk.
///
/// # Errors
///
/// Returns `DecodeError::NotFound` if nothing exists at `path`,
/// `DecodeError::Io` for any other read failure, and the errors of
/// [`decode_image`] for the file contents.
pub fn load_image(path: &Path) -> Result<DecodedImage, DecodeError> {
    debug!(path = %path.display(), "Loading image");

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DecodeError::NotFound(path.to_path_buf()),
        _ => DecodeError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    decode_image(&bytes)
}

/// Decode an image from bytes.
///
/// The format is guessed from the content, so any format enabled on the
/// `image` crate is accepted. Alpha is discarded and pixels are taken in
/// stored order; EXIF orientation tags are ignored.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the format cannot be
/// recognised, `DecodeError::CorruptedFile` if decoding fails midway.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat(
            "unrecognised image signature".to_string(),
        ));
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(err) => DecodeError::UnsupportedFormat(err.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    let decoded = DecodedImage::from_rgb_image(img.into_rgb8());
    debug!(
        width = decoded.width,
        height = decoded.height,
        "Decoded image"
    );

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, _| {
            if x % 2 == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pewscreen-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_decode_png() {
        let img = decode_image(&png_bytes(6, 3)).unwrap();

        assert_eq!(img.width, 6);
        assert_eq!(img.height, 3);
        assert_eq!(img.pixels.len(), 6 * 3 * 3);
        assert_eq!(&img.pixels[0..6], &[255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn test_decode_garbage_is_unsupported() {
        let result = decode_image(b"definitely not an image");
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(16, 16);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    /// A JPEG carrying an EXIF "rotate 90 CW" orientation tag.
    fn rotated_jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut buffer, ImageFormat::Jpeg)
            .unwrap();
        let jpeg = buffer.into_inner();

        let mut app1 = vec![0xFF, 0xE1, 0x00, 0x22];
        app1.extend_from_slice(b"Exif\0\0");
        app1.extend_from_slice(b"MM\0\x2a\0\0\0\x08");
        app1.extend_from_slice(&[0x00, 0x01]);
        app1.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        app1.extend_from_slice(&[0x00, 0x06, 0x00, 0x00]);
        app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        // Right after SOI
        let mut bytes = jpeg[..2].to_vec();
        bytes.extend(app1);
        bytes.extend_from_slice(&jpeg[2..]);
        bytes
    }

    #[test]
    fn test_exif_orientation_is_ignored() {
        let img = decode_image(&rotated_jpeg_bytes(6, 2)).unwrap();
        assert_eq!((img.width, img.height), (6, 2));
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_path("does-not-exist.png");
        let result = load_image(&path);
        assert!(matches!(result, Err(DecodeError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_load_from_disk() {
        let path = temp_path("load.png");
        fs::write(&path, png_bytes(4, 2)).unwrap();

        let img = load_image(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!((img.width, img.height), (4, 2));
    }
}
