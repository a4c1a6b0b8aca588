//! The whole conversion, from image file to script literal.

use std::path::Path;

use tracing::info;

use crate::decode::{load_image, DecodedImage};
use crate::encode::{encode_image, EncodingSettings};
use crate::transform::{resize, to_bilevel, BilevelImage, SizeFactor};
use crate::Error;

/// Result of a conversion run.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// The `return"..."` statement.
    pub script: String,
    /// The exact pixels that were encoded.
    pub bilevel: BilevelImage,
}

/// Dither, resize and encode an already decoded image.
pub fn encode_decoded(
    image: &DecodedImage,
    size_factor: SizeFactor,
    settings: &EncodingSettings,
) -> Result<Encoded, Error> {
    let bilevel = to_bilevel(image);
    let bilevel = resize(bilevel, size_factor, settings.mode)?;
    let script = encode_image(size_factor, &bilevel, settings)?;

    Ok(Encoded { script, bilevel })
}

/// Load the image at `path` and run the full conversion.
pub fn encode_file(
    path: &Path,
    size_factor: SizeFactor,
    settings: &EncodingSettings,
) -> Result<Encoded, Error> {
    let image = load_image(path)?;
    let encoded = encode_decoded(&image, size_factor, settings)?;
    info!(
        path = %path.display(),
        width = encoded.bilevel.width(),
        height = encoded.bilevel.height(),
        len = encoded.script.len(),
        "Encoded image"
    );
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{ResizeMode, TransformError};
    use crate::ErrorKind;

    fn gradient(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _y in 0..height {
            for x in 0..width {
                let v = ((x * 255) / width.max(1)) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_default_run_shape() {
        let encoded = encode_decoded(
            &gradient(320, 240),
            SizeFactor::default(),
            &EncodingSettings::default(),
        )
        .unwrap();

        assert_eq!((encoded.bilevel.width(), encoded.bilevel.height()), (140, 120));
        // Header plus 140 * 120 / 14 = 1200 groups
        let expected_len = "return\"\"".len() + 3 * (1 + 1200);
        assert_eq!(encoded.script.len(), expected_len);
        assert!(encoded.script.starts_with("return\"00a"));
    }

    #[test]
    fn test_white_image_round_numbers() {
        let white = DecodedImage::new(14, 1200, vec![255; 14 * 1200 * 3]);
        let encoded = encode_decoded(
            &white,
            SizeFactor::new(1).unwrap(),
            &EncodingSettings::default(),
        )
        .unwrap();

        let expected = format!("return\"001{}\"", "cn3".repeat(1200));
        assert_eq!(encoded.script, expected);
    }

    #[test]
    fn test_single_pixel_column() {
        let column = DecodedImage::new(1, 300, vec![200; 300 * 3]);
        let encoded = encode_decoded(
            &column,
            SizeFactor::default(),
            &EncodingSettings::default(),
        )
        .unwrap();

        assert_eq!((encoded.bilevel.width(), encoded.bilevel.height()), (140, 120));
        assert_eq!(encoded.script.len(), "return\"\"".len() + 3 * (1 + 1200));
    }

    #[test]
    fn test_single_pixel_row() {
        let row = DecodedImage::new(300, 1, vec![200; 300 * 3]);
        let encoded =
            encode_decoded(&row, SizeFactor::default(), &EncodingSettings::default()).unwrap();

        assert_eq!(encoded.script.len(), "return\"\"".len() + 3 * (1 + 1200));
    }

    #[test]
    fn test_empty_image_is_an_error() {
        let empty = DecodedImage::new(0, 0, vec![]);
        let err = encode_decoded(&empty, SizeFactor::default(), &EncodingSettings::default())
            .unwrap_err();

        assert!(matches!(err, Error::Transform(TransformError::EmptySource)));
    }

    #[test]
    fn test_crop_too_small_fails() {
        let settings = EncodingSettings::new(Default::default(), ResizeMode::Crop);
        let err = encode_decoded(&gradient(50, 50), SizeFactor::default(), &settings).unwrap_err();

        assert!(matches!(
            err,
            Error::Transform(TransformError::InsufficientSource { .. })
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_crop_mode_keeps_corner() {
        let settings = EncodingSettings::new(Default::default(), ResizeMode::Crop);
        let img = DecodedImage::new(200, 200, vec![0; 200 * 200 * 3]);
        let encoded = encode_decoded(&img, SizeFactor::default(), &settings).unwrap();

        assert_eq!((encoded.bilevel.width(), encoded.bilevel.height()), (140, 120));
        assert!(encoded.bilevel.pixels().iter().all(|&on| !on));
    }

    #[test]
    fn test_missing_file_kind() {
        let path = std::env::temp_dir().join(format!(
            "pewscreen-{}-pipeline-missing.png",
            std::process::id()
        ));
        let err = encode_file(&path, SizeFactor::default(), &EncodingSettings::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }
}
