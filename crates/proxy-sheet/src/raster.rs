//! Card image preparation
//!
//! Decodes a source bitmap, resamples it to the card's pixel size and
//! repacks it as raw RGB for embedding. Everything happens in memory.

use crate::types::{Result, SheetError, SourceImage};
use image::imageops::FilterType;
use image::{Rgb, RgbImage, RgbaImage};
use printpdf::{RawImage, RawImageData, RawImageFormat};

/// Decode `source` and stretch it to exactly `width` × `height` pixels.
///
/// Aspect ratio is not preserved. Transparent pixels are composited onto
/// white.
pub fn prepare_card(source: &SourceImage, width: u32, height: u32) -> Result<RgbImage> {
    let decoded = image::load_from_memory(&source.bytes).map_err(|e| SheetError::Decode {
        label: source.label.clone(),
        source: e,
    })?;

    let resized = decoded.resize_exact(width, height, FilterType::Lanczos3);

    Ok(if resized.color().has_alpha() {
        flatten_on_white(&resized.to_rgba8())
    } else {
        resized.to_rgb8()
    })
}

fn flatten_on_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Wrap prepared pixels for `PdfDocument::add_image`
pub fn to_raw_image(card: RgbImage) -> RawImage {
    let (width, height) = card.dimensions();
    RawImage {
        pixels: RawImageData::U8(card.into_raw()),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(image: image::DynamicImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_prepare_card_stretches_to_exact_size() {
        let wide = RgbImage::from_pixel(40, 10, Rgb([10, 20, 30]));
        let source = SourceImage::with_label("wide", png_bytes(wide.into()));

        let card = prepare_card(&source, 12, 17).unwrap();
        assert_eq!(card.dimensions(), (12, 17));
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let clear = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        let source = SourceImage::with_label("clear", png_bytes(clear.into()));

        let card = prepare_card(&source, 4, 4).unwrap();
        assert!(card.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_decode_error_names_image() {
        let source = SourceImage::with_label("broken", b"not an image".to_vec());
        match prepare_card(&source, 4, 4) {
            Err(SheetError::Decode { label, .. }) => assert_eq!(label, "broken"),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_image_layout() {
        let raw = to_raw_image(RgbImage::from_pixel(3, 2, Rgb([1, 2, 3])));
        assert_eq!((raw.width, raw.height), (3, 2));
        match raw.pixels {
            RawImageData::U8(pixels) => assert_eq!(pixels.len(), 3 * 2 * 3),
            _ => panic!("Expected 8-bit pixels"),
        }
    }
}
