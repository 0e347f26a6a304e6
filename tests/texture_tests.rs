// Host-side tests for world map decoding.

use std::io::Cursor;

use globe_core::texture::*;
use image::{DynamicImage, ImageFormat, RgbaImage};

fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([x as u8 * 40, y as u8 * 40, 200, 255])
    });
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decodes_png_into_packed_rgba() {
    let tex = TextureImage::decode(&encode_png(3, 2), 8192).unwrap();
    assert_eq!((tex.width, tex.height), (3, 2));
    assert_eq!(tex.rgba.len(), 3 * 2 * 4);
    assert_eq!(tex.bytes_per_row(), 12);
    // second pixel of the first row
    assert_eq!(&tex.rgba[4..8], &[40, 0, 200, 255]);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = TextureImage::decode(b"definitely not an image", 8192).unwrap_err();
    assert!(matches!(err, TextureError::Decode(_)));
}

#[test]
fn oversized_images_are_rejected() {
    let err = TextureImage::decode(&encode_png(4, 2), 3).unwrap_err();
    match err {
        TextureError::TooLarge { width, height, max } => {
            assert_eq!((width, height, max), (4, 2, 3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fallback_is_a_single_opaque_texel() {
    let tex = TextureImage::fallback();
    assert_eq!((tex.width, tex.height), (1, 1));
    assert_eq!(tex.rgba.len(), 4);
    assert_eq!(tex.rgba[3], 255);
}
