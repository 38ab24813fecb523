//! Helpers shared by unit tests.

use image::{ImageFormat, Rgb, RgbImage};

/// Encodes a solid-color PNG of the given size.
pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("encoding an in-memory png");
    buf.into_inner()
}
