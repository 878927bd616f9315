pub mod image_server;

use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// Gradient PNG (red along x, green along y, fixed blue) with many distinct colors.
pub fn gradient_png(width: u32, height: u32, blue: u8) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, blue])
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Parse `url;r,g,b;r,g,b;r,g,b` into the URL and its three colors.
pub fn parse_line(line: &str) -> (String, Vec<[u8; 3]>) {
    let mut fields = line.split(';');
    let url = fields.next().unwrap().to_string();
    let colors = fields
        .map(|triple| {
            let c: Vec<u8> = triple.split(',').map(|v| v.parse().unwrap()).collect();
            assert_eq!(c.len(), 3, "triple must have three channels: {}", triple);
            [c[0], c[1], c[2]]
        })
        .collect();
    (url, colors)
}
