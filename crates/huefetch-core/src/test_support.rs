//! Helpers shared by unit tests.

use image::{ImageFormat, RgbImage};
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::thread;

/// PNG with a red/green gradient over a constant blue channel: plenty of
/// distinct colors and no near-white pixels for the quantizer to drop.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            90,
        ])
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// PNG whose even rows are reddish and odd rows bluish, each with a green
/// gradient across x. Halving the height with nearest-neighbor resampling
/// changes the color mix the quantizer sees.
pub fn row_striped_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let g = (x * 180 / width.max(1)) as u8;
        if y % 2 == 0 {
            image::Rgb([200, g, 30])
        } else {
            image::Rgb([30, g, 200])
        }
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Answers exactly one request with `status` (e.g. "404 Not Found") and `body`.
pub fn serve_once(status: &str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let status = status.to_string();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        }
    });
    format!("http://127.0.0.1:{}/image.png", port)
}

/// URL on a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/image.png", port)
}
