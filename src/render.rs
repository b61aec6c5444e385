//! Conversion of a grayscale image into an RGB pixel buffer for a host
//! UI. Rendering stays outside the image type since it is host specific.

use crate::image::GrayImage;

/// An RGB bitmap with one `[red, green, blue]` triple per pixel, stored
/// row-major.
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl Bitmap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }
}

/// Maps every gray value `v` to the RGB triple `(v, v, v)`.
pub fn to_bitmap(image: &GrayImage) -> Bitmap {
    let mut pixels = Vec::with_capacity(image.width() * image.height());
    for row in 0..image.height() {
        for column in 0..image.width() {
            let value = image.pixel(row, column);
            pixels.push([value, value, value]);
        }
    }
    Bitmap {
        width: image.width(),
        height: image.height(),
        pixels,
    }
}
