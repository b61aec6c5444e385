//! Pixel-wise and geometric transforms. Every function leaves its input
//! untouched and returns a freshly allocated result.

use crate::error::Error;
use crate::image::{GrayImage, Histogram, MAX_GRAY_VALUE};

/// Binarizes an image: pixels below `level` become 0, all others 255.
///
/// `level` is not restricted to the gray value range. Levels at or below
/// 0 yield an all-white image, levels above 255 an all-black one.
pub fn threshold(image: &GrayImage, level: i32) -> GrayImage {
    let mut output = GrayImage::allocate(image.width(), image.height());
    for row in 0..image.height() {
        for column in 0..image.width() {
            let value = if (image.pixel(row, column) as i32) < level {
                0
            } else {
                MAX_GRAY_VALUE
            };
            output.set_pixel(row, column, value);
        }
    }
    output
}

/// Counts how many pixels hold each of the 256 gray levels.
pub fn histogram(image: &GrayImage) -> Histogram {
    let mut counts = [0u32; 256];
    for row in 0..image.height() {
        for column in 0..image.width() {
            counts[image.pixel(row, column) as usize] += 1;
        }
    }
    Histogram::new(counts)
}

/// Shrinks an image by keeping every `factor`-th pixel in both
/// dimensions. Output dimensions truncate, so a factor larger than a
/// dimension produces a zero-sized image.
pub fn reduce(image: &GrayImage, factor: i32) -> crate::Result<GrayImage> {
    if factor <= 0 {
        return Err(Error::InvalidFactor(factor));
    }
    let factor = factor as usize;
    let new_width = image.width() / factor;
    let new_height = image.height() / factor;
    let mut output = GrayImage::allocate(new_width, new_height);
    for row in 0..new_height {
        for column in 0..new_width {
            output.set_pixel(row, column, image.pixel(row * factor, column * factor));
        }
    }
    Ok(output)
}

/// Grows an image by replicating every pixel into a `factor` by `factor`
/// block.
pub fn enlarge(image: &GrayImage, factor: i32) -> crate::Result<GrayImage> {
    if factor <= 0 {
        return Err(Error::InvalidFactor(factor));
    }
    let factor = factor as usize;
    let mut output = GrayImage::allocate(image.width() * factor, image.height() * factor);
    for row in 0..image.height() {
        for column in 0..image.width() {
            let value = image.pixel(row, column);
            for delta_row in 0..factor {
                for delta_column in 0..factor {
                    output.set_pixel(
                        row * factor + delta_row,
                        column * factor + delta_column,
                        value,
                    );
                }
            }
        }
    }
    Ok(output)
}

/// Absolute per-pixel difference of two images of equal dimensions.
pub fn difference(first: &GrayImage, second: &GrayImage) -> crate::Result<GrayImage> {
    if first.width() != second.width() || first.height() != second.height() {
        return Err(Error::DimensionMismatch {
            left: (first.width(), first.height()),
            right: (second.width(), second.height()),
        });
    }
    let mut output = GrayImage::allocate(first.width(), first.height());
    for row in 0..first.height() {
        for column in 0..first.width() {
            let delta =
                first.pixel(row, column) as i16 - second.pixel(row, column) as i16;
            output.set_pixel(row, column, delta.unsigned_abs() as u8);
        }
    }
    Ok(output)
}
