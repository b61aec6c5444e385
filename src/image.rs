use crate::error::Error;

pub mod reader;
pub mod writer;

/// Magic number of the ASCII PGM variant.
pub(crate) const MAGIC_NUMBER: &str = "P2";

/// The only maximum gray value this crate supports.
pub const MAX_GRAY_VALUE: u8 = 255;

const NUMBER_OF_GRAY_LEVELS: usize = MAX_GRAY_VALUE as usize + 1;

/// A single grayscale raster with fixed dimensions.
///
/// Pixels are stored row-major in a flat buffer that the image owns
/// exclusively. Transforms never mutate an existing image, they allocate
/// a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl GrayImage {
    /// Creates a zero-initialized image. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension(width, height));
        }
        Ok(Self::allocate(width, height))
    }

    /// Creates an image from an existing row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u8>) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension(width, height));
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    // Transforms may legally produce zero-sized images, for example a
    // reduction whose factor exceeds a dimension.
    pub(crate) fn allocate(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, row: usize, column: usize) -> u8 {
        self.pixels[row * self.width + column]
    }

    pub(crate) fn set_pixel(&mut self, row: usize, column: usize, value: u8) {
        self.pixels[row * self.width + column] = value;
    }
}

/// Per-intensity pixel counts of a single image, one bin for every gray
/// level from 0 to 255. A snapshot, independent of the source image.
pub struct Histogram {
    counts: [u32; NUMBER_OF_GRAY_LEVELS],
}

impl Histogram {
    pub(crate) fn new(counts: [u32; NUMBER_OF_GRAY_LEVELS]) -> Self {
        Self { counts }
    }

    pub fn count(&self, value: u8) -> u32 {
        self.counts[value as usize]
    }

    pub fn counts(&self) -> &[u32; NUMBER_OF_GRAY_LEVELS] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| count as u64).sum()
    }
}
