use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    BadMagicNumber(String),
    MalformedHeader(String),
    UnsupportedMaxValue(i64),
    PixelCountMismatch { expected: usize, actual: usize },
    InvalidPixelValue(String),
    InvalidDimension(usize, usize),
    InvalidFactor(i32),
    DimensionMismatch { left: (usize, usize), right: (usize, usize) },
    WriteFailure(String, std::io::Error),
    ResourceUnavailable(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadMagicNumber(found) => {
                write!(
                    f,
                    "File does not start with magic number 'P2', found '{}'",
                    found
                )
            }
            Self::MalformedHeader(line) => {
                write!(f, "Malformed header line '{}'", line)
            }
            Self::UnsupportedMaxValue(value) => {
                write!(
                    f,
                    "Unsupported maximum gray value {}, only 255 is supported",
                    value
                )
            }
            Self::PixelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Expected {} pixel values, but only {} were present",
                    expected, actual
                )
            }
            Self::InvalidPixelValue(token) => {
                write!(
                    f,
                    "Invalid pixel value '{}', expected an integer between 0 and 255",
                    token
                )
            }
            Self::InvalidDimension(width, height) => {
                write!(
                    f,
                    "Invalid image dimensions {}x{}, width and height must be positive",
                    width, height
                )
            }
            Self::InvalidFactor(factor) => {
                write!(f, "Invalid resize factor {}, factor must be positive", factor)
            }
            Self::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "Image dimensions are different ({}x{} vs {}x{})",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::WriteFailure(target, error) => {
                write!(f, "Unable to write '{}': {}", target, error)
            }
            Self::ResourceUnavailable(path, error) => {
                write!(f, "Unable to read '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}
