use std::io::{BufRead, Lines};

use super::{GrayImage, MAGIC_NUMBER, MAX_GRAY_VALUE};
use crate::error::Error;

/// Reader for the ASCII PGM (P2) format.
///
/// The header is line oriented: the magic number on the first non-empty
/// line, then any number of `#` comment lines, then the dimensions line
/// and the maximum gray value line. The pixel values that follow form a
/// single flat stream, regardless of how they are spread over lines.
pub struct PGMReader<R: BufRead> {
    lines: Lines<R>,
}

impl<R: BufRead> PGMReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    pub fn read_image(mut self) -> crate::Result<GrayImage> {
        self.parse_magic_number()?;
        let (width, height) = self.parse_dimensions()?;
        self.parse_max_value()?;
        log::debug!("Parsed PGM header: {}x{} pixels", width, height);
        let image = GrayImage::new(width, height)?;
        self.parse_pixels(image)
    }

    fn next_line(&mut self) -> crate::Result<Option<String>> {
        match self.lines.next() {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(error)) => Err(Error::ResourceUnavailable(
                String::from("input stream"),
                error,
            )),
            None => Ok(None),
        }
    }

    fn parse_magic_number(&mut self) -> crate::Result<()> {
        loop {
            let line = self
                .next_line()?
                .ok_or_else(|| Error::BadMagicNumber(String::new()))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.trim().is_empty() {
                continue;
            }
            if line != MAGIC_NUMBER {
                return Err(Error::BadMagicNumber(line.to_owned()));
            }
            return Ok(());
        }
    }

    /// Skips comment lines and parses the first non-comment line as
    /// `<width> <height>`.
    fn parse_dimensions(&mut self) -> crate::Result<(usize, usize)> {
        let line = loop {
            let line = self
                .next_line()?
                .ok_or_else(|| Error::MalformedHeader(String::new()))?;
            if !line.starts_with('#') {
                break line;
            }
        };
        let mut tokens = line.split_whitespace();
        let width = Self::parse_dimension_token(tokens.next(), &line)?;
        let height = Self::parse_dimension_token(tokens.next(), &line)?;
        Ok((width, height))
    }

    fn parse_dimension_token(token: Option<&str>, line: &str) -> crate::Result<usize> {
        token
            .ok_or_else(|| Error::MalformedHeader(line.to_owned()))?
            .parse()
            .map_err(|_| Error::MalformedHeader(line.to_owned()))
    }

    fn parse_max_value(&mut self) -> crate::Result<()> {
        let line = self
            .next_line()?
            .ok_or_else(|| Error::MalformedHeader(String::new()))?;
        let max_value: i64 = line
            .trim()
            .parse()
            .map_err(|_| Error::MalformedHeader(line.to_owned()))?;
        if max_value != MAX_GRAY_VALUE as i64 {
            return Err(Error::UnsupportedMaxValue(max_value));
        }
        Ok(())
    }

    /// Fills the grid in row-major order from the remaining token stream.
    /// Tokens beyond `width * height` are ignored.
    fn parse_pixels(&mut self, mut image: GrayImage) -> crate::Result<GrayImage> {
        let width = image.width();
        let expected = width * image.height();
        let mut placed = 0;
        'lines: while let Some(line) = self.next_line()? {
            for token in line.split_whitespace() {
                if placed == expected {
                    break 'lines;
                }
                let value = Self::parse_pixel_token(token)?;
                image.set_pixel(placed / width, placed % width, value);
                placed += 1;
            }
        }
        if placed < expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: placed,
            });
        }
        Ok(image)
    }

    fn parse_pixel_token(token: &str) -> crate::Result<u8> {
        token
            .parse()
            .map_err(|_| Error::InvalidPixelValue(token.to_owned()))
    }
}
