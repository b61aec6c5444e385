use std::io::Write;

use super::{GrayImage, MAGIC_NUMBER, MAX_GRAY_VALUE};
use crate::error::Error;

const COMMENT_LINE: &str = "# written by pgm-toolbox";
const MAX_VALUES_PER_LINE: usize = 17;

/// Writer for the ASCII PGM (P2) format.
///
/// Pixel output wraps after 17 values and additionally breaks the line
/// at the end of every image row. The wrap counter carries across rows.
/// Readers must not depend on this arrangement, it is cosmetic only.
pub struct PGMWriter<W: Write> {
    writer: W,
}

impl<W: Write> PGMWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_image(&mut self, image: &GrayImage) -> crate::Result<()> {
        self.write_header(image)?;
        self.write_pixels(image)?;
        self.writer
            .flush()
            .map_err(|e| Error::WriteFailure(String::from("output stream"), e))
    }

    fn write_header(&mut self, image: &GrayImage) -> crate::Result<()> {
        writeln!(self.writer, "{}", MAGIC_NUMBER).map_err(Self::header_write_failure)?;
        writeln!(self.writer, "{}", COMMENT_LINE).map_err(Self::header_write_failure)?;
        writeln!(self.writer, "{} {}", image.width(), image.height())
            .map_err(Self::header_write_failure)?;
        writeln!(self.writer, "{}", MAX_GRAY_VALUE).map_err(Self::header_write_failure)
    }

    fn write_pixels(&mut self, image: &GrayImage) -> crate::Result<()> {
        let mut values_on_line = 0;
        for row in 0..image.height() {
            for column in 0..image.width() {
                write!(self.writer, "{} ", image.pixel(row, column))
                    .map_err(Self::pixel_write_failure)?;
                values_on_line += 1;
                if values_on_line >= MAX_VALUES_PER_LINE {
                    writeln!(self.writer).map_err(Self::pixel_write_failure)?;
                    values_on_line = 0;
                }
            }
            // Row boundaries always force a line break.
            writeln!(self.writer).map_err(Self::pixel_write_failure)?;
        }
        Ok(())
    }

    fn header_write_failure(error: std::io::Error) -> Error {
        Error::WriteFailure(String::from("header"), error)
    }

    fn pixel_write_failure(error: std::io::Error) -> Error {
        Error::WriteFailure(String::from("pixel data"), error)
    }
}

#[cfg(test)]
mod test {
    use super::PGMWriter;
    use crate::image::reader::PGMReader;
    use crate::image::GrayImage;

    fn write_pgm_string(image: &GrayImage) -> String {
        let mut buffer = Vec::new();
        let mut writer = PGMWriter::new(&mut buffer);
        writer.write_image(image).expect("Writing to a Vec failed");
        String::from_utf8(buffer).expect("Writer produced invalid UTF-8")
    }

    #[test]
    fn write_small_image() {
        let image = GrayImage::from_pixels(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap();
        let content = write_pgm_string(&image);
        let expected = "P2\n# written by pgm-toolbox\n3 2\n255\n0 50 100 \n150 200 250 \n";
        assert_eq!(content, expected);
    }

    #[test]
    fn lines_never_hold_more_than_seventeen_values() {
        let image = GrayImage::from_pixels(40, 2, vec![9; 80]).unwrap();
        let content = write_pgm_string(&image);
        for line in content.lines().skip(4) {
            assert!(
                line.split_whitespace().count() <= 17,
                "Line '{}' holds too many values",
                line
            );
        }
    }

    #[test]
    fn every_image_row_ends_a_line() {
        let image = GrayImage::from_pixels(5, 3, (0..15).collect()).unwrap();
        let content = write_pgm_string(&image);
        let pixel_lines: Vec<&str> = content.lines().skip(4).collect();
        assert_eq!(pixel_lines.len(), 3);
        for line in pixel_lines {
            assert_eq!(line.split_whitespace().count(), 5);
        }
    }

    #[test]
    fn written_image_reads_back_identical() {
        let pixels: Vec<u8> = (0..100).map(|i| (i * 2) as u8).collect();
        let image = GrayImage::from_pixels(10, 10, pixels).unwrap();
        let content = write_pgm_string(&image);
        let restored = PGMReader::new(content.as_bytes())
            .read_image()
            .expect("Round trip read failed");
        assert_eq!(restored, image);
    }

    #[test]
    fn single_pixel_round_trip() {
        let image = GrayImage::from_pixels(1, 1, vec![128]).unwrap();
        let content = write_pgm_string(&image);
        let restored = PGMReader::new(content.as_bytes()).read_image().unwrap();
        assert_eq!(restored.width(), 1);
        assert_eq!(restored.height(), 1);
        assert_eq!(restored.pixel(0, 0), 128);
    }
}
