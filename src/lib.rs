use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::{CLIParser, Operation};
pub use error::Error;
use image::reader::PGMReader;
use image::writer::PGMWriter;
pub use image::{GrayImage, Histogram};
pub use render::{to_bitmap, Bitmap};

mod cli;
mod error;
pub mod image;
mod logger;
pub mod render;
pub mod transform;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    operation: Operation,
    output_file: Option<PathBuf>,
    level: i32,
    factor: i32,
    second_file: Option<PathBuf>,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::ResourceUnavailable(file_path.display().to_string(), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::WriteFailure(file_path.display().to_string(), e))
}

/// Reads an ASCII PGM file into an image.
pub fn open_image(file_path: &Path) -> Result<GrayImage> {
    let input_file = open_input_file(file_path)?;
    PGMReader::new(BufReader::new(input_file)).read_image()
}

/// Writes an image to an ASCII PGM file.
pub fn save_image(image: &GrayImage, file_path: &Path) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    PGMWriter::new(BufWriter::new(output_file)).write_image(image)
}

/// Applies the requested operation to the input image. Image-producing
/// operations write their result to the output file, the histogram is
/// printed to stdout.
pub fn apply_operation(arguments: &Arguments) -> Result<()> {
    let image = open_image(&arguments.input_file)?;
    log::info!(
        "Loaded {}x{} image from '{}'",
        image.width(),
        image.height(),
        arguments.input_file.display()
    );
    let output_image = match arguments.operation {
        Operation::Histogram => {
            print_histogram(&transform::histogram(&image));
            return Ok(());
        }
        Operation::Threshold => transform::threshold(&image, arguments.level),
        Operation::Reduce => transform::reduce(&image, arguments.factor)?,
        Operation::Enlarge => transform::enlarge(&image, arguments.factor)?,
        Operation::Difference => {
            let second_file = arguments
                .second_file
                .as_ref()
                .expect("Required argument second_file not provided");
            let second_image = open_image(second_file)?;
            transform::difference(&image, &second_image)?
        }
    };
    let output_file = arguments
        .output_file
        .as_ref()
        .expect("Required argument output_file not provided");
    save_image(&output_image, output_file)?;
    log::info!(
        "Saved {}x{} image to '{}'",
        output_image.width(),
        output_image.height(),
        output_file.display()
    );
    Ok(())
}

fn print_histogram(histogram: &Histogram) {
    for (value, count) in histogram.counts().iter().enumerate() {
        if *count > 0 {
            println!("{:>3}: {}", value, count);
        }
    }
}
