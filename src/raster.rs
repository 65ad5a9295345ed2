use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::error::{ImageFormatHint, UnsupportedError};
use image::{ImageError, ImageFormat, ImageReader, Rgb, RgbImage};
use log::debug;

use crate::error::{Error, Result};

/// A decoded grid of RGB pixels
///
/// This is all the sampler needs from an image, so it can run on synthetic rasters as well as on
/// decoded files.
pub trait Raster {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Color of the pixel at column `x` and row `y`
    ///
    /// Both coordinates must be inside [`Raster::dimensions`].
    fn pixel_at(&self, x: u32, y: u32) -> Rgb<u8>;
}

impl Raster for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel_at(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.get_pixel(x, y)
    }
}

/// Decode the image at `path` into an RGB raster, dropping alpha and any other channels
///
/// The format is sniffed from the file content. A format recognised that way but without a
/// decoder in this build is rejected before any pixel data is read. Content that is not
/// recognised is only decoded if the extension names a format this build can read.
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| Error::decode(path, e))?;
    let mut reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| Error::decode(path, e))?;

    let format = match reader.format() {
        Some(format) if !format.reading_enabled() => return Err(Error::unavailable(format)),
        Some(format) => format,
        None => match ImageFormat::from_path(path) {
            Ok(format) if format.reading_enabled() => {
                reader.set_format(format);
                format
            }
            _ => {
                return Err(Error::decode(
                    path,
                    ImageError::Unsupported(UnsupportedError::from(ImageFormatHint::Unknown)),
                ))
            }
        },
    };
    debug!("decoding {} as {:?}", path.display(), format);

    let image = reader
        .decode()
        .map_err(|e| Error::from_image_error(path, e))?
        .into_rgb8();
    debug!("decoded {}x{} raster", image.width(), image.height());

    Ok(image)
}
