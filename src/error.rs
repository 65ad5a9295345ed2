use std::path::PathBuf;

use image::error::UnsupportedErrorKind;
use image::{ImageError, ImageFormat};
use thiserror::Error;

/// Result type alias for color extraction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors when extracting colors from an image file
#[derive(Error, Debug)]
pub enum Error {
    /// The decoder needed for the image is not part of this build
    #[error("no decoder available for {format} images in this build")]
    CapabilityUnavailable {
        /// Name of the format that could not be decoded
        format: String,
    },

    /// The file is missing, unreadable or not a valid image
    #[error("could not decode image {}: {source}", .path.display())]
    Decode {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying I/O or decoder error
        #[source]
        source: ImageError,
    },
}

impl Error {
    pub(crate) fn unavailable(format: ImageFormat) -> Self {
        Error::CapabilityUnavailable {
            format: format!("{:?}", format),
        }
    }

    pub(crate) fn from_image_error(path: impl Into<PathBuf>, source: ImageError) -> Self {
        match source {
            ImageError::Unsupported(ref unsupported)
                if matches!(unsupported.kind(), UnsupportedErrorKind::Format(_)) =>
            {
                Error::CapabilityUnavailable {
                    format: unsupported.format_hint().to_string(),
                }
            }
            source => Error::decode(path, source),
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, source: impl Into<ImageError>) -> Self {
        Error::Decode {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Process exit status to report this error with
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CapabilityUnavailable { .. } | Error::Decode { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn messages_name_the_problem() {
        let err = Error::unavailable(ImageFormat::Tiff);
        assert_eq!(
            err.to_string(),
            "no decoder available for Tiff images in this build"
        );

        let err = Error::decode(
            "missing.png",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().starts_with("could not decode image missing.png: "));
    }

    #[test]
    fn every_error_is_fatal() {
        assert_eq!(Error::unavailable(ImageFormat::WebP).exit_code(), 1);
        let err = Error::decode("x", io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(err.exit_code(), 1);
    }
}
