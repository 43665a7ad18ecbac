use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    /// Margins must leave a usable content area; each margin has to be
    /// smaller than half of the corresponding page dimension
    #[error("margins are too large for a {width}x{height}pt page")]
    InvalidMargins { width: f32, height: f32 },

    /// A page listed in the page order was not found in the document
    #[error("page listed in the page order is missing from the document")]
    PageMissing,
}
