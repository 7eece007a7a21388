use std::io::Error as IoError;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CardError {
    #[error("Failed to read font file `{path}`")]
    LoadFont {
        #[source]
        source: IoError,
        path: Box<str>,
    },
    #[error("Failed to create surface")]
    CreateSurface,
    #[error("Font error")]
    Font(#[from] FontError),
    #[error("Failed to encode as PNG")]
    EncodeAsPng,
}

#[derive(Debug, ThisError)]
pub enum FontError {
    #[error("Failed to create typeface")]
    Typeface,
}
