use thiserror::Error;

/// Main error type for fontpack
#[derive(Error, Debug)]
pub enum FontpackError {
    #[error("Config error: {0}\n\nTroubleshooting:\n- Check the manifest file (fonts.yaml)\n- Both `dir` and `stylesheet` must be set to non-empty paths")]
    Config(String),

    #[error("Setup error: {0}")]
    Setup(String),

    #[error("No fonts requested in manifest")]
    NoFontsRequested,

    #[error("Download failed with status {status}: {url}")]
    Download { url: String, status: u16 },

    #[error("Failed to write stylesheet: {0}")]
    Stylesheet(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FontpackError>;
