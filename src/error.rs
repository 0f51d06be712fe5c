use thiserror::Error;

/// The primary error type for the datauri crate.
#[derive(Error, Debug)]
pub enum DataUrlError {
    #[error("MIME type resolution failed: {0}")]
    Resolution(#[from] crate::mime::ResolutionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
