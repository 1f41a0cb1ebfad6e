// One error type for the whole crate.
// Every variant states *where* things went wrong.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Width or height was zero, or width * height does not fit in memory.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The pixel bytes handed to a presenter don't match width * height.
    #[error("buffer mismatch: expected {expected} bytes, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    /// An operation needed a canvas but configure() has not run yet.
    #[error("sketch is not configured")]
    NotConfigured,

    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("window update error: {0}")]
    WindowUpdate(String), // Pushing the frame to the window failed

    #[error("export error: {0}")]
    Export(#[from] image::ImageError), // Encoding/writing the screenshot failed
}

impl Error {
    pub fn buffer_mismatch(expected: usize, actual: usize) -> Self {
        Self::BufferMismatch { expected, actual }
    }
}
