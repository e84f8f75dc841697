use crate::model::ImageSlot;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid layout configuration: {0}")]
    Config(String),

    /// Header or footer image bytes that cannot be decoded or placed.
    #[error("invalid {slot} image data: {reason}")]
    InvalidImageData { slot: ImageSlot, reason: String },

    /// The signature block is taller than the space a fresh page offers.
    #[error("signature block needs {required:.1}mm but only {available:.1}mm of the content area is free")]
    SignatureDoesNotFit { required: f32, available: f32 },

    /// Composition produced more pages than the ceiling allows.
    #[error("pagination exceeded {limit} pages; the declaration text is malformed or the content area is too small")]
    RunawayPagination { limit: usize },
}
