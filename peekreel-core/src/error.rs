//! Controller errors

use thiserror::Error;

/// Failures inside the controller.
///
/// None of these are fatal. They describe degraded page states (missing
/// markup, cards without video) and are swallowed at the event boundary.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// The section markup has no track element.
    #[error("section has no track")]
    MissingTrack,

    /// The track has no cards.
    #[error("section has no cards")]
    EmptySection,

    /// A card index past the end of the section.
    #[error("card {index} out of range (section has {len} cards)")]
    CardOutOfRange {
        /// The requested card.
        index: usize,
        /// Cards in the section.
        len: usize,
    },

    /// The card exists but has no video.
    #[error("card {0} has no video")]
    NoVideo(usize),

    /// Malformed `data-bb-config` JSON.
    #[error("invalid carousel configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for controller operations.
pub type Result<T> = std::result::Result<T, CarouselError>;
