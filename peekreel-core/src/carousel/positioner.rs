//! Centered scroll positioning

use peekreel_contracts::{CardMetrics, ScrollBehavior, TrackMetrics, TrackSurface};

use crate::error::{CarouselError, Result};

/// Scroll offset that centers `card` in `track`, clamped to the scrollable
/// extent.
pub fn scroll_target(track: &TrackMetrics, card: &CardMetrics) -> f64 {
    let card_left = card.offset_left - track.offset_left;
    let center_offset = ((track.client_width - card.width) / 2.0).max(0.0);
    (card_left - center_offset).clamp(0.0, track.max_scroll())
}

/// Scroll the track so card `index` sits in the middle of the viewport.
///
/// Returns the offset that was applied.
pub fn scroll_to_card<S>(
    surface: &mut S,
    index: usize,
    behavior: ScrollBehavior,
) -> Result<f64>
where
    S: TrackSurface + ?Sized,
{
    let track = surface.track().ok_or(CarouselError::MissingTrack)?;
    let card = surface.card(index).ok_or(CarouselError::CardOutOfRange {
        index,
        len: surface.card_count(),
    })?;
    let left = scroll_target(&track, &card);
    log::trace!("scroll to card {index} -> {left:.1}px ({behavior:?})");
    surface.scroll_track_to(left, behavior);
    Ok(left)
}
