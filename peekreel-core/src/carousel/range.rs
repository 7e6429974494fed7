//! Visible range calculation

use serde::Serialize;

use peekreel_contracts::{TrackMetrics, TrackSurface};

use crate::error::{CarouselError, Result};
use crate::infra::constants::layout::MIN_STEP;

/// Indices of the cards currently scrolled into view, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VisibleRange {
    /// First card in view.
    pub first: usize,
    /// Last card in view, clamped to the section.
    pub last: usize,
}

impl VisibleRange {
    /// Window of `count` cards anchored at the card nearest to `scroll_left`.
    ///
    /// `len` must be non-zero. A zero `count` is treated as one card.
    pub fn from_scroll(
        scroll_left: f64,
        step: f64,
        len: usize,
        count: usize,
    ) -> Self {
        debug_assert!(len > 0);
        let max_index = len.saturating_sub(1);
        let raw = (scroll_left / step).round();
        // NaN and negative offsets land on the first card
        let first = if raw.is_finite() && raw > 0.0 {
            (raw as usize).min(max_index)
        } else {
            0
        };
        let last = max_index.min(first + count.max(1) - 1);
        Self { first, last }
    }

    /// Whether `index` is in view.
    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }

    /// Card `offset` positions after `first`, clamped into the range.
    pub fn anchor(&self, offset: usize) -> usize {
        self.first.saturating_add(offset).clamp(self.first, self.last)
    }
}

/// Stride between two neighbouring cards: first card width plus gap.
pub fn step_width<S>(surface: &S, track: &TrackMetrics) -> f64
where
    S: TrackSurface + ?Sized,
{
    let card_width = surface.card(0).map(|card| card.width).unwrap_or(0.0);
    let step = card_width + track.gap;
    if step.is_finite() { step.max(MIN_STEP) } else { MIN_STEP }
}

/// Current `{first, last}` for a window of `count` cards.
pub fn visible_range<S>(surface: &S, count: usize) -> Result<VisibleRange>
where
    S: TrackSurface + ?Sized,
{
    let track = surface.track().ok_or(CarouselError::MissingTrack)?;
    let len = surface.card_count();
    if len == 0 {
        return Err(CarouselError::EmptySection);
    }
    let step = step_width(surface, &track);
    Ok(VisibleRange::from_scroll(track.scroll_left, step, len, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_card() {
        let r = VisibleRange::from_scroll(0.0, 100.0, 7, 3);
        assert_eq!(r, VisibleRange { first: 0, last: 2 });

        let r = VisibleRange::from_scroll(149.0, 100.0, 7, 3);
        assert_eq!(r, VisibleRange { first: 1, last: 3 });

        let r = VisibleRange::from_scroll(151.0, 100.0, 7, 3);
        assert_eq!(r, VisibleRange { first: 2, last: 4 });
    }

    #[test]
    fn clamps_to_card_count() {
        let r = VisibleRange::from_scroll(10_000.0, 100.0, 7, 3);
        assert_eq!(r, VisibleRange { first: 6, last: 6 });

        let r = VisibleRange::from_scroll(500.0, 100.0, 7, 3);
        assert_eq!(r, VisibleRange { first: 5, last: 6 });

        let r = VisibleRange::from_scroll(-40.0, 100.0, 2, 3);
        assert_eq!(r, VisibleRange { first: 0, last: 1 });
    }

    #[test]
    fn single_view_has_one_card() {
        let r = VisibleRange::from_scroll(300.0, 100.0, 7, 1);
        assert_eq!(r, VisibleRange { first: 3, last: 3 });
    }

    #[test]
    fn anchor_stays_inside_range() {
        let r = VisibleRange { first: 4, last: 6 };
        assert_eq!(r.anchor(1), 5);
        assert_eq!(r.anchor(9), 6);

        let r = VisibleRange { first: 6, last: 6 };
        assert_eq!(r.anchor(1), 6);
    }

    #[test]
    fn nan_offset_lands_on_first_card() {
        let r = VisibleRange::from_scroll(f64::NAN, 100.0, 5, 3);
        assert_eq!(r, VisibleRange { first: 0, last: 2 });
    }
}
