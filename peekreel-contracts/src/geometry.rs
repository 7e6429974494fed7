//! Layout measurements read from the host.
//!
//! All values are CSS pixels as the host reports them. Left edges share one
//! coordinate space (the track's offset parent), so a card's position inside
//! the track is `card.left - track.left`.

/// Geometry of the scrollable track at the moment it was read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackMetrics {
    /// Current horizontal scroll offset.
    pub scroll_left: f64,
    /// Visible (client) width of the track.
    pub client_width: f64,
    /// Total scrollable content width.
    pub scroll_width: f64,
    /// Left edge of the track in the shared offset space.
    pub offset_left: f64,
    /// Inter-card gap from computed layout.
    pub gap: f64,
    /// Left edge of the track's bounding box in viewport coordinates.
    pub rect_left: f64,
    /// Width of the track's bounding box.
    pub rect_width: f64,
}

impl TrackMetrics {
    /// Largest valid scroll offset. Never negative.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Geometry of one card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardMetrics {
    /// Left edge in the shared offset space.
    pub offset_left: f64,
    /// Rendered width.
    pub width: f64,
}

/// How a scroll is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Animated transition.
    #[default]
    Smooth,
    /// Jump without animation.
    Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_scroll_never_negative() {
        let track = TrackMetrics {
            client_width: 800.0,
            scroll_width: 600.0,
            ..Default::default()
        };
        assert_eq!(track.max_scroll(), 0.0);

        let track = TrackMetrics {
            client_width: 800.0,
            scroll_width: 2000.0,
            ..Default::default()
        };
        assert_eq!(track.max_scroll(), 1200.0);
    }
}
