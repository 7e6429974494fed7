//! Markup contract

/// A carousel section.
pub const SECTION: &str = "[data-bb-section]";
/// The scrolling track inside a section.
pub const TRACK: &str = "[data-bb-track]";
/// One card inside the track.
pub const CARD: &str = "[data-bb-card]";
/// A card's video.
pub const VIDEO: &str = ".bb-video";
/// Play/pause control inside a card.
pub const PLAY_TOGGLE: &str = "[data-bb-play]";
/// Mute control inside a card.
pub const MUTE_TOGGLE: &str = "[data-bb-mute]";

/// Per-card position attribute.
pub const CARD_INDEX_ATTR: &str = "data-index";
/// Optional JSON overrides on the section element.
pub const CONFIG_ATTR: &str = "data-bb-config";
/// Written with the toggle's pressed state.
pub const PRESSED_ATTR: &str = "aria-pressed";

/// Parse a CSS pixel length the way `parseFloat` does: leading number only,
/// anything unparsable is zero.
pub fn parse_px(value: &str) -> f64 {
    let value = value.trim();
    let numeric = |(i, c): (usize, char)| {
        c.is_ascii_digit() || c == '.' || (i == 0 && matches!(c, '-' | '+'))
    };
    let end = value
        .char_indices()
        .find(|&pair| !numeric(pair))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse::<f64>().ok().filter(|px| px.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::parse_px;

    #[test]
    fn parses_leading_pixels() {
        assert_eq!(parse_px("16px"), 16.0);
        assert_eq!(parse_px(" 12.5px 8px"), 12.5);
        assert_eq!(parse_px("0"), 0.0);
    }

    #[test]
    fn keywords_are_zero() {
        assert_eq!(parse_px("normal"), 0.0);
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("px"), 0.0);
    }
}
