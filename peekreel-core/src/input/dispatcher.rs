//! Event handlers
//!
//! Each handler runs to completion against the live surface. Errors mean
//! "nothing to do" (missing track, card without video) and are swallowed by
//! the controller.

use peekreel_contracts::{
    ClickInput, ClickTarget, Propagation, ScrollBehavior, SectionSurface,
    WheelInput,
};

use super::messages::Direction;
use crate::breakpoint::{is_desktop, is_single, per_view};
use crate::carousel::{VisibleRange, scroll_to_card, visible_range};
use crate::error::{CarouselError, Result};
use crate::infra::RuntimeConfig;
use crate::infra::constants::layout::{
    EDGE_PAGING_MIN_CARDS, GROUPED_PER_VIEW, SINGLE_PER_VIEW,
};
use crate::media::{MediaExclusivity, StartMode};

/// One card past the visible window in `direction`, clamped to the section.
pub fn page_target(range: VisibleRange, direction: Direction, len: usize) -> usize {
    match direction {
        Direction::Forward => (range.last + 1).min(len.saturating_sub(1)),
        Direction::Backward => range.first.saturating_sub(1),
    }
}

/// Desktop edge paging: a toggle on the last visible card reveals the next
/// card, one on the first visible card reveals the previous one.
pub fn edge_page_target(range: VisibleRange, card: usize, len: usize) -> Option<usize> {
    if card == range.last && range.last + 1 < len {
        Some(range.last + 1)
    } else if card == range.first && range.first > 0 {
        Some(range.first - 1)
    } else {
        None
    }
}

/// Delegated track click.
pub fn on_click<S>(
    surface: &mut S,
    media: &MediaExclusivity,
    click: ClickInput,
) -> Result<()>
where
    S: SectionSurface + ?Sized,
{
    let Some(card) = click.card else {
        return Ok(());
    };
    let width = surface.viewport_width();

    match click.target {
        ClickTarget::PlayToggle | ClickTarget::MuteToggle => {
            let range = visible_range(surface, per_view(width))?;
            let toggled = if click.target == ClickTarget::PlayToggle {
                media.toggle_play(surface, card)
            } else {
                media.toggle_mute(surface, card)
            };
            if let Err(err) = toggled {
                log::debug!("toggle on card {card} ignored: {err}");
            }

            let len = surface.card_count();
            if is_desktop(width) && len > EDGE_PAGING_MIN_CARDS {
                if let Some(target) = edge_page_target(range, card, len) {
                    log::trace!("edge toggle on card {card} pages to {target}");
                    scroll_to_card(surface, target, ScrollBehavior::Smooth)?;
                }
            }
            Ok(())
        }
        ClickTarget::Body if is_single(width) => tap_page(surface, media, click),
        ClickTarget::Body => Ok(()),
    }
}

/// Single mode: a tap on the right half pages forward, the left half pages
/// backward, and the card landed on starts playing muted.
fn tap_page<S>(
    surface: &mut S,
    media: &MediaExclusivity,
    click: ClickInput,
) -> Result<()>
where
    S: SectionSurface + ?Sized,
{
    let track = surface.track().ok_or(CarouselError::MissingTrack)?;
    let tap_x = click.client_x - track.rect_left;
    let direction = if tap_x > track.rect_width / 2.0 {
        Direction::Forward
    } else {
        Direction::Backward
    };

    let range = visible_range(surface, SINGLE_PER_VIEW)?;
    let target = page_target(range, direction, surface.card_count());
    scroll_to_card(surface, target, ScrollBehavior::Smooth)?;
    autoplay(surface, media, target)
}

/// Desktop wheel paging. Horizontal-dominant input and non-desktop widths
/// keep the browser's default scrolling.
pub fn on_wheel<S>(surface: &mut S, wheel: WheelInput) -> Propagation
where
    S: SectionSurface + ?Sized,
{
    if !is_desktop(surface.viewport_width()) || !wheel.is_vertical() {
        return Propagation::Continue;
    }

    let direction = Direction::from_delta(wheel.delta_y);
    let paged = visible_range(surface, GROUPED_PER_VIEW).and_then(|range| {
        let target = page_target(range, direction, surface.card_count());
        scroll_to_card(surface, target, ScrollBehavior::Smooth)
    });
    if let Err(err) = paged {
        log::debug!("wheel paging skipped: {err}");
    }
    Propagation::PreventDefault
}

/// Work done once a resize burst has settled: snap to the nearest card and
/// re-assert autoplay for the new mode.
pub fn on_resize_settled<S>(
    surface: &mut S,
    media: &MediaExclusivity,
    config: &RuntimeConfig,
) -> Result<()>
where
    S: SectionSurface + ?Sized,
{
    let width = surface.viewport_width();
    let range = visible_range(surface, per_view(width))?;
    scroll_to_card(surface, range.first, ScrollBehavior::Instant)?;

    if !config.autoplay_on_resize() {
        return Ok(());
    }
    if is_desktop(width) {
        let range = visible_range(surface, GROUPED_PER_VIEW)?;
        autoplay(surface, media, range.anchor(config.anchor_offset()))
    } else if is_single(width) {
        autoplay(surface, media, 0)
    } else {
        Ok(())
    }
}

/// Unattended start: muted, exclusive, toggle marked pressed.
pub fn autoplay<S>(surface: &mut S, media: &MediaExclusivity, card: usize) -> Result<()>
where
    S: SectionSurface + ?Sized,
{
    match media.start(surface, card, StartMode::Muted) {
        Err(CarouselError::NoVideo(_)) => Ok(()),
        other => other,
    }
}
