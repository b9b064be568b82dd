//! Centralized layout measurements for the TUI.
//!
//! Rendering and mouse hit-testing both go through these helpers, so a click
//! always lands on what was drawn at that position.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each card in rows.
///
/// This includes the border (2 rows) and content (2 rows for title and description).
pub const CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. The content
/// area holds the board and the status bar; the board keeps room for its
/// borders and one card.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Three seeded columns need at least 13 characters each for borders and
/// truncated titles to be readable.
pub const MIN_WIDTH: u16 = 40;

/// Splits the board area into `count` columns of equal width.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use quadro_tui::layout::column_areas;
///
/// let areas = column_areas(Rect::new(0, 0, 90, 20), 3);
/// assert_eq!(areas.len(), 3);
/// assert!(areas.iter().all(|a| a.width == 30));
/// ```
#[must_use]
pub fn column_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

/// Lays out card slots inside a column's inner area.
///
/// Returns `(card index, area)` pairs for the cards that fit, scrolled so that
/// the selected card stays visible.
#[must_use]
pub fn card_slots(inner: Rect, card_count: usize, selected: Option<usize>) -> Vec<(usize, Rect)> {
    if card_count == 0 || inner.height == 0 {
        return Vec::new();
    }
    let visible = usize::from((inner.height / CARD_HEIGHT).max(1));
    let offset = calculate_scroll_offset(selected, card_count, visible);
    let shown = card_count.saturating_sub(offset).min(visible);

    (0..shown)
        .map(|i| {
            let y = inner.y + CARD_HEIGHT * u16::try_from(i).unwrap_or(u16::MAX);
            let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
            (offset + i, Rect::new(inner.x, y, inner.width, height))
        })
        .filter(|(_, rect)| rect.height > 0)
        .collect()
}

/// Calculates the scroll offset to keep the selected card visible.
fn calculate_scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);

    if selected < visible / 2 {
        0
    } else {
        (selected.saturating_sub(visible / 2)).min(max_offset)
    }
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
