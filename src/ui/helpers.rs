//! Shared layout and styling helpers.

use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::loader::Resource;
use crate::state::AppState;
use crate::theme::{Palette, parse_hex_color};

/// Rounded card with a bold title.
pub fn card<'a>(title: &'a str, pal: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(pal.border))
        .style(Style::default().bg(pal.card))
}

/// Rectangle of at most `w` x `h` centered in `area`.
#[must_use]
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(2));
    let h = h.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// Catalog hex color, or `fallback` if it does not parse.
#[must_use]
pub fn hex_or(hex: &str, fallback: Color) -> Color {
    parse_hex_color(hex).unwrap_or(fallback)
}

/// Horizontal bar `percent` wide out of `width` cells.
#[must_use]
pub fn bar(percent: u16, width: u16) -> String {
    let filled = usize::try_from(u32::from(percent.min(100)) * u32::from(width) / 100).unwrap_or(0);
    let empty = usize::from(width).saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Section heading line.
pub fn heading(text: &str, pal: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(pal.saffron).add_modifier(Modifier::BOLD),
    ))
}

/// What: Status line for a remote resource.
///
/// Output:
/// - Spinner text while refreshing, the failure reason after an error, `None` otherwise.
pub fn load_status<T>(app: &AppState, res: &Resource<T>, pal: &Palette) -> Option<Line<'static>> {
    if res.is_refreshing() {
        let key = if res.data().is_some() {
            "app.refreshing"
        } else {
            "app.loading"
        };
        return Some(Line::from(Span::styled(
            app.t(key).to_string(),
            Style::default().fg(pal.muted),
        )));
    }
    res.error().map(|e| {
        Line::from(Span::styled(
            app.t_fmt1("app.load_failed", e),
            Style::default().fg(pal.red),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(60, 10), "██████░░░░");
        assert_eq!(bar(0, 4), "░░░░");
        assert_eq!(bar(150, 4), "████");
    }

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(area, 100, 4);
        assert_eq!(r.width, 38);
        assert_eq!(r.height, 4);
        assert_eq!(r.y, 3);
    }
}
