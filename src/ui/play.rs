use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::helpers::{card, heading, hex_or};
use crate::content::GAMES;
use crate::screens::play::BADGES;
use crate::state::AppState;
use crate::theme::Palette;

/// Draw the Play tab: XP counter, game catalog and badges.
pub fn render_play(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let lang = app.language();
    let block = card(app.t("play.title"), pal);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("★ ", Style::default().fg(pal.yellow)),
            Span::styled(
                app.t_fmt1("play.xp", app.play.xp),
                Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
            ),
        ])),
        rows[0],
    );

    let items: Vec<ListItem> = GAMES
        .iter()
        .map(|g| {
            let accent = hex_or(g.color, pal.saffron);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("■ ", Style::default().fg(accent)),
                    Span::styled(
                        g.title(lang).to_string(),
                        Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", g.description(lang)),
                    Style::default().fg(pal.subtext),
                )),
            ])
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(pal.border))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.play.selected));
    f.render_stateful_widget(list, rows[1], &mut state);

    let mut badges = vec![heading(app.t("play.badges"), pal)];
    for b in BADGES {
        let line = if b.earned {
            Line::from(vec![
                Span::styled("🏆 ", Style::default().fg(pal.yellow)),
                Span::styled(app.t(b.key).to_string(), Style::default().fg(pal.text)),
            ])
        } else {
            Line::from(vec![
                Span::styled("🏅 ", Style::default().fg(pal.muted)),
                Span::styled(
                    format!("{} ({})", app.t(b.key), app.t("play.locked")),
                    Style::default().fg(pal.muted),
                ),
            ])
        };
        badges.push(line);
    }
    f.render_widget(Paragraph::new(badges), rows[2]);

    f.render_widget(
        Paragraph::new(Span::styled(
            app.t("play.hint").to_string(),
            Style::default().fg(pal.muted),
        )),
        rows[3],
    );
}
