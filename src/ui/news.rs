use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::helpers::{card, load_status};
use crate::content::NewsArticle;
use crate::state::AppState;
use crate::theme::Palette;

/// Truth badge, e.g. `90% Truth Score`, colored by tier.
pub fn truth_badge(app: &AppState, article: &NewsArticle, pal: &Palette) -> Span<'static> {
    Span::styled(
        format!(
            " {} ",
            app.t_fmt1("news.truth_score", article.truth_percent())
        ),
        Style::default()
            .fg(Color::Black)
            .bg(pal.tier_color(article.tier()))
            .add_modifier(Modifier::BOLD),
    )
}

/// Draw the News tab: one entry per article in backend order.
pub fn render_news(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let lang = app.language();
    let block = card(app.t("news.title"), pal);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    if let Some(status) = load_status(app, &app.news.feed, pal) {
        f.render_widget(Paragraph::new(status), rows[0]);
    }

    let feed = app.news.feed.data().map_or(&[][..], Vec::as_slice);
    if feed.is_empty() {
        if !app.news.feed.is_refreshing() {
            f.render_widget(
                Paragraph::new(Span::styled(
                    app.t("news.empty").to_string(),
                    Style::default().fg(pal.muted),
                )),
                rows[1],
            );
        }
    } else {
        let items: Vec<ListItem> = feed
            .iter()
            .map(|a| {
                ListItem::new(vec![
                    Line::from(vec![
                        truth_badge(app, a, pal),
                        Span::raw(" "),
                        Span::styled(
                            a.title(lang).to_string(),
                            Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        a.summary(lang).to_string(),
                        Style::default().fg(pal.body),
                    )),
                    Line::from(Span::styled(
                        app.t_fmt1("news.source", &a.source),
                        Style::default().fg(pal.subtext),
                    )),
                ])
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(pal.border))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(app.news.selected));
        f.render_stateful_widget(list, rows[1], &mut state);
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            app.t("news.hint").to_string(),
            Style::default().fg(pal.muted),
        )),
        rows[2],
    );
}
