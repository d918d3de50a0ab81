use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::helpers::{bar, card, heading, hex_or, load_status};
use crate::screens::support::DISTRIBUTION;
use crate::state::AppState;
use crate::theme::Palette;

/// Draw the Support tab: donation and volunteer calls to action, fund split, today's quote.
pub fn render_support(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut left = vec![
        Line::from(Span::styled(
            format!("♥ {}", app.t("support.donate.title")),
            Style::default().fg(pal.saffron).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.t("support.donate.subtitle").to_string(),
            Style::default().fg(pal.body),
        )),
        Line::from(Span::styled(
            format!("[ {} ]", app.t("support.donate.button")),
            Style::default().fg(pal.saffron),
        )),
        Line::from(""),
        heading(app.t("support.distribution.title"), pal),
    ];
    for a in DISTRIBUTION {
        left.push(Line::from(vec![
            Span::styled(bar(a.percent, 20), Style::default().fg(hex_or(a.color, pal.saffron))),
            Span::styled(
                format!(" {} ({}%)", app.t(a.key), a.percent),
                Style::default().fg(pal.body),
            ),
        ]));
    }
    left.push(Line::from(""));
    left.push(heading(app.t("support.volunteer.section"), pal));
    left.push(Line::from(Span::styled(
        format!("[ {} ]", app.t("support.volunteer.join")),
        Style::default().fg(pal.green),
    )));
    left.push(Line::from(Span::styled(
        app.t("support.volunteer.join_subtitle").to_string(),
        Style::default().fg(pal.subtext),
    )));
    f.render_widget(
        Paragraph::new(left)
            .wrap(Wrap { trim: true })
            .block(card(app.t("support.title"), pal)),
        cols[0],
    );

    let lang = app.language();
    let mut right = Vec::new();
    if let Some(status) = load_status(app, &app.support.quote, pal) {
        right.push(status);
    }
    if let Some(q) = app.support.quote.data() {
        right.push(Line::from(Span::styled(
            format!("“{}”", q.text(lang)),
            Style::default().fg(pal.body).add_modifier(Modifier::ITALIC),
        )));
        right.push(Line::from(Span::styled(
            format!("- {}", q.author(lang)),
            Style::default().fg(pal.subtext),
        )));
    }
    f.render_widget(
        Paragraph::new(right)
            .wrap(Wrap { trim: true })
            .block(card(app.t("support.thought"), pal)),
        cols[1],
    );
}
