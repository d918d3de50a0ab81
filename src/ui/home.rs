use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use super::helpers::{card, heading, hex_or, load_status};
use crate::content::GAMES;
use crate::screens::home::FEATURED;
use crate::state::AppState;
use crate::theme::Palette;

/// Draw the Home tab: greeting and featured cards on the left, polls on the right.
pub fn render_home(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let lang = app.language();
    let mut lines = vec![
        Line::from(Span::styled(
            app.t("home.greeting").to_string(),
            Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.t("app.tagline").to_string(),
            Style::default().fg(pal.subtext),
        )),
        Line::from(""),
        heading(app.t("home.todays_reality"), pal),
    ];
    for c in FEATURED {
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(hex_or(c.color, pal.saffron))),
            Span::styled(
                app.t(c.title_key).to_string(),
                Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", app.t(c.subtitle_key)),
                Style::default().fg(pal.subtext),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(heading(app.t("home.play_learn"), pal));
    for g in &GAMES {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(hex_or(g.color, pal.saffron))),
            Span::styled(g.title(lang).to_string(), Style::default().fg(pal.body)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(heading(app.t("home.action_board"), pal));
    for (title, sub) in [
        ("home.polls.title", "home.polls.subtitle"),
        ("home.volunteer.title", "home.volunteer.subtitle"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(
                app.t(title).to_string(),
                Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", app.t(sub)), Style::default().fg(pal.subtext)),
        ]));
    }
    let left = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(card(app.t("app.name"), pal));
    f.render_widget(left, cols[0]);

    render_polls(f, app, cols[1], pal);
}

fn render_polls(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let lang = app.language();
    let block = card(app.t("home.polls.title"), pal);
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

    if let Some(status) = load_status(app, &app.home.polls, pal) {
        f.render_widget(Paragraph::new(status), rows[0]);
    }

    let polls = app.home.polls.data().map_or(&[][..], Vec::as_slice);
    if polls.is_empty() {
        if !app.home.polls.is_refreshing() {
            f.render_widget(
                Paragraph::new(Span::styled(
                    app.t("home.polls.empty").to_string(),
                    Style::default().fg(pal.muted),
                )),
                rows[1],
            );
        }
    } else {
        let items: Vec<ListItem> = polls
            .iter()
            .map(|p| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        p.question(lang).to_string(),
                        Style::default().fg(pal.text),
                    )),
                    Line::from(vec![
                        Span::styled(
                            format!("{} {}%", app.t("home.polls.vote_yes"), p.yes_percent()),
                            Style::default().fg(pal.green),
                        ),
                        Span::styled(
                            format!("  {}", app.t_fmt1("home.polls.votes", p.total())),
                            Style::default().fg(pal.subtext),
                        ),
                    ]),
                ])
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(pal.border))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(app.home.selected));
        f.render_stateful_widget(list, rows[1], &mut state);
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            app.t("home.polls.hint").to_string(),
            Style::default().fg(pal.muted),
        )),
        rows[2],
    );
}
