use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::helpers::{card, heading, hex_or};
use crate::screens::about::{MILESTONES, PILLARS, WEBSITE};
use crate::state::AppState;
use crate::theme::Palette;

/// Draw the About tab as one scrollable page.
pub fn render_about(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let mut lines = vec![
        Line::from(Span::styled(
            app.t("about.party").to_string(),
            Style::default().fg(pal.saffron).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.t("app.tagline").to_string(),
            Style::default().fg(pal.subtext),
        )),
        Line::from(""),
        heading(app.t("about.who_we_are"), pal),
        Line::from(Span::styled(
            app.t("about.who_text").to_string(),
            Style::default().fg(pal.body),
        )),
        Line::from(""),
        heading(app.t("about.mission"), pal),
    ];
    lines.push(Line::from(
        PILLARS
            .iter()
            .flat_map(|p| {
                [
                    Span::styled("◆ ", Style::default().fg(hex_or(p.color, pal.saffron))),
                    Span::styled(format!("{}   ", app.t(p.key)), Style::default().fg(pal.text)),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::from(""));
    lines.push(heading(app.t("about.journey"), pal));
    for m in MILESTONES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}  ", m.year),
                Style::default().fg(pal.saffron).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                app.t(m.title_key).to_string(),
                Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", app.t(m.description_key)),
            Style::default().fg(pal.subtext),
        )));
    }
    lines.push(Line::from(""));
    lines.push(heading(app.t("about.connect"), pal));
    lines.push(Line::from(Span::styled(
        format!("🌐 {WEBSITE}"),
        Style::default().fg(pal.text),
    )));

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.about.scroll, 0))
        .block(card(app.t("about.title"), pal));
    f.render_widget(p, area);
}
