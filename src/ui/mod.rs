//! Terminal rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs},
};

mod about;
mod helpers;
mod home;
mod modals;
mod news;
mod play;
mod support;

use crate::state::{AppState, Tab};
use crate::theme::Palette;

/// What: Draw one frame.
///
/// Details:
/// - Layout top to bottom: header (name, language badge), tab bar, active tab, help line.
/// - Colors come from the palette of the current theme snapshot.
pub fn ui(f: &mut Frame, app: &AppState) {
    let pal = Palette::for_mode(app.prefs.theme);
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(pal.bg)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let mut header = vec![
        Span::styled(
            app.t("app.name").to_string(),
            Style::default().fg(pal.saffron).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", app.language().badge()),
            Style::default().fg(pal.text),
        ),
        Span::styled(
            if app.prefs.theme.is_dark() { "  ☾" } else { "  ☀" },
            Style::default().fg(pal.subtext),
        ),
    ];
    if !app.backend_configured {
        header.push(Span::styled(
            format!("  {}", app.t("app.no_backend")),
            Style::default().fg(pal.red),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{} {}", i + 1, app.t(t.i18n_key()))))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(pal.subtext))
        .highlight_style(Style::default().fg(pal.saffron).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[1]);

    match app.tab {
        Tab::Home => home::render_home(f, app, chunks[2], &pal),
        Tab::News => news::render_news(f, app, chunks[2], &pal),
        Tab::Play => play::render_play(f, app, chunks[2], &pal),
        Tab::Support => support::render_support(f, app, chunks[2], &pal),
        Tab::About => about::render_about(f, app, chunks[2], &pal),
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            app.t("app.help").to_string(),
            Style::default().fg(pal.muted),
        )),
        chunks[3],
    );

    modals::render_modal(f, app, area, &pal);
}
