use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{card, centered_rect, hex_or};
use super::news::truth_badge;
use crate::content::NewsArticle;
use crate::forms::FormField;
use crate::state::{AppState, Modal, Notice, NoticeKind};
use crate::theme::Palette;

/// What: Draw the active overlay, if any.
///
/// Details:
/// - Each overlay clears its own rectangle; the tab underneath stays visible around it.
/// - The volunteer form places the terminal cursor at the end of the focused field.
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    match &app.modal {
        Modal::None => {}
        Modal::FactCheck { article } => render_fact_check(f, app, area, pal, article),
        Modal::Game => render_game(f, app, area, pal),
        Modal::Donation => render_donation(f, app, area, pal),
        Modal::Volunteer => render_volunteer(f, app, area, pal),
        Modal::Notice { notice, .. } => render_notice(f, app, area, pal, notice),
    }
}

fn footer(text: &str, pal: &Palette) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(pal.muted)))
}

fn render_fact_check(
    f: &mut Frame,
    app: &AppState,
    area: Rect,
    pal: &Palette,
    article: &NewsArticle,
) {
    let lang = app.language();
    let rect = centered_rect(area, 80, 18);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(truth_badge(app, article, pal)),
        Line::from(Span::styled(
            article.title(lang).to_string(),
            Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            article.fact_vs_claim(lang).to_string(),
            Style::default().fg(pal.body),
        )),
        Line::from(""),
        footer(app.t("app.dismiss"), pal),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card(app.t("news.fact_vs_claim"), pal)),
        rect,
    );
}

fn render_game(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let Some(session) = app.play.session else {
        return;
    };
    let lang = app.language();
    let rect = centered_rect(area, 70, 12);
    f.render_widget(Clear, rect);
    let accent = hex_or(session.game.color, pal.saffron);
    let lines = vec![
        Line::from(Span::styled(
            session.game.description(lang).to_string(),
            Style::default().fg(pal.body),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.t("play.placeholder").to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.t_fmt1("play.score", session.score),
            Style::default().fg(pal.text),
        )),
        Line::from(""),
        footer(app.t("play.complete"), pal),
    ];
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", session.game.title(lang)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(pal.card));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        rect,
    );
}

fn render_donation(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let rect = centered_rect(area, 50, 8);
    f.render_widget(Clear, rect);
    let input = &app.support.donation_input;
    let value = if input.is_empty() {
        Span::styled(
            app.t("support.donate.placeholder").to_string(),
            Style::default().fg(pal.muted),
        )
    } else {
        Span::styled(input.clone(), Style::default().fg(pal.text))
    };
    let lines = vec![
        Line::from(vec![Span::styled("₹ ", Style::default().fg(pal.saffron)), value]),
        Line::from(""),
        Line::from(Span::styled(
            app.t("support.donate.proceed").to_string(),
            Style::default().fg(pal.saffron).add_modifier(Modifier::BOLD),
        )),
        footer(app.t("app.dismiss"), pal),
    ];
    let block = card(app.t("support.donate.modal_title"), pal);
    let inner = block.inner(rect);
    f.render_widget(Paragraph::new(lines).block(block), rect);
    let x = inner
        .x
        .saturating_add(2)
        .saturating_add(u16::try_from(input.width()).unwrap_or(u16::MAX));
    f.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), inner.y));
}

fn render_volunteer(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette) {
    let form = &app.support.volunteer;
    let rect = centered_rect(area, 70, 16);
    f.render_widget(Clear, rect);
    let label_w = FormField::ALL
        .iter()
        .map(|fl| app.t(fl.i18n_key()).width())
        .max()
        .unwrap_or(0)
        + 2;
    let mut lines = Vec::new();
    let mut cursor_row = 0u16;
    let mut cursor_col = 0usize;
    for (i, field) in FormField::ALL.into_iter().enumerate() {
        let focused = field == form.focus;
        let label = app.t(field.i18n_key());
        let pad = label_w.saturating_sub(label.width());
        let value = form.value(field);
        if focused {
            cursor_row = u16::try_from(i * 2).unwrap_or(0);
            cursor_col = label_w + 2 + value.width();
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label}{}", " ".repeat(pad)),
                Style::default().fg(if focused { pal.saffron } else { pal.subtext }),
            ),
            Span::styled(
                if focused { "> " } else { "  " },
                Style::default().fg(pal.saffron),
            ),
            Span::styled(value.to_string(), Style::default().fg(pal.text)),
        ]));
        lines.push(Line::from(""));
    }
    if app.support.volunteer_in_flight() {
        lines.push(footer(app.t("app.submitting"), pal));
    } else {
        lines.push(footer(app.t("support.volunteer.hint"), pal));
    }
    let block = card(app.t("support.volunteer.modal_title"), pal);
    let inner = block.inner(rect);
    f.render_widget(Paragraph::new(lines).block(block), rect);
    let x = inner
        .x
        .saturating_add(u16::try_from(cursor_col).unwrap_or(u16::MAX));
    let y = inner.y.saturating_add(cursor_row);
    f.set_cursor_position(Position::new(
        x.min(inner.right().saturating_sub(1)),
        y.min(inner.bottom().saturating_sub(1)),
    ));
}

fn render_notice(f: &mut Frame, app: &AppState, area: Rect, pal: &Palette, notice: &Notice) {
    let rect = centered_rect(area, 60, 7);
    f.render_widget(Clear, rect);
    let text = match &notice.arg {
        Some(arg) => app.t_fmt1(notice.key, arg),
        None => app.t(notice.key).to_string(),
    };
    let color = match notice.kind {
        NoticeKind::Success => pal.green,
        NoticeKind::Error => pal.red,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(pal.card));
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                text,
                Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            footer(app.t("app.dismiss"), pal),
        ])
        .wrap(Wrap { trim: true })
        .block(block),
        rect,
    );
}
