use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use super::send_all;
use crate::state::{AppState, Modal, Notice, Request};

/// Keys while an overlay is open; nothing reaches the tabs underneath.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState, req_tx: &mpsc::UnboundedSender<Request>) {
    match app.modal {
        Modal::None => {}
        Modal::Notice { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.dismiss_notice();
            }
        }
        Modal::FactCheck { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
        }
        Modal::Game => match ke.code {
            KeyCode::Esc => {
                app.play.close_game();
                app.modal = Modal::None;
            }
            KeyCode::Enter => {
                if let Some(job) = app.play.complete_game(&mut rand::rng()) {
                    send_all(req_tx, vec![Request::SubmitScore(job)]);
                }
                app.modal = Modal::None;
            }
            _ => {}
        },
        Modal::Donation => handle_donation_key(ke, app),
        Modal::Volunteer => handle_volunteer_key(ke, app, req_tx),
    }
}

fn handle_donation_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc => app.modal = Modal::None,
        KeyCode::Backspace => {
            app.support.donation_input.pop();
        }
        KeyCode::Char(c) if !c.is_control() => app.support.donation_input.push(c),
        KeyCode::Enter => match app.support.donate() {
            Ok(donation) => {
                app.show_notice(
                    Notice::success("support.donate.thanks", Some(donation.display)),
                    None,
                );
            }
            Err(err) => {
                tracing::debug!(error = %err, "donation rejected");
                let notice = app.form_error_notice(&err);
                app.show_notice(notice, Some(Modal::Donation));
            }
        },
        _ => {}
    }
}

fn handle_volunteer_key(
    ke: KeyEvent,
    app: &mut AppState,
    req_tx: &mpsc::UnboundedSender<Request>,
) {
    match ke.code {
        KeyCode::Esc => app.modal = Modal::None,
        KeyCode::Tab | KeyCode::Down => app.support.volunteer.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.support.volunteer.focus_prev(),
        KeyCode::Backspace => app.support.volunteer.backspace(),
        KeyCode::Char(c) if !c.is_control() => app.support.volunteer.push_char(c),
        KeyCode::Enter => match app.support.begin_volunteer() {
            Ok(Some(job)) => send_all(req_tx, vec![Request::SubmitVolunteer(job)]),
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(error = %err, "volunteer form incomplete");
                let notice = app.form_error_notice(&err);
                app.show_notice(notice, Some(Modal::Volunteer));
            }
        },
        _ => {}
    }
}
