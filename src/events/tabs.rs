use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use super::send_all;
use crate::content::Vote;
use crate::state::{AppState, Modal, Request, Tab};

/// Keys specific to the active tab.
pub fn handle_tab_key(ke: KeyEvent, app: &mut AppState, req_tx: &mpsc::UnboundedSender<Request>) {
    match app.tab {
        Tab::Home => match ke.code {
            KeyCode::Down | KeyCode::Char('j') => app.home.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.home.select_prev(),
            KeyCode::Char(c @ ('y' | 'n')) => {
                let vote = if c == 'y' { Vote::Yes } else { Vote::No };
                if let Some(job) = app.home.begin_vote(vote) {
                    send_all(req_tx, vec![Request::Vote(job)]);
                }
            }
            KeyCode::Char('v') => {
                let reqs = app.activate(Tab::Support);
                send_all(req_tx, reqs);
                app.modal = Modal::Volunteer;
            }
            _ => {}
        },
        Tab::News => match ke.code {
            KeyCode::Down | KeyCode::Char('j') => app.news.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.news.select_prev(),
            KeyCode::Enter => {
                if let Some(article) = app.news.selected_article() {
                    app.modal = Modal::FactCheck {
                        article: Box::new(article.clone()),
                    };
                }
            }
            _ => {}
        },
        Tab::Play => match ke.code {
            KeyCode::Down | KeyCode::Char('j') => app.play.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.play.select_prev(),
            KeyCode::Enter => {
                app.play.open_selected();
                if app.play.session.is_some() {
                    app.modal = Modal::Game;
                }
            }
            _ => {}
        },
        Tab::Support => match ke.code {
            KeyCode::Char('d') => app.modal = Modal::Donation,
            KeyCode::Char('v') => app.modal = Modal::Volunteer,
            _ => {}
        },
        Tab::About => match ke.code {
            KeyCode::Down | KeyCode::Char('j') => app.about.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => app.about.scroll_up(),
            _ => {}
        },
    }
}
