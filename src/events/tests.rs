use std::sync::Arc;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::handle_event;
use crate::config::{KeyValueStore, MemoryStore};
use crate::prefs::{LANGUAGE_KEY, Language, PreferenceStore};
use crate::state::{AppState, Modal, NoticeKind, Request, Tab};

struct Harness {
    app: AppState,
    prefs: PreferenceStore,
    storage: Arc<MemoryStore>,
    tx: mpsc::UnboundedSender<Request>,
    rx: mpsc::UnboundedReceiver<Request>,
}

impl Harness {
    fn new() -> Self {
        let storage = Arc::new(MemoryStore::new());
        let prefs = PreferenceStore::new(storage.clone(), false);
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            app: AppState::default(),
            prefs,
            storage,
            tx,
            rx,
        }
    }

    fn press(&mut self, code: KeyCode) -> bool {
        let ev = CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()));
        handle_event(ev, &mut self.app, &self.prefs, &self.tx)
    }

    fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    fn drain(&mut self) -> Vec<Request> {
        let mut out = Vec::new();
        while let Ok(req) = self.rx.try_recv() {
            out.push(req);
        }
        out
    }
}

#[tokio::test]
/// What: Number keys switch tabs and mount them once.
async fn number_keys_mount_tabs_once() {
    let mut h = Harness::new();
    assert!(!h.press(KeyCode::Char('2')));
    assert_eq!(h.app.tab, Tab::News);
    let reqs = h.drain();
    assert_eq!(reqs.len(), 1);
    assert!(matches!(reqs[0], Request::LoadNews(_)));

    h.press(KeyCode::Char('1'));
    h.press(KeyCode::Char('2'));
    let reqs = h.drain();
    assert_eq!(reqs.len(), 1, "only Home mounts on its first visit");
    assert!(matches!(reqs[0], Request::LoadPolls(_)));

    h.press(KeyCode::Char('3'));
    assert_eq!(h.app.tab, Tab::Play);
    assert!(h.drain().is_empty());
}

#[tokio::test]
/// What: `r` reloads the active tab even when it is already mounted.
async fn refresh_key_reloads_active_tab() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('4'));
    h.drain();
    h.press(KeyCode::Char('r'));
    let reqs = h.drain();
    assert_eq!(reqs.len(), 1);
    assert!(matches!(reqs[0], Request::LoadQuote(_)));
}

#[tokio::test]
/// What: Tab/BackTab cycle through the tabs with wrap-around.
async fn tab_key_cycles_with_wrap() {
    let mut h = Harness::new();
    h.press(KeyCode::BackTab);
    assert_eq!(h.app.tab, Tab::About);
    h.press(KeyCode::Tab);
    assert_eq!(h.app.tab, Tab::Home);
}

#[tokio::test]
/// What: `l` flips the language and persists it; `q` quits.
async fn language_toggle_persists_and_q_quits() {
    let mut h = Harness::new();
    assert!(!h.press(KeyCode::Char('l')));
    assert_eq!(h.app.language(), Language::Hindi);
    h.prefs.flush().await;
    assert_eq!(
        h.storage.get(LANGUAGE_KEY).expect("read"),
        Some("hi".to_string())
    );
    assert!(h.press(KeyCode::Char('q')));
}

#[tokio::test]
/// What: Ctrl+C quits even from inside a form.
async fn ctrl_c_quits_from_modal() {
    let mut h = Harness::new();
    h.app.modal = Modal::Volunteer;
    let ev = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(handle_event(ev, &mut h.app, &h.prefs, &h.tx));
}

#[tokio::test]
/// What: Typing `q` into a form is text, not quit.
async fn modal_captures_global_keys() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('4'));
    h.press(KeyCode::Char('v'));
    assert_eq!(h.app.modal, Modal::Volunteer);
    assert!(!h.press(KeyCode::Char('q')));
    assert_eq!(h.app.support.volunteer.name, "q");
    assert_eq!(h.app.tab, Tab::Support);
}

#[tokio::test]
/// What: Invalid donation amounts show an error and return to the entry box.
async fn donation_rejects_zero_and_accepts_positive() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('4'));
    h.drain();
    h.press(KeyCode::Char('d'));
    h.type_str("0");
    h.press(KeyCode::Enter);
    match &h.app.modal {
        Modal::Notice { notice, return_to } => {
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(return_to.as_deref(), Some(&Modal::Donation));
        }
        other => panic!("expected notice, got {other:?}"),
    }
    h.press(KeyCode::Enter);
    assert_eq!(h.app.modal, Modal::Donation);

    h.press(KeyCode::Backspace);
    h.type_str("500");
    h.press(KeyCode::Enter);
    match &h.app.modal {
        Modal::Notice { notice, return_to } => {
            assert_eq!(notice.kind, NoticeKind::Success);
            assert_eq!(notice.arg.as_deref(), Some("500"));
            assert!(return_to.is_none());
        }
        other => panic!("expected notice, got {other:?}"),
    }
    assert!(h.app.support.donation_input.is_empty());
    assert!(h.drain().is_empty(), "donations never hit the network");
}

#[tokio::test]
/// What: An incomplete application never reaches the network.
async fn empty_volunteer_form_sends_nothing() {
    let mut h = Harness::new();
    h.app.modal = Modal::Volunteer;
    h.press(KeyCode::Enter);
    assert!(h.drain().is_empty());
    match &h.app.modal {
        Modal::Notice { notice, .. } => {
            assert_eq!(notice.key, "support.volunteer.missing");
            assert_eq!(
                notice.arg.as_deref(),
                Some("Full Name, Email, Phone Number")
            );
        }
        other => panic!("expected notice, got {other:?}"),
    }
}

#[tokio::test]
/// What: A complete application is sent once; repeated Enter is ignored while in flight.
async fn filled_volunteer_form_submits_once() {
    let mut h = Harness::new();
    h.app.modal = Modal::Volunteer;
    h.type_str("Asha");
    h.press(KeyCode::Tab);
    h.type_str("asha@example.in");
    h.press(KeyCode::Tab);
    h.type_str("98765");
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);

    let reqs = h.drain();
    assert_eq!(reqs.len(), 1);
    match &reqs[0] {
        Request::SubmitVolunteer(job) => {
            assert_eq!(job.application.name, "Asha");
            assert_eq!(job.application.email, "asha@example.in");
            assert_eq!(job.application.phone, "98765");
            assert_eq!(job.token.len(), 32);
        }
        other => panic!("unexpected request {other:?}"),
    }
    assert!(h.app.support.volunteer_in_flight());
}

#[tokio::test]
/// What: Completing a game awards XP and queues the score.
async fn completing_game_queues_score() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('3'));
    let xp = h.app.play.xp;
    h.press(KeyCode::Enter);
    assert_eq!(h.app.modal, Modal::Game);
    h.press(KeyCode::Enter);
    assert!(h.app.modal.is_none());
    assert!(h.app.play.xp > xp);
    let reqs = h.drain();
    assert_eq!(reqs.len(), 1);
    assert!(matches!(reqs[0], Request::SubmitScore(_)));
}
