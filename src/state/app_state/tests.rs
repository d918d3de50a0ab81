use super::*;
use crate::api::ApiError;
use crate::content::{NewsArticle, SubmitAck, VoteAck};
use crate::forms::{FormError, FormField};
use crate::state::modal::NoticeKind;
use crate::state::types::{Reply, Request};

fn article(id: &str, score: f64) -> NewsArticle {
    NewsArticle {
        id: id.into(),
        truth_score: score,
        ..NewsArticle::default()
    }
}

#[test]
fn tabs_load_once_on_mount_and_again_on_refresh() {
    let mut app = AppState::default();
    let first = app.activate(Tab::News);
    assert!(matches!(first.as_slice(), [Request::LoadNews(_)]));
    assert!(app.news.feed.is_refreshing());
    assert!(app.activate(Tab::Home).len() == 1);
    assert!(app.activate(Tab::News).is_empty());
    assert!(matches!(app.refresh().as_slice(), [Request::LoadNews(_)]));
    assert!(app.activate(Tab::About).is_empty());
    assert!(app.is_mounted(Tab::About));
}

#[test]
fn latest_refresh_wins() {
    let mut app = AppState::default();
    let Some(Request::LoadNews(old)) = app.activate(Tab::News).pop() else {
        panic!("expected news load");
    };
    let Some(Request::LoadNews(new)) = app.refresh().pop() else {
        panic!("expected news load");
    };
    app.apply_reply(Reply::News(new, Ok(vec![article("new", 0.9)])));
    app.apply_reply(Reply::News(old, Ok(vec![article("old", 0.1)])));
    assert_eq!(
        app.news.selected_article().map(|a| a.id.as_str()),
        Some("new")
    );
    assert!(!app.news.feed.is_refreshing());
}

#[test]
fn teardown_ignores_late_replies() {
    let mut app = AppState::default();
    let Some(Request::LoadQuote(t)) = app.activate(Tab::Support).pop() else {
        panic!("expected quote load");
    };
    app.teardown();
    app.apply_reply(Reply::Quote(t, Ok(crate::content::Quote::motto())));
    assert!(app.support.quote.data().is_none());
}

#[test]
fn volunteer_failure_returns_to_form() {
    let mut app = AppState::default();
    app.modal = Modal::Volunteer;
    app.apply_reply(Reply::Volunteer(Err(ApiError::MissingBaseUrl)));
    let Modal::Notice { notice, .. } = &app.modal else {
        panic!("expected notice");
    };
    assert_eq!(notice.kind, NoticeKind::Error);
    app.dismiss_notice();
    assert_eq!(app.modal, Modal::Volunteer);

    app.apply_reply(Reply::Volunteer(Ok(SubmitAck {
        success: true,
        ..SubmitAck::default()
    })));
    app.dismiss_notice();
    assert!(app.modal.is_none());
}

#[test]
fn late_replies_keep_the_open_overlay() {
    let mut app = AppState::default();
    app.modal = Modal::Donation;
    app.support.donation_input = "250".into();
    app.apply_reply(Reply::Vote(Ok(VoteAck {
        success: true,
        ..VoteAck::default()
    })));
    assert!(matches!(app.modal, Modal::Notice { .. }));
    app.dismiss_notice();
    assert_eq!(app.modal, Modal::Donation);
    assert_eq!(app.support.donation_input, "250");

    app.apply_reply(Reply::Volunteer(Err(ApiError::MissingBaseUrl)));
    app.dismiss_notice();
    assert_eq!(app.modal, Modal::Donation);

    app.modal = Modal::None;
    app.apply_reply(Reply::Volunteer(Err(ApiError::MissingBaseUrl)));
    app.dismiss_notice();
    assert!(app.modal.is_none());
}

#[test]
fn late_reply_over_game_keeps_session_reachable() {
    let mut app = AppState::default();
    app.play.open_selected();
    app.modal = Modal::Game;
    app.apply_reply(Reply::Vote(Err(ApiError::MissingBaseUrl)));
    app.dismiss_notice();
    assert_eq!(app.modal, Modal::Game);
    assert!(app.play.session.is_some());
}

#[test]
fn late_reply_stacks_on_validation_notice() {
    let mut app = AppState::default();
    let invalid = app.form_error_notice(&FormError::EmptyAmount);
    app.show_notice(invalid.clone(), Some(Modal::Donation));
    app.apply_reply(Reply::Vote(Err(ApiError::MissingBaseUrl)));
    app.dismiss_notice();
    let Modal::Notice { notice, .. } = &app.modal else {
        panic!("expected the validation notice back");
    };
    assert_eq!(notice, &invalid);
    app.dismiss_notice();
    assert_eq!(app.modal, Modal::Donation);
}

#[test]
fn missing_fields_notice_uses_translated_labels() {
    let app = AppState::default();
    let notice = app.form_error_notice(&FormError::MissingFields(vec![
        FormField::Name,
        FormField::Phone,
    ]));
    assert_eq!(notice.arg.as_deref(), Some("Full Name, Phone Number"));
}

#[test]
fn score_failure_is_silent() {
    let mut app = AppState::default();
    app.apply_reply(Reply::Score(Err(ApiError::MissingBaseUrl)));
    assert!(app.modal.is_none());
}
