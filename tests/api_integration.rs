//! Integration tests for the backend client, the loader and the network worker against
//! an in-process HTTP server with canned responses.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use swadeshi::api::{ApiClient, ApiError, IDEMPOTENCY_HEADER};
use swadeshi::app::serve_request;
use swadeshi::content::{NewsArticle, Vote};
use swadeshi::loader::{Resource, Settled};
use swadeshi::state::{AppState, Modal, NoticeKind, Request, Tab};

/// One request as seen by the canned server.
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Canned route: method, path, status, JSON body.
type Route = (&'static str, &'static str, u16, &'static str);

struct CannedServer {
    base: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl CannedServer {
    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("lock").clone()
    }
}

/// Start a server answering `routes`; unknown routes get 404.
async fn serve(routes: Vec<Route>) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    let routes = Arc::new(routes);
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let log = Arc::clone(&log);
            let routes = Arc::clone(&routes);
            tokio::spawn(async move {
                let (read_half, mut write_half) = stream.into_split();
                let mut reader = BufReader::new(read_half);
                let mut request_line = String::new();
                if reader.read_line(&mut request_line).await.is_err() {
                    return;
                }
                let mut parts = request_line.split_whitespace();
                let method = parts.next().unwrap_or_default().to_string();
                let path = parts.next().unwrap_or_default().to_string();
                let mut headers = Vec::new();
                let mut content_length = 0usize;
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.is_err() {
                        return;
                    }
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((k, v)) = line.split_once(':') {
                        let (k, v) = (k.trim().to_string(), v.trim().to_string());
                        if k.eq_ignore_ascii_case("content-length") {
                            content_length = v.parse().unwrap_or(0);
                        }
                        headers.push((k, v));
                    }
                }
                let mut body = vec![0u8; content_length];
                if reader.read_exact(&mut body).await.is_err() {
                    return;
                }
                let (status, payload) = routes
                    .iter()
                    .find(|(m, p, _, _)| *m == method && *p == path)
                    .map_or((404, "{}"), |(_, _, s, b)| (*s, *b));
                log.lock().expect("lock").push(Recorded {
                    method,
                    path,
                    headers,
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
                let response = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
                    payload.len()
                );
                let _ = write_half.write_all(response.as_bytes()).await;
                let _ = write_half.shutdown().await;
            });
        }
    });
    CannedServer {
        base: format!("http://{addr}"),
        requests,
    }
}

fn client(server: &CannedServer) -> ApiClient {
    ApiClient::new(Some(server.base.clone()), None).expect("client")
}

const NEWS: &str = r#"{"news":[
    {"_id":"a","title_en":"First","title_hi":"पहला","truth_score":0.9},
    {"_id":"b","title_en":"Second","truth_score":0.5},
    {"_id":"c","title_en":"Third","truth_score":0.7}
]}"#;

#[tokio::test]
/// What: A feed of K items arrives as exactly K items in backend order.
async fn news_feed_preserves_count_and_order() {
    let server = serve(vec![("GET", "/api/news", 200, NEWS)]).await;
    let items = client(&server).fetch_news().await.expect("news");
    let ids: Vec<&str> = items.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    let reqs = server.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].header("accept"), Some("application/json"));
}

#[tokio::test]
/// What: An envelope without `news` is an empty feed, not an error.
async fn missing_news_key_is_empty_feed() {
    let server = serve(vec![("GET", "/api/news", 200, r#"{"ok":true}"#)]).await;
    let items = client(&server).fetch_news().await.expect("news");
    assert!(items.is_empty());
}

#[tokio::test]
/// What: Non-2xx and malformed bodies surface as typed errors.
async fn status_and_decode_failures_are_typed() {
    let server = serve(vec![
        ("GET", "/api/news", 503, "{}"),
        ("GET", "/api/quotes/today", 200, "not json"),
    ])
    .await;
    let c = client(&server);
    match c.fetch_news().await {
        Err(ApiError::Status { code, path }) => {
            assert_eq!(code, 503);
            assert_eq!(path, "/api/news");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(matches!(
        c.fetch_today_quote().await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
/// What: A failed refresh leaves the previously loaded feed in place.
async fn failed_refresh_keeps_loaded_feed() {
    let good = serve(vec![("GET", "/api/news", 200, NEWS)]).await;
    let bad = serve(vec![("GET", "/api/news", 500, "{}")]).await;
    let mut feed: Resource<Vec<NewsArticle>> = Resource::new();
    assert_eq!(feed.load(client(&good).fetch_news()).await, Settled::Applied);
    assert_eq!(feed.data().map(Vec::len), Some(3));
    assert_eq!(feed.load(client(&bad).fetch_news()).await, Settled::Applied);
    assert_eq!(feed.data().map(Vec::len), Some(3));
    assert!(feed.error().is_some());
}

#[tokio::test]
/// What: Volunteer submissions carry the verbatim form values and an idempotency key.
async fn volunteer_submission_posts_form_verbatim() {
    let server = serve(vec![(
        "POST",
        "/api/volunteer",
        200,
        r#"{"success":true,"id":"v1"}"#,
    )])
    .await;
    let c = client(&server);
    let mut app = AppState::default();
    app.support.volunteer.name = " Asha ".into();
    app.support.volunteer.email = "asha@example.in".into();
    app.support.volunteer.phone = "98765".into();
    app.support.volunteer.state = "Bihar".into();
    let job = app
        .support
        .begin_volunteer()
        .expect("valid")
        .expect("not busy");
    let token = job.token.clone();

    let reply = serve_request(&c, Request::SubmitVolunteer(job)).await;
    app.apply_reply(reply);

    let reqs = server.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, "POST");
    assert_eq!(reqs[0].header(IDEMPOTENCY_HEADER), Some(token.as_str()));
    let body: serde_json::Value = serde_json::from_str(&reqs[0].body).expect("json body");
    assert_eq!(body["name"], " Asha ");
    assert_eq!(body["email"], "asha@example.in");
    assert_eq!(body["phone"], "98765");
    assert_eq!(body["state"], "Bihar");
    assert_eq!(body["message"], "");

    match &app.modal {
        Modal::Notice { notice, .. } => assert_eq!(notice.kind, NoticeKind::Success),
        other => panic!("expected notice, got {other:?}"),
    }
    assert!(app.support.volunteer.name.is_empty());
    assert!(!app.support.volunteer_in_flight());
}

#[tokio::test]
/// What: `success: false` from the backend is reported as a failure and keeps the form.
async fn declared_volunteer_failure_keeps_form() {
    let server = serve(vec![(
        "POST",
        "/api/volunteer",
        200,
        r#"{"success":false,"message":"duplicate"}"#,
    )])
    .await;
    let mut app = AppState::default();
    app.support.volunteer.name = "Asha".into();
    app.support.volunteer.email = "a@b.in".into();
    app.support.volunteer.phone = "1".into();
    let job = app
        .support
        .begin_volunteer()
        .expect("valid")
        .expect("not busy");
    app.modal = Modal::Volunteer;
    let reply = serve_request(&client(&server), Request::SubmitVolunteer(job)).await;
    app.apply_reply(reply);
    match &app.modal {
        Modal::Notice { notice, return_to } => {
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(return_to.as_deref(), Some(&Modal::Volunteer));
        }
        other => panic!("expected notice, got {other:?}"),
    }
    assert_eq!(app.support.volunteer.name, "Asha");
}

#[tokio::test]
/// What: Mounting News through the worker path fills the feed.
async fn mount_news_through_worker_path() {
    let server = serve(vec![("GET", "/api/news", 200, NEWS)]).await;
    let c = client(&server);
    let mut app = AppState::default();
    let reqs = app.activate(Tab::News);
    assert_eq!(reqs.len(), 1);
    for req in reqs {
        let reply = serve_request(&c, req).await;
        app.apply_reply(reply);
    }
    assert_eq!(app.news.feed.data().map(Vec::len), Some(3));
    assert!(!app.news.feed.is_refreshing());
}

#[tokio::test]
/// What: Voting posts the ballot to the poll's vote path and applies the new tally.
async fn vote_updates_poll_tally() {
    let server = serve(vec![
        (
            "GET",
            "/api/polls",
            200,
            r#"{"polls":[{"_id":"p1","question_en":"Buy local?","yes":3,"no":1}]}"#,
        ),
        (
            "POST",
            "/api/polls/p1/vote",
            200,
            r#"{"success":true,"poll":{"_id":"p1","question_en":"Buy local?","yes":4,"no":1}}"#,
        ),
    ])
    .await;
    let c = client(&server);
    let mut app = AppState::default();
    for req in app.activate(Tab::Home) {
        app.apply_reply(serve_request(&c, req).await);
    }
    let job = app.home.begin_vote(Vote::Yes).expect("vote job");
    app.apply_reply(serve_request(&c, Request::Vote(job)).await);

    let poll = app.home.selected_poll().expect("poll");
    assert_eq!((poll.yes, poll.no), (4, 1));
    let reqs = server.requests();
    let vote = reqs.iter().find(|r| r.method == "POST").expect("vote request");
    assert_eq!(vote.path, "/api/polls/p1/vote");
    assert_eq!(vote.body, r#"{"vote":"yes"}"#);
}
