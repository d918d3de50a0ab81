//! One-shot fetch modes: print backend content to stdout and exit.

use std::fmt::Write as _;

use swadeshi::api::ApiClient;
use swadeshi::content::{NewsArticle, Quote};
use swadeshi::i18n::Translations;
use swadeshi::loader::Resource;
use swadeshi::prefs::Language;

/// What: Render one article as plain text.
///
/// Output:
/// - Title line with the truth score, the summary, and the source line.
#[must_use]
pub fn format_article(article: &NewsArticle, tr: &Translations, lang: Language) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] {}",
        tr.t_fmt1(lang, "news.truth_score", article.truth_percent()),
        article.title(lang)
    );
    let summary = article.summary(lang);
    if !summary.is_empty() {
        let _ = writeln!(out, "{summary}");
    }
    if !article.source.is_empty() {
        let _ = writeln!(out, "{}", tr.t_fmt1(lang, "news.source", &article.source));
    }
    out
}

/// Render a quote and its author as plain text.
#[must_use]
pub fn format_quote(quote: &Quote, tr: &Translations, lang: Language) -> String {
    format!(
        "\"{}\"\n{}\n",
        quote.text(lang),
        tr.t_fmt1(lang, "app.cli.quote_author", quote.author(lang))
    )
}

/// What: Print the news feed.
///
/// Output:
/// - `true` on success (an empty feed included), `false` when the fetch failed.
pub async fn handle_news(client: &ApiClient, tr: &Translations, lang: Language) -> bool {
    tracing::info!("news mode requested from CLI");
    let mut feed: Resource<Vec<NewsArticle>> = Resource::new();
    feed.load(client.fetch_news()).await;
    if let Some(err) = feed.error() {
        eprintln!("{}", tr.t_fmt1(lang, "app.cli.request_failed", err));
        return false;
    }
    let items = feed.data().map_or(&[][..], Vec::as_slice);
    if items.is_empty() {
        println!("{}", tr.t(lang, "news.empty"));
    }
    for article in items {
        println!("{}", format_article(article, tr, lang));
    }
    tracing::info!(count = items.len(), "displayed news items");
    true
}

/// What: Print today's quote.
///
/// Output:
/// - `true` on success, `false` when the fetch failed.
pub async fn handle_quote(client: &ApiClient, tr: &Translations, lang: Language) -> bool {
    tracing::info!("quote mode requested from CLI");
    match client.fetch_today_quote().await {
        Ok(quote) => {
            print!("{}", format_quote(&quote, tr, lang));
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch quote");
            eprintln!("{}", tr.t_fmt1(lang, "app.cli.request_failed", &e));
            false
        }
    }
}

/// What: Check connectivity by fetching the service banner.
///
/// Output:
/// - `true` when the backend answered.
pub async fn handle_ping(client: &ApiClient, tr: &Translations, lang: Language) -> bool {
    match client.ping().await {
        Ok(info) => {
            let origin = client.base_url().unwrap_or_default();
            println!("{}", tr.t_fmt1(lang, "app.cli.connected", origin));
            println!("{} {}", info.message, info.version);
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "backend ping failed");
            eprintln!("{}", tr.t_fmt1(lang, "app.cli.request_failed", &e));
            false
        }
    }
}
