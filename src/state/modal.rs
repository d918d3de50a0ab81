use crate::content::NewsArticle;

/// Tone of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Confirmation.
    Success,
    /// Validation or request failure.
    Error,
}

/// Dismissable message; text is looked up at render time so it follows language toggles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Translation key of the message.
    pub key: &'static str,
    /// Value for the `{}` placeholder, if the message has one.
    pub arg: Option<String>,
    /// Tone.
    pub kind: NoticeKind,
}

impl Notice {
    /// Success notice.
    #[must_use]
    pub const fn success(key: &'static str, arg: Option<String>) -> Self {
        Self {
            key,
            arg,
            kind: NoticeKind::Success,
        }
    }

    /// Error notice.
    #[must_use]
    pub const fn error(key: &'static str, arg: Option<String>) -> Self {
        Self {
            key,
            arg,
            kind: NoticeKind::Error,
        }
    }
}

/// Overlay drawn above the active tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Fact-vs-claim notes of one article.
    FactCheck {
        /// Article being inspected.
        article: Box<NewsArticle>,
    },
    /// Open game (state lives in the Play screen).
    Game,
    /// Donation amount entry.
    Donation,
    /// Volunteer application form.
    Volunteer,
    /// Message box.
    Notice {
        /// Message to show.
        notice: Notice,
        /// Overlay restored when the notice is dismissed.
        return_to: Option<Box<Modal>>,
    },
}

impl Modal {
    /// Whether no overlay is open.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
