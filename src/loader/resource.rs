use std::future::Future;

use crate::api::ApiError;

/// Handle identifying one load attempt.
///
/// Only the ticket returned by the most recent [`Resource::begin`] may settle the resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Sequence number of this attempt.
    #[must_use]
    pub const fn seq(self) -> u64 {
        self.0
    }
}

/// Outcome of [`Resource::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// The result was recorded.
    Applied,
    /// A newer attempt started (or the resource was detached); the result was dropped.
    Stale,
}

/// Lifecycle of a remotely loaded value.
#[derive(Debug, Default)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight; `previous` keeps what was shown before.
    Loading {
        /// Data from an earlier successful load.
        previous: Option<T>,
    },
    /// Last request succeeded.
    Loaded(T),
    /// Last request failed; `previous` keeps what was shown before.
    Failed {
        /// Human-readable failure.
        error: String,
        /// Data from an earlier successful load.
        previous: Option<T>,
    },
}

impl<T> LoadState<T> {
    /// Take the visible data out of the state, leaving `Idle`.
    fn take_data(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Idle) {
            Self::Idle => None,
            Self::Loaded(v) => Some(v),
            Self::Loading { previous } | Self::Failed { previous, .. } => previous,
        }
    }
}

/// What: Remote value with ordered, cancellable loading.
///
/// Details:
/// - `begin` hands out increasing tickets; `settle` ignores every ticket but the latest,
///   so a slow earlier refresh can never overwrite a newer one.
/// - Failure keeps the previously loaded data visible.
/// - `detach` drops all outstanding tickets when the owning screen goes away.
#[derive(Debug)]
pub struct Resource<T> {
    /// Current lifecycle state.
    state: LoadState<T>,
    /// Sequence of the most recently issued ticket.
    latest: u64,
    /// Lowest sequence still allowed to settle; bumped by `detach`.
    floor: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resource<T> {
    /// Empty resource in `Idle`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::Idle,
            latest: 0,
            floor: 1,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Start a new attempt and move to `Loading`, keeping visible data as `previous`.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        let previous = self.state.take_data();
        self.state = LoadState::Loading { previous };
        Ticket(self.latest)
    }

    /// What: Record the result of attempt `ticket`.
    ///
    /// Output:
    /// - `Settled::Applied` when `ticket` is the latest live attempt, `Settled::Stale` otherwise.
    ///
    /// Details:
    /// - Success replaces the data wholesale; failure is logged and keeps prior data.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Settled {
        if ticket.0 != self.latest || ticket.0 < self.floor {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "dropping stale load result"
            );
            return Settled::Stale;
        }
        match result {
            Ok(value) => self.state = LoadState::Loaded(value),
            Err(err) => {
                tracing::warn!(error = %err, "load failed; keeping previous data");
                let previous = self.state.take_data();
                self.state = LoadState::Failed {
                    error: err.to_string(),
                    previous,
                };
            }
        }
        Settled::Applied
    }

    /// Invalidate every in-flight ticket and leave `Loading` if needed.
    pub fn detach(&mut self) {
        self.floor = self.latest + 1;
        if let LoadState::Loading { .. } = self.state {
            match self.state.take_data() {
                Some(v) => self.state = LoadState::Loaded(v),
                None => self.state = LoadState::Idle,
            }
        }
    }

    /// What: `begin`, await `fut`, then `settle` in one call.
    ///
    /// Details:
    /// - Holds `&mut self` across the await, so it suits one-shot callers (CLI, tests).
    ///   The TUI uses `begin`/`settle` around spawned tasks instead.
    pub async fn load<F>(&mut self, fut: F) -> Settled
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let ticket = self.begin();
        let result = fut.await;
        self.settle(ticket, result)
    }

    /// Loaded data, or the data retained through `Loading`/`Failed`.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            LoadState::Idle => None,
            LoadState::Loaded(v) => Some(v),
            LoadState::Loading { previous } | LoadState::Failed { previous, .. } => {
                previous.as_ref()
            }
        }
    }

    /// Mutable access to the visible data, for local patches such as an updated poll tally.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            LoadState::Idle => None,
            LoadState::Loaded(v) => Some(v),
            LoadState::Loading { previous } | LoadState::Failed { previous, .. } => {
                previous.as_mut()
            }
        }
    }

    /// Whether a live attempt is outstanding (drives the spinner).
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    /// Error text of the last attempt, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Whether anything was ever requested.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, LoadState::Idle)
    }
}
