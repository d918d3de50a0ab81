use rand::Rng;

/// What: Single-flight guard for a write request.
///
/// Details:
/// - `begin` yields a fresh idempotency token, or `None` while a previous submit is
///   still outstanding, so repeated key presses post once.
#[derive(Debug, Default)]
pub struct Submission {
    /// Token of the request in flight.
    in_flight: Option<String>,
}

impl Submission {
    /// Idle guard.
    #[must_use]
    pub const fn new() -> Self {
        Self { in_flight: None }
    }

    /// Claim the guard; returns the token to send, or `None` if already busy.
    pub fn begin(&mut self) -> Option<String> {
        if self.in_flight.is_some() {
            tracing::debug!("submission already in flight; ignoring");
            return None;
        }
        let token = idempotency_token();
        self.in_flight = Some(token.clone());
        Some(token)
    }

    /// Release the guard once the response (or error) arrived.
    pub fn finish(&mut self) {
        self.in_flight = None;
    }

    /// Whether a submit is outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// Fresh idempotency token: 128 random bits as lowercase hex.
#[must_use]
pub fn idempotency_token() -> String {
    let bits: u128 = rand::rng().random();
    format!("{bits:032x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_until_finish() {
        let mut s = Submission::new();
        let first = s.begin().expect("token");
        assert_eq!(first.len(), 32);
        assert!(s.is_busy());
        assert!(s.begin().is_none());
        s.finish();
        let second = s.begin().expect("token");
        assert_ne!(first, second);
    }
}
