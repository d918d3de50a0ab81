use serde::Deserialize;

use super::poll::Poll;

/// Response of write endpoints (`/api/volunteer`, `/api/games/score`).
///
/// A body without `success` reads as a declared failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmitAck {
    /// Declared outcome.
    pub success: bool,
    /// Optional human-readable message from the backend.
    pub message: Option<String>,
    /// Identifier of the stored record.
    pub id: Option<String>,
}

/// Response of `POST /api/polls/{id}/vote`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VoteAck {
    /// Declared outcome.
    pub success: bool,
    /// Poll with updated tallies.
    pub poll: Option<Poll>,
}

/// Response of `GET /api/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiInfo {
    /// Service banner.
    pub message: String,
    /// API version string.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_without_success_is_failure() {
        let ack: SubmitAck = serde_json::from_str(r#"{"message":"hm"}"#).expect("parse");
        assert!(!ack.success);
        let ack: SubmitAck =
            serde_json::from_str(r#"{"success":true,"id":"65f","xp_earned":70}"#).expect("parse");
        assert!(ack.success);
        assert_eq!(ack.id.as_deref(), Some("65f"));
    }
}
