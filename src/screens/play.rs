//! Play tab: game catalog, XP counter and badges.

use rand::Rng;

use crate::content::{GAMES, Game, GameScore, roll_xp};
use crate::loader::idempotency_token;

/// Achievement badge shown under "Your Badges".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    /// Translation key of the badge name.
    pub key: &'static str,
    /// Whether the badge is unlocked.
    pub earned: bool,
}

/// Badges in display order.
pub const BADGES: [Badge; 2] = [
    Badge {
        key: "play.aware_citizen",
        earned: true,
    },
    Badge {
        key: "play.truth_seeker",
        earned: false,
    },
];

/// An open game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSession {
    /// Catalog entry being played.
    pub game: &'static Game,
    /// Points scored in this session.
    pub score: u32,
}

/// A finished game ready to be posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreJob {
    /// Request body.
    pub score: GameScore,
    /// Idempotency token for the request.
    pub token: String,
}

/// Play tab state.
#[derive(Debug, Default)]
pub struct PlayScreen {
    /// XP earned this run; never persisted.
    pub xp: u32,
    /// Highlighted catalog index.
    pub selected: usize,
    /// Game currently open, if any.
    pub session: Option<GameSession>,
}

impl PlayScreen {
    /// Highlight the next game.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(GAMES.len() - 1);
    }

    /// Highlight the previous game.
    pub const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the highlighted game with a fresh score.
    pub fn open_selected(&mut self) {
        if let Some(game) = GAMES.get(self.selected) {
            tracing::debug!(game = game.id, "opening game");
            self.session = Some(GameSession { game, score: 0 });
        }
    }

    /// Close the open game without awarding XP.
    pub const fn close_game(&mut self) {
        self.session = None;
    }

    /// What: Finish the open game.
    ///
    /// Output:
    /// - The score submission, or `None` when no game is open.
    ///
    /// Details:
    /// - XP is added locally before any request is made; the session closes.
    pub fn complete_game<R: Rng>(&mut self, rng: &mut R) -> Option<ScoreJob> {
        let session = self.session.take()?;
        let xp_earned = roll_xp(rng);
        self.xp = self.xp.saturating_add(xp_earned);
        tracing::info!(game = session.game.id, xp_earned, total = self.xp, "game completed");
        Some(ScoreJob {
            score: GameScore {
                game_id: session.game.id.to_string(),
                score: session.score,
                xp_earned,
            },
            token: idempotency_token(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{XP_MIN, XP_SPREAD};

    #[test]
    fn completing_awards_xp_and_closes() {
        let mut s = PlayScreen::default();
        assert!(s.complete_game(&mut rand::rng()).is_none());
        s.select_next();
        s.open_selected();
        assert_eq!(s.session.map(|g| g.game.id), Some("taxpayer"));
        let job = s.complete_game(&mut rand::rng()).expect("job");
        assert!(s.session.is_none());
        assert_eq!(job.score.game_id, "taxpayer");
        assert_eq!(job.score.score, 0);
        assert_eq!(s.xp, job.score.xp_earned);
        assert!((XP_MIN..XP_MIN + XP_SPREAD).contains(&s.xp));
    }

    #[test]
    fn reopening_resets_score_and_selection_is_bounded() {
        let mut s = PlayScreen::default();
        for _ in 0..10 {
            s.select_next();
        }
        assert_eq!(s.selected, GAMES.len() - 1);
        s.open_selected();
        if let Some(sess) = s.session.as_mut() {
            sess.score = 7;
        }
        s.open_selected();
        assert_eq!(s.session.map(|g| g.score), Some(0));
        s.close_game();
        assert!(s.session.is_none());
        assert_eq!(s.xp, 0);
    }
}
