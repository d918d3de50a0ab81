//! Backend records and the bilingual text rules used to display them.

mod ack;
mod bilingual;
mod game;
mod news;
mod poll;
mod quote;

pub use ack::{ApiInfo, SubmitAck, VoteAck};
pub use bilingual::pick;
pub use game::{GAMES, Game, GameScore, XP_MIN, XP_SPREAD, game_by_id, roll_xp};
pub use news::{GREEN_TIER_MIN, NewsArticle, NewsEnvelope, TruthTier, YELLOW_TIER_MIN};
pub use poll::{Poll, PollsEnvelope, Vote, VoteRequest};
pub use quote::Quote;
