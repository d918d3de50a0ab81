use rand::Rng;
use serde::Serialize;

use super::bilingual::pick;
use crate::prefs::Language;

/// Smallest XP award for finishing a game.
pub const XP_MIN: u32 = 50;
/// Width of the XP award range; awards fall in `XP_MIN..XP_MIN + XP_SPREAD`.
pub const XP_SPREAD: u32 = 50;

/// Entry of the static game catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    /// Identifier sent with score submissions.
    pub id: &'static str,
    /// Title (English).
    pub title_en: &'static str,
    /// Title (Hindi).
    pub title_hi: &'static str,
    /// Blurb (English).
    pub description_en: &'static str,
    /// Blurb (Hindi).
    pub description_hi: &'static str,
    /// Card accent as `#RRGGBB`.
    pub color: &'static str,
}

impl Game {
    /// Title in `lang`.
    #[must_use]
    pub fn title(&self, lang: Language) -> &'static str {
        pick(lang, self.title_en, self.title_hi)
    }

    /// Blurb in `lang`.
    #[must_use]
    pub fn description(&self, lang: Language) -> &'static str {
        pick(lang, self.description_en, self.description_hi)
    }
}

/// Games offered on the Play screen, in display order.
pub static GAMES: [Game; 3] = [
    Game {
        id: "corruption",
        title_en: "Where the Corruption Money Goes",
        title_hi: "भ्रष्टाचार का पैसा कहाँ जाता है",
        description_en: "Track corruption funds and learn about transparency",
        description_hi: "भ्रष्टाचार के धन का पता लगाएं और पारदर्शिता के बारे में जानें",
        color: "#FF6B6B",
    },
    Game {
        id: "taxpayer",
        title_en: "Spend the Taxpayer's Money",
        title_hi: "करदाता का पैसा खर्च करें",
        description_en: "Allocate budget and see the impact",
        description_hi: "बजट आवंटित करें और प्रभाव देखें",
        color: "#4ECDC4",
    },
    Game {
        id: "quiz",
        title_en: "Know Your Country",
        title_hi: "अपने देश को जानें",
        description_en: "Timed quiz about India's governance and culture",
        description_hi: "भारत के शासन और संस्कृति पर समयबद्ध प्रश्नोत्तरी",
        color: "#FFD93D",
    },
];

/// Look up a catalog entry by id.
#[must_use]
pub fn game_by_id(id: &str) -> Option<&'static Game> {
    GAMES.iter().find(|g| g.id == id)
}

/// Body of `POST /api/games/score`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameScore {
    /// Catalog id of the finished game.
    pub game_id: String,
    /// In-game score.
    pub score: u32,
    /// XP awarded for this session.
    pub xp_earned: u32,
}

/// What: Draw the XP award for a finished game.
///
/// Output:
/// - A value in `XP_MIN..XP_MIN + XP_SPREAD`.
#[must_use]
pub fn roll_xp<R: Rng>(rng: &mut R) -> u32 {
    XP_MIN + rng.random_range(0..XP_SPREAD)
}
