//! Gamification summary as served by `/api/gamification/stats`.

use serde::{Deserialize, Serialize};

/// Stats summary shown in the topbar badges.
///
/// The server owns these numbers; the client only displays them. The server
/// may omit any field or send `null`, so everything is optional on the wire and
/// the accessors apply the display defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationStats {
    #[serde(default)]
    pub current_streak: Option<i64>,
    #[serde(default)]
    pub total_xp: Option<i64>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub weekly_xp: Option<i64>,
    #[serde(default)]
    pub monthly_xp: Option<i64>,
    #[serde(default)]
    pub level_progress: Option<f64>,
    #[serde(default)]
    pub xp_for_next_level: Option<i64>,
    #[serde(default)]
    pub longest_streak: Option<i64>,
    #[serde(default)]
    pub badges_unlocked: Option<i64>,
}

impl GamificationStats {
    /// Current streak in days, 0 when unknown.
    pub fn streak(&self) -> i64 {
        self.current_streak.unwrap_or(0)
    }

    /// Total experience points, 0 when unknown.
    pub fn xp(&self) -> i64 {
        self.total_xp.unwrap_or(0)
    }

    /// Current level. Levels start at 1, so an unknown or zero level reads as 1.
    pub fn level(&self) -> i64 {
        match self.level {
            Some(level) if level != 0 => level,
            _ => 1,
        }
    }
}
