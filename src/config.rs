use crate::model::track::{DEFAULT_DEPLOYMENT_TIME, DEFAULT_SCENARIO_ODDS};

/// Tunables for track initialization and scenario scheduling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StratconConfig {
    /// Lances per full track; the remainder forms one smaller "odd" track.
    pub lances_per_track: u32,
    /// Grid cells per required lance. Sized so one scouting lance a week can
    /// cover the track over the life of a contract.
    pub hexes_per_lance: u32,
    /// Scenario odds assigned to new tracks (0–100).
    pub scenario_odds: u32,
    /// Deployment time in days assigned to new tracks.
    pub deployment_time: u32,
}

impl Default for StratconConfig {
    fn default() -> Self {
        Self {
            lances_per_track: 3,
            hexes_per_lance: 28,
            scenario_odds: DEFAULT_SCENARIO_ODDS,
            deployment_time: DEFAULT_DEPLOYMENT_TIME,
        }
    }
}
