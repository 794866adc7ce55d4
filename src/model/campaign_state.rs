use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::track::TrackState;
use crate::id::{ContractId, ForceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    VictoryPoints,
    SupportPoints,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::VictoryPoints => f.write_str("victory points"),
            Currency::SupportPoints => f.write_str("support points"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Insufficient {currency}: required {required}, available {available}")]
    Insufficient {
        currency: Currency,
        required: u32,
        available: u32,
    },
    #[error("Contract {0} has no track state")]
    NoCampaignState(ContractId),
}

/// The tracks of one contract plus its campaign currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignState {
    pub contract: ContractId,
    pub tracks: Vec<TrackState>,
    pub victory_points: u32,
    pub support_points: u32,
}

impl CampaignState {
    pub fn new(contract: ContractId) -> Self {
        Self {
            contract,
            tracks: Vec::new(),
            victory_points: 0,
            support_points: 0,
        }
    }

    pub fn add_track(&mut self, track: TrackState) {
        self.tracks.push(track);
    }

    pub fn track(&self, index: usize) -> Option<&TrackState> {
        self.tracks.get(index)
    }

    pub fn track_mut(&mut self, index: usize) -> Option<&mut TrackState> {
        self.tracks.get_mut(index)
    }

    pub fn required_lance_count(&self) -> u32 {
        self.tracks.iter().map(|t| t.required_lance_count).sum()
    }

    /// True if the force holds a coordinate on any of this contract's tracks.
    pub fn is_force_deployed_here(&self, force: ForceId) -> bool {
        self.tracks.iter().any(|t| t.is_force_assigned(force))
    }

    pub fn add_victory_points(&mut self, amount: u32) {
        self.victory_points += amount;
    }

    /// Apply a signed change to victory points; the balance never goes below zero.
    pub fn update_victory_points(&mut self, delta: i32) {
        self.victory_points = self.victory_points.saturating_add_signed(delta);
    }

    pub fn add_support_points(&mut self, amount: u32) {
        self.support_points += amount;
    }

    pub fn use_support_point(&mut self) -> Result<(), CurrencyError> {
        if self.support_points == 0 {
            return Err(CurrencyError::Insufficient {
                currency: Currency::SupportPoints,
                required: 1,
                available: 0,
            });
        }
        self.support_points -= 1;
        Ok(())
    }

    /// Trade one victory point for one support point.
    pub fn convert_victory_to_support_point(&mut self) -> Result<(), CurrencyError> {
        if self.victory_points == 0 {
            return Err(CurrencyError::Insufficient {
                currency: Currency::VictoryPoints,
                required: 1,
                available: 0,
            });
        }
        self.victory_points -= 1;
        self.support_points += 1;
        Ok(())
    }
}
