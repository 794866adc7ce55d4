use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coords::{Coords, coord_map};
use super::facility::Facility;
use super::scenario::StratconScenario;
use crate::id::ForceId;

pub const DEFAULT_SCENARIO_ODDS: u32 = 50;
pub const DEFAULT_DEPLOYMENT_TIME: u32 = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackError {
    #[error("{coords} lies outside the {width}x{height} track")]
    OutOfBounds {
        coords: Coords,
        width: u32,
        height: u32,
    },
    #[error("a scenario already occupies {0}")]
    Occupied(Coords),
}

/// One rectangular territory of a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackState {
    pub display_name: String,
    pub width: u32,
    pub height: u32,
    pub required_lance_count: u32,
    /// Percentage threshold. A weekly roll must land strictly above it to
    /// spawn a scenario, so lower odds mean more scenarios.
    pub scenario_odds: u32,
    /// Days between deployment and return for scenarios on this track.
    pub deployment_time: u32,
    #[serde(with = "coord_map")]
    pub facilities: BTreeMap<Coords, Facility>,
    #[serde(with = "coord_map")]
    pub scenarios: BTreeMap<Coords, StratconScenario>,
    pub assigned_force_coords: BTreeMap<ForceId, Coords>,
}

impl TrackState {
    pub fn new(display_name: String, required_lance_count: u32, width: u32, height: u32) -> Self {
        Self {
            display_name,
            width,
            height,
            required_lance_count,
            scenario_odds: DEFAULT_SCENARIO_ODDS,
            deployment_time: DEFAULT_DEPLOYMENT_TIME,
            facilities: BTreeMap::new(),
            scenarios: BTreeMap::new(),
            assigned_force_coords: BTreeMap::new(),
        }
    }

    pub fn is_in_bounds(&self, coords: Coords) -> bool {
        coords.x < self.width && coords.y < self.height
    }

    /// Place a facility. Overlap is not checked: a facility already at
    /// `coords` is replaced and returned.
    pub fn add_facility(&mut self, coords: Coords, facility: Facility) -> Option<Facility> {
        self.facilities.insert(coords, facility)
    }

    pub fn facility_at(&self, coords: Coords) -> Option<&Facility> {
        self.facilities.get(&coords)
    }

    pub fn facility_at_mut(&mut self, coords: Coords) -> Option<&mut Facility> {
        self.facilities.get_mut(&coords)
    }

    pub fn add_scenario(
        &mut self,
        coords: Coords,
        scenario: StratconScenario,
    ) -> Result<(), TrackError> {
        if !self.is_in_bounds(coords) {
            return Err(TrackError::OutOfBounds {
                coords,
                width: self.width,
                height: self.height,
            });
        }
        if self.scenarios.contains_key(&coords) {
            return Err(TrackError::Occupied(coords));
        }
        self.scenarios.insert(coords, scenario);
        Ok(())
    }

    pub fn scenario_at(&self, coords: Coords) -> Option<&StratconScenario> {
        self.scenarios.get(&coords)
    }

    pub fn scenario_at_mut(&mut self, coords: Coords) -> Option<&mut StratconScenario> {
        self.scenarios.get_mut(&coords)
    }

    /// Remove a scenario and release its forces' coordinates on this track.
    pub fn remove_scenario(&mut self, coords: Coords) -> Option<StratconScenario> {
        let scenario = self.scenarios.remove(&coords)?;
        self.assigned_force_coords
            .retain(|force, at| !(*at == coords && scenario.primary_force_ids.contains(force)));
        Some(scenario)
    }

    /// Returns the force's previous coordinate on this track, if any.
    pub fn assign_force(&mut self, force: ForceId, coords: Coords) -> Option<Coords> {
        self.assigned_force_coords.insert(force, coords)
    }

    pub fn unassign_force(&mut self, force: ForceId) -> Option<Coords> {
        self.assigned_force_coords.remove(&force)
    }

    pub fn is_force_assigned(&self, force: ForceId) -> bool {
        self.assigned_force_coords.contains_key(&force)
    }

    pub fn assigned_force_count(&self) -> usize {
        self.assigned_force_coords.len()
    }

    pub fn num_cells(&self) -> u32 {
        self.width * self.height
    }
}
