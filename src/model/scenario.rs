use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contract::CommandRights;
use super::coords::Coords;
use crate::id::{ContractId, ForceId, ScenarioId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ScenarioState {
    /// Generated, but no player force is committed yet.
    Unresolved,
    PrimaryForcesCommitted,
    ReinforcementsCommitted,
    Completed,
}

string_enum!(ScenarioState {
    Unresolved => "unresolved",
    PrimaryForcesCommitted => "primary_forces_committed",
    ReinforcementsCommitted => "reinforcements_committed",
    Completed => "completed",
});

impl ScenarioState {
    pub fn is_active(self) -> bool {
        !matches!(self, ScenarioState::Completed)
    }

    /// Whether forces named on the scenario are actually attached to it.
    pub fn has_committed_forces(self) -> bool {
        match self {
            ScenarioState::PrimaryForcesCommitted | ScenarioState::ReinforcementsCommitted => true,
            ScenarioState::Unresolved | ScenarioState::Completed => false,
        }
    }
}

/// Where a scenario's battle map sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MapLocation {
    AllGroundTerrain,
    SpecificGroundTerrain,
    LowAtmosphere,
    Space,
}

string_enum!(MapLocation {
    AllGroundTerrain => "all_ground_terrain",
    SpecificGroundTerrain => "specific_ground_terrain",
    LowAtmosphere => "low_atmosphere",
    Space => "space",
});

impl MapLocation {
    pub fn is_ground(self) -> bool {
        match self {
            MapLocation::AllGroundTerrain | MapLocation::SpecificGroundTerrain => true,
            MapLocation::LowAtmosphere | MapLocation::Space => false,
        }
    }
}

/// Reference to the tactical template a scenario was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTemplate {
    pub name: String,
    pub map_location: MapLocation,
}

/// Combat-power modifier for allied units the employer attaches to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AttachedUnitsModifier {
    Integrated,
    House,
    Liaison,
}

string_enum!(AttachedUnitsModifier {
    Integrated => "integrated",
    House => "house",
    Liaison => "liaison",
});

impl AttachedUnitsModifier {
    pub fn for_command_rights(rights: CommandRights) -> Option<Self> {
        match rights {
            CommandRights::Integrated => Some(AttachedUnitsModifier::Integrated),
            CommandRights::House => Some(AttachedUnitsModifier::House),
            CommandRights::Liaison => Some(AttachedUnitsModifier::Liaison),
            CommandRights::Independent => None,
        }
    }
}

/// The three dates of a scenario, ordered deployment <= action <= return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSchedule {
    pub deployment_date: NaiveDate,
    pub action_date: NaiveDate,
    pub return_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StratconScenario {
    /// Assigned when the scenario is registered with the campaign.
    pub id: Option<ScenarioId>,
    pub name: String,
    pub template: ScenarioTemplate,
    pub current_state: ScenarioState,
    pub required_player_lances: u32,
    pub primary_force_ids: BTreeSet<ForceId>,
    pub deployment_date: NaiveDate,
    pub action_date: NaiveDate,
    pub return_date: NaiveDate,
    pub required_scenario: bool,
    pub attached_units_modifier: Option<AttachedUnitsModifier>,
}

impl StratconScenario {
    pub fn new(template: ScenarioTemplate, schedule: ScenarioSchedule) -> Self {
        Self {
            id: None,
            name: template.name.clone(),
            template,
            current_state: ScenarioState::Unresolved,
            required_player_lances: 1,
            primary_force_ids: BTreeSet::new(),
            deployment_date: schedule.deployment_date,
            action_date: schedule.action_date,
            return_date: schedule.return_date,
            required_scenario: false,
            attached_units_modifier: None,
        }
    }

    pub fn map_location(&self) -> MapLocation {
        self.template.map_location
    }

    pub fn is_active(&self) -> bool {
        self.current_state.is_active()
    }

    pub fn increment_required_player_lances(&mut self) {
        self.required_player_lances += 1;
    }

    /// Returns false if the force was already named on this scenario.
    pub fn add_primary_force(&mut self, force: ForceId) -> bool {
        self.primary_force_ids.insert(force)
    }

    pub fn set_attached_units_modifier(&mut self, rights: CommandRights) {
        self.attached_units_modifier = AttachedUnitsModifier::for_command_rights(rights);
    }

    pub fn schedule(&self) -> ScenarioSchedule {
        ScenarioSchedule {
            deployment_date: self.deployment_date,
            action_date: self.action_date,
            return_date: self.return_date,
        }
    }
}

/// What the tactical subsystem receives for opfor population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDescriptor {
    pub scenario: Option<ScenarioId>,
    pub contract: ContractId,
    pub track: String,
    pub coords: Coords,
    pub name: String,
    pub template: ScenarioTemplate,
    pub state: ScenarioState,
    pub required_player_lances: u32,
    pub primary_force_ids: Vec<ForceId>,
    pub schedule: ScenarioSchedule,
}

impl ScenarioDescriptor {
    pub fn new(
        scenario: &StratconScenario,
        contract: ContractId,
        track: &str,
        coords: Coords,
    ) -> Self {
        Self {
            scenario: scenario.id,
            contract,
            track: track.to_string(),
            coords,
            name: scenario.name.clone(),
            template: scenario.template.clone(),
            state: scenario.current_state,
            required_player_lances: scenario.required_player_lances,
            primary_force_ids: scenario.primary_force_ids.iter().copied().collect(),
            schedule: scenario.schedule(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StratconScenario {
        let day = NaiveDate::from_ymd_opt(3025, 3, 10).unwrap();
        StratconScenario::new(
            ScenarioTemplate {
                name: "Recon Raid".to_string(),
                map_location: MapLocation::AllGroundTerrain,
            },
            ScenarioSchedule {
                deployment_date: day,
                action_date: day,
                return_date: day,
            },
        )
    }

    #[test]
    fn new_scenario_is_unresolved_single_lance() {
        let scenario = sample();
        assert_eq!(scenario.current_state, ScenarioState::Unresolved);
        assert_eq!(scenario.required_player_lances, 1);
        assert_eq!(scenario.name, "Recon Raid");
        assert!(scenario.id.is_none());
        assert!(scenario.is_active());
    }

    #[test]
    fn primary_forces_are_a_set() {
        let mut scenario = sample();
        assert!(scenario.add_primary_force(ForceId(4)));
        assert!(!scenario.add_primary_force(ForceId(4)));
        assert_eq!(scenario.primary_force_ids.len(), 1);
    }

    #[test]
    fn liaison_rights_give_liaison_modifier() {
        let mut scenario = sample();
        scenario.set_attached_units_modifier(CommandRights::Liaison);
        assert_eq!(
            scenario.attached_units_modifier,
            Some(AttachedUnitsModifier::Liaison)
        );
        scenario.set_attached_units_modifier(CommandRights::Independent);
        assert_eq!(scenario.attached_units_modifier, None);
    }

    #[test]
    fn ground_locations() {
        assert!(MapLocation::AllGroundTerrain.is_ground());
        assert!(MapLocation::SpecificGroundTerrain.is_ground());
        assert!(!MapLocation::LowAtmosphere.is_ground());
        assert!(!MapLocation::Space.is_ground());
    }

    #[test]
    fn only_completed_is_terminal() {
        assert!(ScenarioState::Unresolved.is_active());
        assert!(ScenarioState::ReinforcementsCommitted.is_active());
        assert!(!ScenarioState::Completed.is_active());
        assert!(ScenarioState::PrimaryForcesCommitted.has_committed_forces());
        assert!(!ScenarioState::Unresolved.has_committed_forces());
    }
}
