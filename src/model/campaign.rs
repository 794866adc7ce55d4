use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::contract::{CommandRights, Contract};
use super::force::{Force, Lance, LanceRole, Unit, UnitType};
use super::track::TrackState;
use crate::id::{ContractId, ForceId, IdGenerator, ScenarioId, UnitId};

/// The campaign-wide registry the track rules read from and write to:
/// forces, lances, units, contracts and the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    date: NaiveDate,
    pub forces: BTreeMap<ForceId, Force>,
    pub lances: BTreeMap<ForceId, Lance>,
    pub units: BTreeMap<UnitId, Unit>,
    pub contracts: Vec<Contract>,
    /// Which contract each registered scenario belongs to.
    pub scenario_contracts: BTreeMap<ScenarioId, ContractId>,
    pub id_gen: IdGenerator,
}

impl Campaign {
    pub fn new(name: String, date: NaiveDate) -> Self {
        Self {
            name,
            date,
            forces: BTreeMap::new(),
            lances: BTreeMap::new(),
            units: BTreeMap::new(),
            contracts: Vec::new(),
            scenario_contracts: BTreeMap::new(),
            id_gen: IdGenerator::new(),
        }
    }

    // -- Calendar --

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Advance the calendar one day. Returns false at the end of the calendar.
    pub fn advance_day(&mut self) -> bool {
        match self.date.checked_add_days(Days::new(1)) {
            Some(next) => {
                self.date = next;
                true
            }
            None => false,
        }
    }

    pub fn is_monday(&self) -> bool {
        self.date.weekday() == Weekday::Mon
    }

    /// Weeks start on Sunday.
    pub fn is_first_day_of_week(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }

    // -- Forces and units --

    pub fn add_force(&mut self, name: &str) -> ForceId {
        let id = self.id_gen.next_id();
        self.forces.insert(id, Force::new(id, name.to_string()));
        id
    }

    /// Register a force as a lance. Returns false if the force does not exist.
    pub fn add_lance(&mut self, force: ForceId, role: LanceRole) -> bool {
        if !self.forces.contains_key(&force) {
            tracing::warn!("add_lance: {force} not found");
            return false;
        }
        self.lances.insert(force, Lance { force, role });
        true
    }

    /// Add a unit, optionally placing it in a force.
    /// A force that does not exist leaves the unit unassigned.
    pub fn add_unit(&mut self, name: &str, unit_type: UnitType, force: Option<ForceId>) -> UnitId {
        let id: UnitId = self.id_gen.next_id();
        let force = force.filter(|f| match self.forces.get_mut(f) {
            Some(f) => {
                f.units.push(id);
                true
            }
            None => {
                tracing::warn!("add_unit: {f} not found, {name} left unassigned");
                false
            }
        });
        self.units.insert(
            id,
            Unit {
                id,
                name: name.to_string(),
                unit_type,
                force,
                scenario: None,
            },
        );
        id
    }

    pub fn force(&self, id: ForceId) -> Option<&Force> {
        self.forces.get(&id)
    }

    pub fn force_mut(&mut self, id: ForceId) -> Option<&mut Force> {
        self.forces.get_mut(&id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn lance(&self, force: ForceId) -> Option<&Lance> {
        self.lances.get(&force)
    }

    /// Every registered lance, in force id order.
    pub fn lances(&self) -> impl Iterator<Item = &Lance> {
        self.lances.values()
    }

    pub fn primary_unit_type(&self, force: ForceId) -> Option<UnitType> {
        self.force(force)?.primary_unit_type(&self.units)
    }

    /// Attach a force to a scenario. Missing forces are ignored.
    pub fn attach_force(&mut self, force: ForceId, scenario: ScenarioId) {
        match self.forces.get_mut(&force) {
            Some(f) => f.scenario = Some(scenario),
            None => tracing::warn!("attach_force: {force} not found"),
        }
    }

    pub fn detach_force(&mut self, force: ForceId) {
        if let Some(f) = self.forces.get_mut(&force) {
            f.scenario = None;
        }
    }

    // -- Contracts --

    pub fn add_contract(
        &mut self,
        name: &str,
        required_lances: u32,
        command_rights: CommandRights,
    ) -> ContractId {
        let id = self.id_gen.next_id();
        self.contracts.push(Contract::new(
            id,
            name.to_string(),
            required_lances,
            command_rights,
        ));
        id
    }

    pub fn contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.id == id)
    }

    pub fn contract_mut(&mut self, id: ContractId) -> Option<&mut Contract> {
        self.contracts.iter_mut().find(|c| c.id == id)
    }

    pub fn active_contracts(&self) -> impl Iterator<Item = &Contract> {
        self.contracts.iter().filter(|c| c.active)
    }

    /// Every track of every active contract, paired with its contract.
    pub fn active_tracks(&self) -> impl Iterator<Item = (&Contract, &TrackState)> {
        self.active_contracts().flat_map(|c| {
            c.stratcon
                .iter()
                .flat_map(|state| state.tracks.iter())
                .map(move |t| (c, t))
        })
    }

    pub fn track(&self, contract: ContractId, index: usize) -> Option<&TrackState> {
        self.contract(contract)?.stratcon.as_ref()?.track(index)
    }

    pub fn track_mut(&mut self, contract: ContractId, index: usize) -> Option<&mut TrackState> {
        self.contract_mut(contract)?.stratcon.as_mut()?.track_mut(index)
    }

    /// True if the force holds a coordinate on a track of any active contract.
    pub fn is_force_on_any_track(&self, force: ForceId) -> bool {
        self.active_tracks().any(|(_, t)| t.is_force_assigned(force))
    }

    // -- Scenarios --

    /// Hand out a persistent ID for a new scenario of `contract`.
    pub fn register_scenario(&mut self, contract: ContractId) -> ScenarioId {
        let id = self.id_gen.next_id();
        self.scenario_contracts.insert(id, contract);
        id
    }

    pub fn scenario_contract(&self, scenario: ScenarioId) -> Option<ContractId> {
        self.scenario_contracts.get(&scenario).copied()
    }
}
