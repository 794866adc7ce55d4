//! Builders shared by unit and integration tests.

use chrono::{NaiveDate, Weekday};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::StratconConfig;
use crate::id::{ContractId, ForceId};
use crate::model::*;
use crate::rules::init::track_dimensions;
use crate::rules::{GenerationReport, generate_scenarios_for_track};
use crate::tactical::TemplateLibrary;

/// A Monday early in 3025.
pub fn start_date() -> NaiveDate {
    NaiveDate::from_isoywd_opt(3025, 2, Weekday::Mon).expect("valid ISO week date")
}

/// An empty campaign dated on a Monday.
pub fn test_campaign() -> Campaign {
    Campaign::new("Test Campaign".to_string(), start_date())
}

/// Add a force of `num_units` identical units and register it as a lance.
pub fn add_lance(
    campaign: &mut Campaign,
    name: &str,
    unit_type: UnitType,
    num_units: usize,
    role: LanceRole,
) -> ForceId {
    let force = campaign.add_force(name);
    for n in 0..num_units {
        campaign.add_unit(&format!("{name} {}", n + 1), unit_type, Some(force));
    }
    campaign.add_lance(force, role);
    force
}

/// Add `count` mek lances named "Lance 1", "Lance 2", ...
pub fn add_mek_lances(campaign: &mut Campaign, count: usize) -> Vec<ForceId> {
    (1..=count)
        .map(|n| add_lance(campaign, &format!("Lance {n}"), UnitType::Mek, 4, LanceRole::Fight))
        .collect()
}

/// Add a contract with a single facility-free track named "Track 0".
/// Returns the contract and the track index.
pub fn with_track(
    campaign: &mut Campaign,
    command_rights: CommandRights,
    required_lances: u32,
    scenario_odds: u32,
) -> (ContractId, usize) {
    let contract = campaign.add_contract("Test Contract", required_lances, command_rights);
    let (width, height) =
        track_dimensions(required_lances, StratconConfig::default().hexes_per_lance);
    let mut track = TrackState::new("Track 0".to_string(), required_lances, width, height);
    track.scenario_odds = scenario_odds;
    let mut state = CampaignState::new(contract);
    state.add_track(track);
    if let Some(c) = campaign.contract_mut(contract) {
        c.stratcon = Some(state);
    }
    (contract, 0)
}

/// Run one generation pass on a track with the stock template library.
pub fn generate(
    campaign: &mut Campaign,
    contract: ContractId,
    track: usize,
    seed: u64,
) -> GenerationReport {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut library = TemplateLibrary::new();
    generate_scenarios_for_track(campaign, contract, track, &mut library, &mut rng)
}
