#![allow(dead_code)]

use chrono::{Days, NaiveDate, Weekday};
use stratcon::model::*;
use stratcon::rules::init::track_dimensions;
use stratcon::{ContractId, ForceId, StratconConfig};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_isoywd_opt(3025, 2, Weekday::Mon).unwrap()
}

/// A campaign with `num_lances` four-mek fight lances.
pub fn campaign_with_lances(num_lances: usize) -> (Campaign, Vec<ForceId>) {
    let mut campaign = Campaign::new("Integration".to_string(), start_date());
    let forces = (1..=num_lances)
        .map(|n| add_lance(&mut campaign, &format!("Lance {n}"), UnitType::Mek))
        .collect();
    (campaign, forces)
}

pub fn add_lance(campaign: &mut Campaign, name: &str, unit_type: UnitType) -> ForceId {
    let force = campaign.add_force(name);
    for n in 1..=4 {
        campaign.add_unit(&format!("{name} {n}"), unit_type, Some(force));
    }
    campaign.add_lance(force, LanceRole::Fight);
    force
}

/// Register a contract with one facility-free track of the standard size.
pub fn add_contract_with_track(
    campaign: &mut Campaign,
    command_rights: CommandRights,
    required_lances: u32,
    scenario_odds: u32,
) -> ContractId {
    let (width, height) =
        track_dimensions(required_lances, StratconConfig::default().hexes_per_lance);
    add_contract_with_grid(campaign, command_rights, required_lances, scenario_odds, width, height)
}

pub fn add_contract_with_grid(
    campaign: &mut Campaign,
    command_rights: CommandRights,
    required_lances: u32,
    scenario_odds: u32,
    width: u32,
    height: u32,
) -> ContractId {
    let contract = campaign.add_contract("Garrison Duty", required_lances, command_rights);
    let mut track = TrackState::new("Track 1".to_string(), required_lances, width, height);
    track.scenario_odds = scenario_odds;
    let mut state = CampaignState::new(contract);
    state.add_track(track);
    campaign.contract_mut(contract).unwrap().stratcon = Some(state);
    contract
}

pub fn next_monday(campaign: &mut Campaign) {
    let date = campaign.date().checked_add_days(Days::new(7)).unwrap();
    campaign.set_date(date);
}

pub fn all_tracks(campaign: &Campaign) -> Vec<&TrackState> {
    campaign.active_tracks().map(|(_, track)| track).collect()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
