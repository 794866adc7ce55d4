//! The weekly scenario roll for a single track.

use chrono::{Days, NaiveDate};
use rand::{Rng, RngCore};

use super::forces::AvailabilitySnapshot;
use crate::id::{ContractId, ForceId, ScenarioId};
use crate::model::{
    Campaign, CommandRights, Coords, ScenarioDescriptor, ScenarioSchedule, ScenarioState,
    StratconScenario,
};
use crate::tactical::TacticalSubsystem;

/// Length of the window the deployment day is drawn from.
const DAYS_PER_WEEK: u32 = 7;

/// What one pass over a track produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub contract: Option<ContractId>,
    pub track: usize,
    /// New scenarios, in generation order.
    pub generated: Vec<(Coords, ScenarioId)>,
    /// Existing scenarios that grew by one lance, and the force added (if any).
    pub reinforced: Vec<(Coords, Option<ForceId>)>,
    /// Scenario marked required under liaison command.
    pub required: Option<(Coords, ScenarioId)>,
}

/// Day offsets from today for the three scenario dates.
///
/// With deployment time `d`: deployment falls within the first `7 - d` days
/// of the week, the battle within `d` days after deployment, and the force
/// returns exactly `d` days after deploying.
pub fn roll_schedule_offsets(deployment_time: u32, rng: &mut dyn RngCore) -> (u32, u32, u32) {
    let deployment_day = if deployment_time < DAYS_PER_WEEK {
        rng.random_range(0..DAYS_PER_WEEK - deployment_time)
    } else {
        0
    };
    let battle_day = deployment_day
        + if deployment_time > 0 {
            rng.random_range(0..deployment_time)
        } else {
            0
        };
    let return_day = deployment_day + deployment_time;
    (deployment_day, battle_day, return_day)
}

/// Turn rolled offsets into calendar dates. `None` only past the end of the calendar.
pub fn roll_schedule(
    today: NaiveDate,
    deployment_time: u32,
    rng: &mut dyn RngCore,
) -> Option<ScenarioSchedule> {
    let (deployment_day, battle_day, return_day) = roll_schedule_offsets(deployment_time, rng);
    let offset = |days: u32| today.checked_add_days(Days::new(u64::from(days)));
    Some(ScenarioSchedule {
        deployment_date: offset(deployment_day)?,
        action_date: offset(battle_day)?,
        return_date: offset(return_day)?,
    })
}

/// Potentially spawn scenarios on one track of a contract.
///
/// One trial per required lance. A trial needs a free force and a roll on
/// `[0, 100)` strictly above the track's scenario odds. A hit picks a cell and
/// a force; landing on an existing scenario grows that scenario by one lance
/// instead of creating a new one. Afterwards every new scenario is finalized
/// by the tactical subsystem and either committed (integrated command) or left
/// unresolved with its force released. Under liaison command one new scenario
/// becomes required.
///
/// Never fails: a missing contract or track, or running out of forces, just
/// ends the pass early.
pub fn generate_scenarios_for_track(
    campaign: &mut Campaign,
    contract_id: ContractId,
    track_index: usize,
    tactical: &mut dyn TacticalSubsystem,
    rng: &mut dyn RngCore,
) -> GenerationReport {
    let mut report = GenerationReport {
        contract: Some(contract_id),
        track: track_index,
        ..GenerationReport::default()
    };

    let Some(contract) = campaign.contract(contract_id) else {
        tracing::warn!("generate_scenarios_for_track: {contract_id} not found");
        return report;
    };
    let command_rights = contract.command_rights;
    let Some(track) = campaign.track(contract_id, track_index) else {
        tracing::warn!("generate_scenarios_for_track: {contract_id} has no track {track_index}");
        return report;
    };
    let required_lances = track.required_lance_count;
    let scenario_odds = track.scenario_odds;
    let deployment_time = track.deployment_time;
    let (width, height) = (track.width, track.height);
    if width == 0 || height == 0 {
        tracing::warn!("track '{}' has an empty grid", track.display_name);
        return report;
    }

    let mut snapshot = AvailabilitySnapshot::capture(campaign);
    let today = campaign.date();

    for _ in 0..required_lances {
        if snapshot.is_empty() {
            continue;
        }
        if rng.random_range(0..100) <= scenario_odds {
            continue;
        }

        let coords = Coords::new(rng.random_range(0..width), rng.random_range(0..height));
        let Some(force) = snapshot.take_random(rng) else {
            continue;
        };

        let occupied = campaign
            .track(contract_id, track_index)
            .and_then(|t| t.scenario_at(coords))
            .map(|s| s.map_location());
        if let Some(location) = occupied {
            let extra = snapshot.take_reinforcement(location, rng);
            reinforce_scenario(campaign, contract_id, track_index, coords, extra);
            report.reinforced.push((coords, extra));
            continue;
        }

        let unit_type = campaign.primary_unit_type(force);
        let Some(contract) = campaign.contract(contract_id) else {
            continue;
        };
        let template = tactical.select_template(unit_type, contract, rng);
        let Some(schedule) = roll_schedule(today, deployment_time, rng) else {
            tracing::warn!("scenario dates for {coords} fall past the end of the calendar");
            continue;
        };

        let mut scenario = StratconScenario::new(template, schedule);
        let scenario_id = campaign.register_scenario(contract_id);
        scenario.id = Some(scenario_id);
        scenario.add_primary_force(force);

        let Some(track) = campaign.track_mut(contract_id, track_index) else {
            continue;
        };
        if let Err(e) = track.add_scenario(coords, scenario) {
            tracing::warn!("could not place scenario on '{}': {e}", track.display_name);
            continue;
        }
        campaign.attach_force(force, scenario_id);
        tracing::debug!("{scenario_id} generated at {coords} for {force}");
        report.generated.push((coords, scenario_id));
    }

    for &(coords, _) in &report.generated {
        finalize_generated(campaign, contract_id, track_index, coords, command_rights, tactical);
    }

    if command_rights == CommandRights::Liaison && !report.generated.is_empty() {
        let (coords, scenario_id) = report.generated[rng.random_range(0..report.generated.len())];
        if let Some(scenario) = campaign
            .track_mut(contract_id, track_index)
            .and_then(|t| t.scenario_at_mut(coords))
        {
            scenario.required_scenario = true;
            scenario.set_attached_units_modifier(command_rights);
            report.required = Some((coords, scenario_id));
        }
    }

    if !report.generated.is_empty() || !report.reinforced.is_empty() {
        tracing::info!(
            "{contract_id} track {track_index}: {} new scenario(s), {} reinforcement(s)",
            report.generated.len(),
            report.reinforced.len()
        );
    }
    report
}

/// Grow an existing scenario by one lance and, when a compatible force was
/// found, add it as a primary force. Forces joining an already committed
/// scenario are committed with it; forces joining an unresolved one stay
/// free until the player commits.
fn reinforce_scenario(
    campaign: &mut Campaign,
    contract_id: ContractId,
    track_index: usize,
    coords: Coords,
    extra: Option<ForceId>,
) {
    let Some(track) = campaign.track_mut(contract_id, track_index) else {
        return;
    };
    let Some(scenario) = track.scenario_at_mut(coords) else {
        return;
    };
    scenario.increment_required_player_lances();
    let Some(force) = extra else {
        return;
    };
    scenario.add_primary_force(force);
    if !scenario.current_state.has_committed_forces() {
        tracing::debug!("{force} joins unresolved scenario at {coords}");
        return;
    }
    let scenario_id = scenario.id;
    track.assign_force(force, coords);
    if let Some(scenario_id) = scenario_id {
        campaign.attach_force(force, scenario_id);
    }
    tracing::debug!("{force} reinforces scenario at {coords}");
}

/// Hand a new scenario to the tactical subsystem, then commit or release its forces.
fn finalize_generated(
    campaign: &mut Campaign,
    contract_id: ContractId,
    track_index: usize,
    coords: Coords,
    command_rights: CommandRights,
    tactical: &mut dyn TacticalSubsystem,
) {
    let Some(contract) = campaign.contract(contract_id) else {
        return;
    };
    let Some(track) = campaign.track(contract_id, track_index) else {
        return;
    };
    let Some(scenario) = track.scenario_at(coords) else {
        return;
    };
    let descriptor = ScenarioDescriptor::new(scenario, contract_id, &track.display_name, coords);
    tactical.finalize_scenario(&descriptor, contract);
    let forces: Vec<ForceId> = scenario.primary_force_ids.iter().copied().collect();
    let scenario_id = scenario.id;

    let auto_commit = command_rights.auto_commits_forces();
    let Some(track) = campaign.track_mut(contract_id, track_index) else {
        return;
    };
    let Some(scenario) = track.scenario_at_mut(coords) else {
        return;
    };
    if auto_commit {
        scenario.current_state = ScenarioState::PrimaryForcesCommitted;
        for &force in &forces {
            track.assign_force(force, coords);
        }
        if let Some(scenario_id) = scenario_id {
            for &force in &forces {
                campaign.attach_force(force, scenario_id);
            }
        }
    } else {
        scenario.current_state = ScenarioState::Unresolved;
        for &force in &forces {
            campaign.detach_force(force);
        }
    }
}
