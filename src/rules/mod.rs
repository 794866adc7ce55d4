//! Stateless track rules. Everything here operates on state passed in and
//! keeps nothing between calls.

pub mod forces;
pub mod generation;
pub mod init;
pub mod nag;
pub mod reinforcement;

use rand::RngCore;

use crate::id::ContractId;
use crate::model::Campaign;
use crate::tactical::TacticalSubsystem;

pub use forces::{
    AvailabilitySnapshot, ForcePool, ForcePools, available_force_ids, available_force_ids_of_type,
    eligible_defensive_units, force_composition_matches, sort_forces_by_map_type,
};
pub use generation::{GenerationReport, generate_scenarios_for_track, roll_schedule};
pub use init::{initialize_campaign_state, initialize_contract, initialize_track_state};
pub use nag::{nag_insufficient_track_forces, nag_unresolved_contacts};
pub use reinforcement::{ReinforcementEligibility, reinforcement_type};

/// Run the weekly generation pass over every track of every active contract.
///
/// Tracks are processed one at a time in contract then track order, and each
/// pass sees the commitments made by the passes before it.
pub fn on_new_week(
    campaign: &mut Campaign,
    tactical: &mut dyn TacticalSubsystem,
    rng: &mut dyn RngCore,
) -> Vec<GenerationReport> {
    let work: Vec<(ContractId, usize)> = campaign
        .active_contracts()
        .filter_map(|c| c.stratcon.as_ref().map(|s| (c.id, s.tracks.len())))
        .collect();

    let mut reports = Vec::new();
    for (contract, num_tracks) in work {
        for track in 0..num_tracks {
            reports.push(generate_scenarios_for_track(
                campaign, contract, track, tactical, rng,
            ));
        }
    }
    reports
}
