//! Contract start-up: splitting required lances into tracks, sizing the grids,
//! and scattering facilities.

use rand::{Rng, RngCore};

use crate::config::StratconConfig;
use crate::id::ContractId;
use crate::model::{
    Campaign, CampaignState, Contract, Coords, Facility, FacilityType, ForceAlignment, TrackState,
};

pub const ODD_TRACK_NAME: &str = "Odd Track";

/// Build the track layout for a contract using the default configuration.
pub fn initialize_campaign_state(contract: &Contract, rng: &mut dyn RngCore) -> CampaignState {
    initialize_campaign_state_with(contract, &StratconConfig::default(), rng)
}

/// A contract needing R lances gets ceil(R / per-track) tracks: one "odd"
/// track holding the remainder (if any) first, then full tracks.
pub fn initialize_campaign_state_with(
    contract: &Contract,
    config: &StratconConfig,
    rng: &mut dyn RngCore,
) -> CampaignState {
    let mut state = CampaignState::new(contract.id);
    let per_track = config.lances_per_track.max(1);

    let odd_lance_count = contract.required_lances % per_track;
    if odd_lance_count > 0 {
        state.add_track(initialize_track_state(
            ODD_TRACK_NAME.to_string(),
            odd_lance_count,
            config,
            rng,
        ));
    }

    for n in 0..contract.required_lances / per_track {
        state.add_track(initialize_track_state(
            format!("Track {n}"),
            per_track,
            config,
            rng,
        ));
    }

    tracing::debug!(
        "initialized {} track(s) for contract '{}' ({} lances)",
        state.tracks.len(),
        contract.name,
        contract.required_lances
    );
    state
}

/// Grid dimensions for a track with `num_lances` required lances.
/// Height is the floor of the square root so the rectangle is at least as
/// wide as it is tall.
pub fn track_dimensions(num_lances: u32, hexes_per_lance: u32) -> (u32, u32) {
    let num_hexes = num_lances * hexes_per_lance;
    let height = num_hexes.isqrt().max(1);
    let width = num_hexes / height;
    (width.max(1), height)
}

/// Size a track and place one opposing facility per required lance.
///
/// Facility coordinates are not checked for overlap; a later facility on the
/// same cell replaces the earlier one. Draw order per facility: type, x, y.
pub fn initialize_track_state(
    display_name: String,
    num_lances: u32,
    config: &StratconConfig,
    rng: &mut dyn RngCore,
) -> TrackState {
    let (width, height) = track_dimensions(num_lances, config.hexes_per_lance);
    let mut track = TrackState::new(display_name, num_lances, width, height);
    track.scenario_odds = config.scenario_odds.min(100);
    track.deployment_time = config.deployment_time;

    for _ in 0..num_lances {
        let facility_type = FacilityType::ALL[rng.random_range(0..FacilityType::ALL.len())];
        let coords = Coords::new(rng.random_range(0..width), rng.random_range(0..height));
        track.add_facility(
            coords,
            Facility::new(
                facility_type,
                ForceAlignment::Opposing,
                format!("Facility {coords}"),
            ),
        );
    }

    track
}

/// Attach a freshly initialized track layout to a registered contract,
/// replacing any existing one. Returns false if the contract is unknown.
pub fn initialize_contract(
    campaign: &mut Campaign,
    contract_id: ContractId,
    rng: &mut dyn RngCore,
) -> bool {
    let Some(contract) = campaign.contract_mut(contract_id) else {
        tracing::warn!("initialize_contract: {contract_id} not found");
        return false;
    };
    let state = initialize_campaign_state(contract, rng);
    contract.stratcon = Some(state);
    true
}
