//! Which player forces can be handed a scenario, and which battle domains
//! they can fight in.

use std::collections::BTreeSet;

use rand::{Rng, RngCore};

use crate::id::{ForceId, UnitId};
use crate::model::{Campaign, Force, MapLocation, RequestedUnitType, UnitType};

/// The three domains forces are sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ForcePool {
    Ground,
    LowAtmosphere,
    Space,
}

impl ForcePool {
    pub const ALL: [ForcePool; 3] = [ForcePool::Ground, ForcePool::LowAtmosphere, ForcePool::Space];

    /// Pools an extra force may be drawn from to reinforce a scenario on the
    /// given map. Aerospace fighters (space pool) are always welcome; ground
    /// forces only on ground maps; conventional fighters only in atmosphere.
    pub fn eligible_for(location: MapLocation) -> Vec<ForcePool> {
        let mut pools = vec![ForcePool::Space];
        match location {
            MapLocation::LowAtmosphere => pools.push(ForcePool::LowAtmosphere),
            MapLocation::AllGroundTerrain | MapLocation::SpecificGroundTerrain => {
                pools.push(ForcePool::Ground)
            }
            MapLocation::Space => {}
        }
        pools
    }
}

/// Forces sorted by the domains they can be primary in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForcePools {
    pub ground: Vec<ForceId>,
    pub low_atmosphere: Vec<ForceId>,
    pub space: Vec<ForceId>,
}

impl ForcePools {
    pub fn get(&self, pool: ForcePool) -> &Vec<ForceId> {
        match pool {
            ForcePool::Ground => &self.ground,
            ForcePool::LowAtmosphere => &self.low_atmosphere,
            ForcePool::Space => &self.space,
        }
    }

    pub fn get_mut(&mut self, pool: ForcePool) -> &mut Vec<ForceId> {
        match pool {
            ForcePool::Ground => &mut self.ground,
            ForcePool::LowAtmosphere => &mut self.low_atmosphere,
            ForcePool::Space => &mut self.space,
        }
    }

    pub fn remove(&mut self, force: ForceId) {
        for pool in ForcePool::ALL {
            self.get_mut(pool).retain(|f| *f != force);
        }
    }

    pub fn contains(&self, pool: ForcePool, force: ForceId) -> bool {
        self.get(pool).contains(&force)
    }
}

/// Pools a force of the given primary type belongs to. Aerospace fighters
/// sit in both space and low atmosphere.
pub fn pools_for_unit_type(unit_type: UnitType) -> &'static [ForcePool] {
    match unit_type {
        UnitType::BattleArmor
        | UnitType::Infantry
        | UnitType::Mek
        | UnitType::Tank
        | UnitType::ProtoMek
        | UnitType::Vtol => &[ForcePool::Ground],
        UnitType::AerospaceFighter => &[ForcePool::Space, ForcePool::LowAtmosphere],
        UnitType::ConventionalFighter => &[ForcePool::LowAtmosphere],
        UnitType::GunEmplacement | UnitType::Dropship | UnitType::Warship => &[],
    }
}

/// Sort forces into domain pools by primary unit type, keeping input order
/// within each pool. Forces that no longer exist or have no units are dropped.
pub fn sort_forces_by_map_type(forces: &[ForceId], campaign: &Campaign) -> ForcePools {
    let mut pools = ForcePools::default();
    for &force in forces {
        let Some(unit_type) = campaign.primary_unit_type(force) else {
            continue;
        };
        for &pool in pools_for_unit_type(unit_type) {
            pools.get_mut(pool).push(force);
        }
    }
    pools
}

/// Forces already holding a coordinate on a track of an active contract.
fn forces_in_tracks(campaign: &Campaign) -> BTreeSet<ForceId> {
    campaign
        .active_tracks()
        .flat_map(|(_, track)| track.assigned_force_coords.keys().copied())
        .collect()
}

fn is_free(force: &Force, in_tracks: &BTreeSet<ForceId>) -> bool {
    !force.deployed && force.scenario.is_none() && !in_tracks.contains(&force.id)
}

/// Lances that can be handed a scenario: not deployed, not attached to a
/// scenario, not assigned on any active track. Lance entries whose force is
/// gone are skipped.
pub fn available_force_ids(campaign: &Campaign) -> Vec<ForceId> {
    let in_tracks = forces_in_tracks(campaign);
    campaign
        .lances()
        .filter_map(|lance| campaign.force(lance.force))
        .filter(|force| is_free(force, &in_tracks))
        .map(|force| force.id)
        .collect()
}

/// Like [`available_force_ids`], restricted to non-empty forces whose
/// composition satisfies `requested`.
pub fn available_force_ids_of_type(
    campaign: &Campaign,
    requested: RequestedUnitType,
) -> Vec<ForceId> {
    let in_tracks = forces_in_tracks(campaign);
    campaign
        .lances()
        .filter_map(|lance| campaign.force(lance.force))
        .filter(|force| {
            is_free(force, &in_tracks)
                && !force.is_empty()
                && force_composition_matches(campaign, force, requested)
        })
        .map(|force| force.id)
        .collect()
}

pub fn force_composition_matches(
    campaign: &Campaign,
    force: &Force,
    requested: RequestedUnitType,
) -> bool {
    force
        .primary_unit_type(&campaign.units)
        .is_some_and(|primary| requested.matches(primary))
}

/// Units that can hold the line for defend-role lances: infantry, battle
/// armor and gun emplacements that are not committed to a scenario and whose
/// force is not already positioned on an active track.
pub fn eligible_defensive_units(campaign: &Campaign) -> Vec<UnitId> {
    let in_tracks = forces_in_tracks(campaign);
    campaign
        .units
        .values()
        .filter(|unit| {
            matches!(
                unit.unit_type,
                UnitType::Infantry | UnitType::BattleArmor | UnitType::GunEmplacement
            )
        })
        .filter(|unit| unit.scenario.is_none())
        .filter(|unit| unit.force.is_none_or(|f| !in_tracks.contains(&f)))
        .map(|unit| unit.id)
        .collect()
}

/// Forces still free to be picked during one generation pass.
///
/// Captured once per track pass and mutated in place: every pick removes the
/// force from the list and from every pool, so no force is drawn twice and
/// the order of draws is reproducible under a fixed seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySnapshot {
    available: Vec<ForceId>,
    pools: ForcePools,
}

impl AvailabilitySnapshot {
    pub fn capture(campaign: &Campaign) -> Self {
        let available = available_force_ids(campaign);
        let pools = sort_forces_by_map_type(&available, campaign);
        Self { available, pools }
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn available(&self) -> &[ForceId] {
        &self.available
    }

    pub fn pools(&self) -> &ForcePools {
        &self.pools
    }

    fn remove_everywhere(&mut self, force: ForceId) {
        self.available.retain(|f| *f != force);
        self.pools.remove(force);
    }

    /// Draw one force uniformly from everything still available.
    pub fn take_random(&mut self, rng: &mut dyn RngCore) -> Option<ForceId> {
        if self.available.is_empty() {
            return None;
        }
        let force = self.available[rng.random_range(0..self.available.len())];
        self.remove_everywhere(force);
        Some(force)
    }

    /// Draw one force uniformly from a single domain pool.
    pub fn take_from_pool(&mut self, pool: ForcePool, rng: &mut dyn RngCore) -> Option<ForceId> {
        let candidates = self.pools.get(pool);
        if candidates.is_empty() {
            return None;
        }
        let force = candidates[rng.random_range(0..candidates.len())];
        self.remove_everywhere(force);
        Some(force)
    }

    /// Pick a domain uniformly among those eligible for `location`, then a
    /// force from that domain. Returns `None` when the chosen pool is empty.
    pub fn take_reinforcement(
        &mut self,
        location: MapLocation,
        rng: &mut dyn RngCore,
    ) -> Option<ForceId> {
        let eligible = ForcePool::eligible_for(location);
        let pool = eligible[rng.random_range(0..eligible.len())];
        let force = self.take_from_pool(pool, rng);
        if force.is_none() {
            tracing::debug!("no {pool:?} force left to reinforce a {location} scenario");
        }
        force
    }
}
