//! The seam to the tactical battle layer: picking a template for a new
//! scenario and handing finalized scenarios over for opfor generation.

use rand::{Rng, RngCore};

use crate::id::ScenarioId;
use crate::model::{Contract, MapLocation, ScenarioDescriptor, ScenarioTemplate, UnitType};

pub trait TacticalSubsystem {
    /// Choose a template for a scenario driven by a force of the given
    /// primary unit type (`None` for a force with no units).
    fn select_template(
        &mut self,
        primary_unit_type: Option<UnitType>,
        contract: &Contract,
        rng: &mut dyn RngCore,
    ) -> ScenarioTemplate;

    /// Populate the opposing force for a freshly generated scenario.
    fn finalize_scenario(&mut self, descriptor: &ScenarioDescriptor, contract: &Contract);
}

/// A template entry with its map location.
pub struct TemplateDef {
    pub name: &'static str,
    pub map_location: MapLocation,
}

const fn template(name: &'static str, map_location: MapLocation) -> TemplateDef {
    TemplateDef { name, map_location }
}

pub const GROUND_TEMPLATES: &[TemplateDef] = &[
    template("Skirmish", MapLocation::AllGroundTerrain),
    template("Recon Raid", MapLocation::AllGroundTerrain),
    template("Hold the Line", MapLocation::AllGroundTerrain),
    template("Breakthrough", MapLocation::AllGroundTerrain),
    template("Urban Assault", MapLocation::SpecificGroundTerrain),
    template("Convoy Ambush", MapLocation::SpecificGroundTerrain),
];

pub const LOW_ATMOSPHERE_TEMPLATES: &[TemplateDef] = &[
    template("Air Superiority", MapLocation::LowAtmosphere),
    template("Ground Strike", MapLocation::LowAtmosphere),
    template("Bomber Intercept", MapLocation::LowAtmosphere),
];

pub const SPACE_TEMPLATES: &[TemplateDef] = &[
    template("Orbital Intercept", MapLocation::Space),
    template("Jump Point Patrol", MapLocation::Space),
];

/// Table-driven stand-in for the tactical layer. Ground forces get ground
/// templates, conventional fighters atmospheric ones, and aerospace fighters
/// either atmospheric or space ones. Finalized scenarios are recorded.
#[derive(Debug, Default)]
pub struct TemplateLibrary {
    finalized: Vec<ScenarioDescriptor>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finalized(&self) -> &[ScenarioDescriptor] {
        &self.finalized
    }

    pub fn finalized_ids(&self) -> Vec<ScenarioId> {
        self.finalized.iter().filter_map(|d| d.scenario).collect()
    }

    fn candidates(primary_unit_type: Option<UnitType>) -> Vec<&'static TemplateDef> {
        let Some(unit_type) = primary_unit_type else {
            return GROUND_TEMPLATES.iter().collect();
        };
        match unit_type {
            UnitType::AerospaceFighter => LOW_ATMOSPHERE_TEMPLATES
                .iter()
                .chain(SPACE_TEMPLATES)
                .collect(),
            UnitType::ConventionalFighter => LOW_ATMOSPHERE_TEMPLATES.iter().collect(),
            UnitType::Dropship | UnitType::Warship => SPACE_TEMPLATES.iter().collect(),
            UnitType::Mek
            | UnitType::Tank
            | UnitType::Infantry
            | UnitType::BattleArmor
            | UnitType::ProtoMek
            | UnitType::Vtol
            | UnitType::GunEmplacement => GROUND_TEMPLATES.iter().collect(),
        }
    }
}

impl TacticalSubsystem for TemplateLibrary {
    fn select_template(
        &mut self,
        primary_unit_type: Option<UnitType>,
        _contract: &Contract,
        rng: &mut dyn RngCore,
    ) -> ScenarioTemplate {
        let candidates = Self::candidates(primary_unit_type);
        let def = candidates[rng.random_range(0..candidates.len())];
        ScenarioTemplate {
            name: def.name.to_string(),
            map_location: def.map_location,
        }
    }

    fn finalize_scenario(&mut self, descriptor: &ScenarioDescriptor, contract: &Contract) {
        tracing::debug!(
            "finalizing '{}' at {} on '{}' for contract '{}'",
            descriptor.name,
            descriptor.coords,
            descriptor.track,
            contract.name
        );
        self.finalized.push(descriptor.clone());
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::id::ContractId;
    use crate::model::CommandRights;

    fn contract() -> Contract {
        Contract::new(ContractId(1), "Raid".to_string(), 3, CommandRights::House)
    }

    #[test]
    fn ground_forces_get_ground_maps() {
        let mut library = TemplateLibrary::new();
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..30 {
            let t = library.select_template(Some(UnitType::Mek), &contract(), &mut rng);
            assert!(t.map_location.is_ground(), "{} is not a ground map", t.name);
        }
    }

    #[test]
    fn fighters_never_get_ground_maps() {
        let mut library = TemplateLibrary::new();
        let mut rng = SmallRng::seed_from_u64(8);
        for _ in 0..30 {
            let asf =
                library.select_template(Some(UnitType::AerospaceFighter), &contract(), &mut rng);
            assert!(!asf.map_location.is_ground());
            let conv =
                library.select_template(Some(UnitType::ConventionalFighter), &contract(), &mut rng);
            assert_eq!(conv.map_location, MapLocation::LowAtmosphere);
        }
    }

    #[test]
    fn forces_without_units_fall_back_to_ground() {
        let mut library = TemplateLibrary::new();
        let mut rng = SmallRng::seed_from_u64(15);
        let t = library.select_template(None, &contract(), &mut rng);
        assert!(t.map_location.is_ground());
    }
}
