use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{ForceId, ScenarioId, UnitId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum UnitType {
    Mek,
    Tank,
    Infantry,
    BattleArmor,
    ProtoMek,
    Vtol,
    AerospaceFighter,
    ConventionalFighter,
    GunEmplacement,
    Dropship,
    Warship,
}

string_enum!(UnitType {
    Mek => "mek",
    Tank => "tank",
    Infantry => "infantry",
    BattleArmor => "battle_armor",
    ProtoMek => "protomek",
    Vtol => "vtol",
    AerospaceFighter => "aerospace_fighter",
    ConventionalFighter => "conventional_fighter",
    GunEmplacement => "gun_emplacement",
    Dropship => "dropship",
    Warship => "warship",
});

/// The unit type a scenario force template asks for.
///
/// The two mix variants are aggregates: `AtbMix` is the usual ground mix that
/// fighters may sub into, `AtbAeroMix` is any fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestedUnitType {
    Exact(UnitType),
    AtbMix,
    AtbAeroMix,
}

impl RequestedUnitType {
    pub fn matches(self, primary: UnitType) -> bool {
        match self {
            RequestedUnitType::AtbMix => matches!(
                primary,
                UnitType::Mek
                    | UnitType::Tank
                    | UnitType::Infantry
                    | UnitType::BattleArmor
                    | UnitType::ProtoMek
                    | UnitType::Vtol
                    | UnitType::AerospaceFighter
                    | UnitType::ConventionalFighter
            ),
            RequestedUnitType::AtbAeroMix => matches!(
                primary,
                UnitType::AerospaceFighter | UnitType::ConventionalFighter
            ),
            RequestedUnitType::Exact(unit_type) => unit_type == primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LanceRole {
    Fight,
    Defend,
    Scout,
    Training,
}

string_enum!(LanceRole {
    Fight => "fight",
    Defend => "defend",
    Scout => "scout",
    Training => "training",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub unit_type: UnitType,
    pub force: Option<ForceId>,
    /// Scenario this unit is individually committed to.
    pub scenario: Option<ScenarioId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub id: ForceId,
    pub name: String,
    pub units: Vec<UnitId>,
    pub deployed: bool,
    /// Scenario the whole force is attached to, if any.
    pub scenario: Option<ScenarioId>,
}

impl Force {
    pub fn new(id: ForceId, name: String) -> Self {
        Self {
            id,
            name,
            units: Vec::new(),
            deployed: false,
            scenario: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The most common unit type among this force's units.
    ///
    /// Ties go to the type declared first in [`UnitType`]. Unit IDs that no
    /// longer resolve are ignored; a force with no resolvable units has none.
    pub fn primary_unit_type(&self, units: &BTreeMap<UnitId, Unit>) -> Option<UnitType> {
        let mut counts: BTreeMap<UnitType, usize> = BTreeMap::new();
        for unit in self.units.iter().filter_map(|id| units.get(id)) {
            *counts.entry(unit.unit_type).or_default() += 1;
        }

        let mut best: Option<(UnitType, usize)> = None;
        for (unit_type, count) in counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((unit_type, count));
            }
        }
        best.map(|(unit_type, _)| unit_type)
    }
}

/// A force registered as a lance, with its assigned role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lance {
    pub force: ForceId,
    pub role: LanceRole,
}
