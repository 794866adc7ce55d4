use serde::{Deserialize, Serialize};

/// Which side a track object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ForceAlignment {
    Player,
    Opposing,
}

string_enum!(ForceAlignment {
    Player => "player",
    Opposing => "opposing",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FacilityType {
    DataCenter,
    Fortification,
    Airbase,
    ArtilleryBase,
    FieldHospital,
    SupplyDepot,
    OrbitalDefense,
    MilitaryAcademy,
    CommandCenter,
}

string_enum!(FacilityType {
    DataCenter => "data_center",
    Fortification => "fortification",
    Airbase => "airbase",
    ArtilleryBase => "artillery_base",
    FieldHospital => "field_hospital",
    SupplyDepot => "supply_depot",
    OrbitalDefense => "orbital_defense",
    MilitaryAcademy => "military_academy",
    CommandCenter => "command_center",
});

/// A fixed installation occupying one cell of a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub owner: ForceAlignment,
    pub facility_type: FacilityType,
    pub display_name: String,
}

impl Facility {
    pub fn new(facility_type: FacilityType, owner: ForceAlignment, display_name: String) -> Self {
        Self {
            owner,
            facility_type,
            display_name,
        }
    }

    /// Hand the facility to `new_owner`. Returns true if ownership changed.
    pub fn capture(&mut self, new_owner: ForceAlignment) -> bool {
        if self.owner == new_owner {
            return false;
        }
        tracing::debug!(
            "facility '{}' captured: {} -> {}",
            self.display_name,
            self.owner,
            new_owner
        );
        self.owner = new_owner;
        true
    }

    pub fn is_player_owned(&self) -> bool {
        self.owner == ForceAlignment::Player
    }
}
