#[macro_use]
mod macros;

pub mod campaign;
pub mod campaign_state;
pub mod contract;
pub mod coords;
pub mod facility;
pub mod force;
pub mod scenario;
pub mod track;

pub use campaign::Campaign;
pub use campaign_state::{CampaignState, Currency, CurrencyError};
pub use contract::{CommandRights, Contract};
pub use coords::Coords;
pub use facility::{Facility, FacilityType, ForceAlignment};
pub use force::{Force, Lance, LanceRole, RequestedUnitType, Unit, UnitType};
pub use scenario::{
    AttachedUnitsModifier, MapLocation, ScenarioDescriptor, ScenarioSchedule, ScenarioState,
    ScenarioTemplate, StratconScenario,
};
pub use track::{TrackError, TrackState};
