pub mod config;
pub mod flush;
pub mod id;
pub mod model;
pub mod rules;
pub mod sim;
pub mod tactical;

#[cfg(test)]
mod testutil;

pub use config::StratconConfig;
pub use id::{ContractId, ForceId, IdGenerator, ScenarioId, UnitId};
pub use model::{
    Campaign, CampaignState, CommandRights, Contract, Coords, Facility, FacilityType, Force,
    ForceAlignment, ScenarioState, StratconScenario, TrackState, UnitType,
};
pub use rules::on_new_week;
pub use tactical::{TacticalSubsystem, TemplateLibrary};
