use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::{ContractId, ForceId, ScenarioId};
use crate::model::Coords;

/// Something a campaign system did on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StratconEvent {
    pub date: NaiveDate,
    pub kind: StratconEventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StratconEventKind {
    /// A new scenario spawned on a track.
    ScenarioGenerated {
        contract: ContractId,
        track: usize,
        coords: Coords,
        scenario: ScenarioId,
    },

    /// A scenario grew by one lance; `force` is the extra force, if one was free.
    ScenarioReinforced {
        contract: ContractId,
        track: usize,
        coords: Coords,
        force: Option<ForceId>,
    },

    /// Liaison command made a scenario mandatory.
    ScenarioRequired {
        contract: ContractId,
        track: usize,
        scenario: ScenarioId,
    },

    /// Operator warning; see the nag queries.
    Nag { message: String },
}
