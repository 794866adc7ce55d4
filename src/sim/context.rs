use rand::RngCore;

use super::event::StratconEvent;
use crate::model::Campaign;
use crate::tactical::TacticalSubsystem;

/// Context passed to each system on every tick.
pub struct TickContext<'a> {
    pub campaign: &'a mut Campaign,
    pub rng: &'a mut dyn RngCore,
    pub tactical: &'a mut dyn TacticalSubsystem,
    /// Systems push what happened here.
    pub events: &'a mut Vec<StratconEvent>,
}
