use super::context::TickContext;

/// How often a campaign system runs.
///
/// Ordered coarsest-to-finest so `systems.iter().map(|s| s.frequency()).max()`
/// yields the finest granularity needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TickFrequency {
    Weekly, // Mondays
    Daily,
}

/// A pluggable system driven by the campaign calendar.
///
/// Object-safe so systems can be stored as `Box<dyn CampaignSystem>`.
pub trait CampaignSystem {
    fn name(&self) -> &str;
    fn frequency(&self) -> TickFrequency;
    fn tick(&mut self, ctx: &mut TickContext);
}
