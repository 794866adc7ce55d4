mod context;
mod event;
mod runner;
mod stratcon;
mod system;

pub use context::TickContext;
pub use event::{StratconEvent, StratconEventKind};
pub use runner::{RunConfig, dispatch_systems, run, should_fire};
pub use stratcon::{NagSystem, StratconSystem};
pub use system::{CampaignSystem, TickFrequency};
