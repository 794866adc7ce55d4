//! Campaign systems that drive the track rules from the calendar.

use super::context::TickContext;
use super::event::{StratconEvent, StratconEventKind};
use super::system::{CampaignSystem, TickFrequency};
use crate::rules::{
    GenerationReport, nag_insufficient_track_forces, nag_unresolved_contacts, on_new_week,
};

/// Runs the weekly generation pass on Mondays.
#[derive(Debug, Default)]
pub struct StratconSystem;

impl CampaignSystem for StratconSystem {
    fn name(&self) -> &str {
        "stratcon"
    }

    fn frequency(&self) -> TickFrequency {
        TickFrequency::Weekly
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let date = ctx.campaign.date();
        let reports = on_new_week(ctx.campaign, ctx.tactical, ctx.rng);
        for report in &reports {
            push_report_events(report, date, ctx.events);
        }
    }
}

fn push_report_events(
    report: &GenerationReport,
    date: chrono::NaiveDate,
    events: &mut Vec<StratconEvent>,
) {
    let Some(contract) = report.contract else {
        return;
    };
    let track = report.track;
    let mut push = |kind| events.push(StratconEvent { date, kind });

    for &(coords, scenario) in &report.generated {
        push(StratconEventKind::ScenarioGenerated {
            contract,
            track,
            coords,
            scenario,
        });
    }
    for &(coords, force) in &report.reinforced {
        push(StratconEventKind::ScenarioReinforced {
            contract,
            track,
            coords,
            force,
        });
    }
    if let Some((_, scenario)) = report.required {
        push(StratconEventKind::ScenarioRequired {
            contract,
            track,
            scenario,
        });
    }
}

/// Logs the daily operator warnings and records each as an event.
#[derive(Debug, Default)]
pub struct NagSystem;

impl CampaignSystem for NagSystem {
    fn name(&self) -> &str {
        "nag"
    }

    fn frequency(&self) -> TickFrequency {
        TickFrequency::Daily
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let date = ctx.campaign.date();
        let unresolved = nag_unresolved_contacts(ctx.campaign);
        let understaffed = nag_insufficient_track_forces(ctx.campaign);

        for line in unresolved.lines() {
            tracing::info!("unresolved contact due today: {line}");
            ctx.events.push(StratconEvent {
                date,
                kind: StratconEventKind::Nag {
                    message: line.to_string(),
                },
            });
        }
        for line in understaffed.lines() {
            tracing::info!("track short of lances: {line}");
            ctx.events.push(StratconEvent {
                date,
                kind: StratconEventKind::Nag {
                    message: line.to_string(),
                },
            });
        }
    }
}
