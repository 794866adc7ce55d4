use std::path::PathBuf;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::context::TickContext;
use super::event::StratconEvent;
use super::system::{CampaignSystem, TickFrequency};
use crate::flush::flush_to_jsonl;
use crate::model::Campaign;
use crate::tactical::TacticalSubsystem;

/// Configuration for a calendar run.
pub struct RunConfig {
    pub start: NaiveDate,
    pub num_days: u32,
    pub seed: u64,
    /// If set, flush track state every N weeks.
    pub flush_interval: Option<u32>,
    /// Directory to write flush checkpoints into.
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(start: NaiveDate, num_days: u32, seed: u64) -> Self {
        Self {
            start,
            num_days,
            seed,
            flush_interval: None,
            output_dir: None,
        }
    }
}

const DAYS_PER_WEEK: u32 = 7;

/// Returns true if a system with the given frequency should fire on this date.
pub fn should_fire(freq: TickFrequency, date: NaiveDate) -> bool {
    match freq {
        TickFrequency::Daily => true,
        TickFrequency::Weekly => date.weekday() == Weekday::Mon,
    }
}

/// Set the campaign date and tick each system whose frequency matches, in
/// registration order. Returns what the systems reported.
pub fn dispatch_systems(
    campaign: &mut Campaign,
    systems: &mut [Box<dyn CampaignSystem>],
    tactical: &mut dyn TacticalSubsystem,
    rng: &mut dyn RngCore,
    date: NaiveDate,
) -> Vec<StratconEvent> {
    campaign.set_date(date);

    let mut events = Vec::new();
    for system in systems.iter_mut() {
        if should_fire(system.frequency(), date) {
            let mut ctx = TickContext {
                campaign: &mut *campaign,
                rng: &mut *rng,
                tactical: &mut *tactical,
                events: &mut events,
            };
            system.tick(&mut ctx);
        }
    }
    events
}

/// Walk the calendar one day at a time from `config.start`.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed and the
/// same starting campaign always produce the same scenarios.
pub fn run(
    campaign: &mut Campaign,
    systems: &mut [Box<dyn CampaignSystem>],
    tactical: &mut dyn TacticalSubsystem,
    config: RunConfig,
) -> Vec<StratconEvent> {
    let mut events = Vec::new();
    if systems.is_empty() || config.num_days == 0 {
        return events;
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    for offset in 0..config.num_days {
        let Some(date) = config.start.checked_add_days(Days::new(u64::from(offset))) else {
            tracing::warn!("calendar ended after {offset} day(s)");
            break;
        };
        events.extend(dispatch_systems(campaign, systems, tactical, &mut rng, date));

        // Flush checkpoint at configured interval
        if let (Some(interval), Some(dir)) = (config.flush_interval, &config.output_dir) {
            let is_last_day = offset == config.num_days - 1;
            let week = offset / DAYS_PER_WEEK + 1;
            let week_done = (offset + 1) % DAYS_PER_WEEK == 0;
            if is_last_day || (week_done && week % interval.max(1) == 0) {
                let checkpoint_dir = dir.join(format!("week_{week:04}"));
                if let Err(e) = flush_to_jsonl(campaign, &checkpoint_dir) {
                    tracing::warn!("failed to write checkpoint {}: {e}", checkpoint_dir.display());
                }
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::tactical::TemplateLibrary;
    use crate::testutil::{start_date, test_campaign};

    // -- Test helpers --

    struct CountingSystem {
        sys_name: String,
        freq: TickFrequency,
        count: Rc<Cell<u32>>,
    }

    impl CountingSystem {
        fn new(name: &str, freq: TickFrequency, count: Rc<Cell<u32>>) -> Self {
            Self {
                sys_name: name.to_string(),
                freq,
                count,
            }
        }
    }

    impl CampaignSystem for CountingSystem {
        fn name(&self) -> &str {
            &self.sys_name
        }
        fn frequency(&self) -> TickFrequency {
            self.freq
        }
        fn tick(&mut self, ctx: &mut TickContext) {
            assert!(should_fire(self.freq, ctx.campaign.date()));
            self.count.set(self.count.get() + 1);
        }
    }

    #[test]
    fn weekly_fires_on_mondays_only() {
        let monday = start_date();
        assert!(should_fire(TickFrequency::Weekly, monday));
        for offset in 1..7 {
            let day = monday.checked_add_days(Days::new(offset)).unwrap();
            assert!(!should_fire(TickFrequency::Weekly, day), "fired on {day}");
            assert!(should_fire(TickFrequency::Daily, day));
        }
    }

    #[test]
    fn empty_systems_noop() {
        let mut campaign = test_campaign();
        let original = campaign.date();
        let mut systems: Vec<Box<dyn CampaignSystem>> = vec![];
        let events = run(
            &mut campaign,
            &mut systems,
            &mut TemplateLibrary::new(),
            RunConfig::new(original, 30, 0),
        );
        assert!(events.is_empty());
        assert_eq!(campaign.date(), original);
    }

    #[test]
    fn four_weeks_tick_weekly_four_times() {
        let weekly = Rc::new(Cell::new(0));
        let daily = Rc::new(Cell::new(0));
        let mut systems: Vec<Box<dyn CampaignSystem>> = vec![
            Box::new(CountingSystem::new("weekly", TickFrequency::Weekly, weekly.clone())),
            Box::new(CountingSystem::new("daily", TickFrequency::Daily, daily.clone())),
        ];
        let mut campaign = test_campaign();
        run(
            &mut campaign,
            &mut systems,
            &mut TemplateLibrary::new(),
            RunConfig::new(start_date(), 28, 0),
        );
        assert_eq!(weekly.get(), 4);
        assert_eq!(daily.get(), 28);
    }

    #[test]
    fn checkpoints_every_other_week_and_at_the_end() {
        let count = Rc::new(Cell::new(0));
        let mut systems: Vec<Box<dyn CampaignSystem>> = vec![Box::new(CountingSystem::new(
            "weekly",
            TickFrequency::Weekly,
            count.clone(),
        ))];
        let dir = tempfile::tempdir().unwrap();
        let mut config = RunConfig::new(start_date(), 38, 0);
        config.flush_interval = Some(2);
        config.output_dir = Some(dir.path().to_path_buf());

        let mut campaign = test_campaign();
        run(&mut campaign, &mut systems, &mut TemplateLibrary::new(), config);

        let mut written: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        written.sort();
        assert_eq!(written, vec!["week_0002", "week_0004", "week_0006"]);
        assert!(dir.path().join("week_0006").join("tracks.jsonl").exists());
    }

    #[test]
    fn campaign_date_set_to_final_day() {
        let count = Rc::new(Cell::new(0));
        let mut systems: Vec<Box<dyn CampaignSystem>> = vec![Box::new(CountingSystem::new(
            "daily",
            TickFrequency::Daily,
            count.clone(),
        ))];
        let mut campaign = test_campaign();
        run(
            &mut campaign,
            &mut systems,
            &mut TemplateLibrary::new(),
            RunConfig::new(start_date(), 10, 0),
        );
        assert_eq!(
            campaign.date(),
            start_date().checked_add_days(Days::new(9)).unwrap()
        );
    }
}
