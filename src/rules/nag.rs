//! Informational warnings for the campaign operator. Never blocking.

use std::fmt::Write;

use crate::model::{Campaign, ScenarioState};

/// One `"scenario name, track name"` line for every unresolved scenario on an
/// active track that has to be deployed to today.
pub fn nag_unresolved_contacts(campaign: &Campaign) -> String {
    let today = campaign.date();
    let mut out = String::new();
    for (_, track) in campaign.active_tracks() {
        for scenario in track.scenarios.values() {
            if scenario.current_state == ScenarioState::Unresolved
                && scenario.deployment_date == today
            {
                let _ = writeln!(out, "{}, {}", scenario.name, track.display_name);
            }
        }
    }
    out
}

/// On the first day of the week, one `"track name, x/y lances"` line per
/// active track with fewer forces assigned than it requires. Empty otherwise.
pub fn nag_insufficient_track_forces(campaign: &Campaign) -> String {
    if !campaign.is_first_day_of_week() {
        return String::new();
    }

    let mut out = String::new();
    for (_, track) in campaign.active_tracks() {
        let assigned = track.assigned_force_count();
        if assigned < track.required_lance_count as usize {
            let _ = writeln!(
                out,
                "{}, {}/{} lances",
                track.display_name, assigned, track.required_lance_count
            );
        }
    }
    out
}
