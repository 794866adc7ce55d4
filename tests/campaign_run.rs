mod common;

use common::*;
use stratcon::flush::{flush_to_jsonl, load_snapshot, save_snapshot};
use stratcon::model::*;
use stratcon::sim::{
    CampaignSystem, NagSystem, RunConfig, StratconEvent, StratconEventKind, StratconSystem, run,
};
use stratcon::TemplateLibrary;

fn run_weeks(campaign: &mut Campaign, weeks: u32, seed: u64) -> Vec<StratconEvent> {
    let mut systems: Vec<Box<dyn CampaignSystem>> =
        vec![Box::new(StratconSystem), Box::new(NagSystem)];
    let start = campaign.date();
    run(
        campaign,
        &mut systems,
        &mut TemplateLibrary::new(),
        RunConfig::new(start, weeks * 7, seed),
    )
}

#[test]
fn month_of_campaign_is_reproducible() {
    let build = || {
        let (mut campaign, _) = campaign_with_lances(6);
        add_contract_with_track(&mut campaign, CommandRights::House, 3, 30);
        add_contract_with_track(&mut campaign, CommandRights::Integrated, 2, 30);
        campaign
    };

    let mut a = build();
    let mut b = build();
    let events_a = run_weeks(&mut a, 4, 99);
    let events_b = run_weeks(&mut b, 4, 99);

    assert_eq!(events_a, events_b);
    assert_eq!(all_tracks(&a), all_tracks(&b));
}

#[test]
fn unresolved_contacts_nag_on_deployment_day() {
    let (mut campaign, _) = campaign_with_lances(6);
    add_contract_with_track(&mut campaign, CommandRights::House, 3, 0);

    let events = run_weeks(&mut campaign, 1, 5);

    let generated = events
        .iter()
        .filter(|e| matches!(e.kind, StratconEventKind::ScenarioGenerated { .. }))
        .count();
    assert!(generated > 0);

    let track = all_tracks(&campaign)[0];
    for scenario in track.scenarios.values() {
        let expected = format!("{}, {}", scenario.name, track.display_name);
        let nagged = events.iter().any(|e| {
            e.date == scenario.deployment_date
                && e.kind == StratconEventKind::Nag { message: expected.clone() }
        });
        assert!(nagged, "no nag for {expected} on {}", scenario.deployment_date);
    }
}

#[test]
fn snapshot_restores_the_campaign() {
    let (mut campaign, _) = campaign_with_lances(6);
    add_contract_with_track(&mut campaign, CommandRights::Integrated, 3, 0);
    run_weeks(&mut campaign, 2, 17);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("campaign.json");
    save_snapshot(&campaign, &path).unwrap();
    let mut restored = load_snapshot(&path).unwrap();

    assert_eq!(restored.date(), campaign.date());
    assert_eq!(restored.forces, campaign.forces);
    assert_eq!(all_tracks(&restored), all_tracks(&campaign));

    // Both copies continue identically from the saved point.
    let next_a = run_weeks(&mut campaign, 1, 18);
    let next_b = run_weeks(&mut restored, 1, 18);
    assert_eq!(next_a, next_b);
}

#[test]
fn flush_writes_tracks_scenarios_and_facilities() {
    let (mut campaign, _) = campaign_with_lances(6);
    let contract = add_contract_with_track(&mut campaign, CommandRights::House, 3, 0);
    campaign.track_mut(contract, 0).unwrap().add_facility(
        Coords::new(2, 3),
        Facility::new(FacilityType::SupplyDepot, ForceAlignment::Opposing, "Depot".to_string()),
    );
    run_weeks(&mut campaign, 1, 2);

    let dir = tempfile::tempdir().unwrap();
    flush_to_jsonl(&campaign, dir.path()).unwrap();

    let tracks = read_lines(&dir.path().join("tracks.jsonl"));
    let scenarios = read_lines(&dir.path().join("scenarios.jsonl"));
    let facilities = read_lines(&dir.path().join("facilities.jsonl"));

    let track = campaign.track(contract, 0).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(scenarios.len(), track.scenarios.len());
    assert_eq!(facilities.len(), 1);

    let row: serde_json::Value = serde_json::from_str(&tracks[0]).unwrap();
    assert_eq!(row["display_name"], "Track 1");
    assert_eq!(row["required_lance_count"], 3);

    for line in &scenarios {
        let descriptor: ScenarioDescriptor = serde_json::from_str(line).unwrap();
        assert_eq!(descriptor.contract, contract);
        assert!(track.scenario_at(descriptor.coords).is_some());
    }

    let facility: serde_json::Value = serde_json::from_str(&facilities[0]).unwrap();
    assert_eq!(facility["display_name"], "Depot");
    assert_eq!(facility["coords"]["x"], 2);
}

#[test]
fn inactive_contracts_are_left_alone() {
    let (mut campaign, _) = campaign_with_lances(4);
    let contract = add_contract_with_track(&mut campaign, CommandRights::Integrated, 3, 0);
    campaign.contract_mut(contract).unwrap().active = false;

    let events = run_weeks(&mut campaign, 2, 1);

    assert!(events.is_empty());
    assert!(campaign.track(contract, 0).unwrap().scenarios.is_empty());
}
