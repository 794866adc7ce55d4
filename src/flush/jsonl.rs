use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::id::ContractId;
use crate::model::{Campaign, Coords, Facility, ScenarioDescriptor};

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[derive(Serialize)]
struct TrackRow<'a> {
    contract: ContractId,
    track: usize,
    display_name: &'a str,
    width: u32,
    height: u32,
    required_lance_count: u32,
    assigned_lance_count: usize,
    scenario_count: usize,
}

#[derive(Serialize)]
struct FacilityRow<'a> {
    contract: ContractId,
    track: usize,
    coords: Coords,
    #[serde(flatten)]
    facility: &'a Facility,
}

/// Flush every active track to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 3 files:
/// - `tracks.jsonl`: one line per track with its size and staffing
/// - `scenarios.jsonl`: one scenario descriptor per line
/// - `facilities.jsonl`: one facility per line, tagged with its cell
pub fn flush_to_jsonl(campaign: &Campaign, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    let tracks = || {
        campaign.active_contracts().flat_map(|contract| {
            contract
                .stratcon
                .iter()
                .flat_map(|state| state.tracks.iter().enumerate())
                .map(move |(index, track)| (contract.id, index, track))
        })
    };

    write_jsonl(
        &output_dir.join("tracks.jsonl"),
        tracks().map(|(contract, track, state)| TrackRow {
            contract,
            track,
            display_name: &state.display_name,
            width: state.width,
            height: state.height,
            required_lance_count: state.required_lance_count,
            assigned_lance_count: state.assigned_force_count(),
            scenario_count: state.scenarios.len(),
        }),
    )?;
    write_jsonl(
        &output_dir.join("scenarios.jsonl"),
        tracks().flat_map(|(contract, _, state)| {
            state.scenarios.iter().map(move |(&coords, scenario)| {
                ScenarioDescriptor::new(scenario, contract, &state.display_name, coords)
            })
        }),
    )?;

    let captured = tracks()
        .flat_map(|(_, _, state)| state.facilities.values())
        .filter(|f| f.is_player_owned())
        .count();
    tracing::debug!("flushing facilities ({captured} player-held)");
    write_jsonl(
        &output_dir.join("facilities.jsonl"),
        tracks().flat_map(|(contract, track, state)| {
            state
                .facilities
                .iter()
                .map(move |(&coords, facility)| FacilityRow {
                    contract,
                    track,
                    coords,
                    facility,
                })
        }),
    )?;

    Ok(())
}
