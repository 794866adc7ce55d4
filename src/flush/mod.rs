mod jsonl;
mod snapshot;

pub use jsonl::flush_to_jsonl;
pub use snapshot::{SnapshotError, from_json, load_snapshot, save_snapshot, to_json};
