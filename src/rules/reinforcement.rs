use crate::id::ForceId;
use crate::model::{Campaign, LanceRole, TrackState};

/// How a force may join an ongoing scenario on a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReinforcementEligibility {
    None,
    /// Reserved for pooled-reinforcement tracks; never produced yet.
    ChainedScenario,
    SupportPoint,
    FightLance,
}

/// Decide how `force` could reinforce a scenario on `track`.
///
/// A fight lance already positioned on this track reinforces for free; a
/// force positioned on any other active track cannot reinforce at all;
/// anyone else pays a support point.
///
/// `track` is compared by identity against the campaign's tracks, so it must
/// be borrowed from `campaign`.
pub fn reinforcement_type(
    campaign: &Campaign,
    force: ForceId,
    track: &TrackState,
) -> ReinforcementEligibility {
    let is_fight_lance = campaign
        .lance(force)
        .is_some_and(|lance| lance.role == LanceRole::Fight);
    if is_fight_lance && track.is_force_assigned(force) {
        return ReinforcementEligibility::FightLance;
    }

    let committed_elsewhere = campaign
        .active_tracks()
        .any(|(_, other)| !std::ptr::eq(other, track) && other.is_force_assigned(force));
    if committed_elsewhere {
        return ReinforcementEligibility::None;
    }

    ReinforcementEligibility::SupportPoint
}
