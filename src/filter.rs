use crate::fragment::Fragment;
use crate::observer::Observer;
use slotmap::{DefaultKey, SlotMap};

/// Drops candidates with no overlap relation in either direction.
///
/// Operates on a snapshot of the candidate list and returns a new
/// list; the arena itself is untouched, so filtered-out fragments stay
/// alive and any stale keys in relation lists remain valid. If
/// filtering would empty a non-empty list, the original snapshot is
/// returned instead and the recovery is reported to the observer.
///
/// Idempotent: filtering an already-filtered list returns it as-is.
pub(crate) fn filter_unconnected(
    fragments: &SlotMap<DefaultKey, Fragment>,
    candidates: &[DefaultKey],
    observer: &mut dyn Observer,
) -> Vec<DefaultKey> {
    let kept: Vec<DefaultKey> = candidates
        .iter()
        .copied()
        .filter(|&key| !fragments[key].is_isolated())
        .collect();

    if kept.is_empty() && !candidates.is_empty() {
        observer.no_connected_fragments(candidates.len());
        return candidates.to_vec();
    }

    let removed = candidates.len() - kept.len();
    if removed > 0 {
        observer.fragments_removed(removed);
    }

    kept
}
