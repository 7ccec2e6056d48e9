use crate::fragment::Fragment;
use crate::observer::Observer;
use ahash::AHashSet as HashSet;
use slotmap::{DefaultKey, SlotMap};

/// Backtracking state for one top-level search invocation.
///
/// Allocated fresh per call so repeated searches never see stale
/// state. `visited` mirrors `chain` for O(1) membership checks while
/// `chain` preserves path order; `best` is the longest chain seen
/// across all start candidates.
struct SearchState {
    visited: HashSet<DefaultKey>,
    chain: Vec<DefaultKey>,
    best: Vec<DefaultKey>,
}

impl SearchState {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            chain: Vec::new(),
            best: Vec::new(),
        }
    }
}

/// Selects the fragments a chain could begin with.
///
/// A fragment with an empty `match_head` has no possible predecessor.
/// If none exists (e.g. a cycle spans every node) all candidates are
/// treated as starts, so the search always has an entry point.
pub(crate) fn start_candidates(
    fragments: &SlotMap<DefaultKey, Fragment>,
    candidates: &[DefaultKey],
    observer: &mut dyn Observer,
) -> Vec<DefaultKey> {
    let starts: Vec<DefaultKey> = candidates
        .iter()
        .copied()
        .filter(|&key| fragments[key].match_head.is_empty())
        .collect();

    if starts.is_empty() && !candidates.is_empty() {
        observer.no_start_candidate(candidates.len());
        return candidates.to_vec();
    }

    observer.start_candidates(starts.len());
    starts
}

/// Finds one longest simple path through the overlap graph.
///
/// Exhaustive depth-first backtracking from every start candidate.
/// The best chain is replaced only when a strictly longer one is
/// found, so equal-length ties keep the first chain discovered;
/// adjacency lists and the candidate list preserve insertion order,
/// which makes that tie-break deterministic. Worst-case exponential
/// on densely connected inputs, an accepted cost at the target sizes.
pub(crate) fn find_longest_chain(
    fragments: &SlotMap<DefaultKey, Fragment>,
    candidates: &[DefaultKey],
    observer: &mut dyn Observer,
) -> Vec<DefaultKey> {
    let starts = start_candidates(fragments, candidates, observer);
    let mut state = SearchState::new();

    for &start in &starts {
        explore(fragments, start, &mut state);
        observer.start_exhausted(fragments[start].value());
    }

    state.best
}

/// One step of the backtracking traversal.
///
/// Pushes the fragment onto the path, recurses into every unvisited
/// successor, then restores the state for sibling branches.
fn explore(
    fragments: &SlotMap<DefaultKey, Fragment>,
    key: DefaultKey,
    state: &mut SearchState,
) {
    state.visited.insert(key);
    state.chain.push(key);

    if state.chain.len() > state.best.len() {
        state.best = state.chain.clone();
    }

    for &next in &fragments[key].match_tail {
        if !state.visited.contains(&next) {
            explore(fragments, next, state);
        }
    }

    state.visited.remove(&key);
    state.chain.pop();
}
