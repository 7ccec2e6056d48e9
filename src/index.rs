use crate::fragment::Fragment;
use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SlotMap};

/// Ephemeral prefix/suffix lookup tables over a fragment arena.
///
/// Rebuilt from scratch whenever relations are (re)derived; never part
/// of persisted state. Buckets preserve candidate insertion order so
/// relation population, and therefore search order, is deterministic.
pub(crate) struct OverlapIndex {
    /// Head key -> fragments sharing that prefix.
    pub(crate) by_head: HashMap<String, Vec<DefaultKey>>,

    /// Tail key -> fragments sharing that suffix.
    pub(crate) by_tail: HashMap<String, Vec<DefaultKey>>,
}

impl OverlapIndex {
    /// Builds both tables in one pass over the candidate list. O(n).
    pub(crate) fn build(
        fragments: &SlotMap<DefaultKey, Fragment>,
        candidates: &[DefaultKey],
    ) -> Self {
        let mut by_head: HashMap<String, Vec<DefaultKey>> = HashMap::new();
        let mut by_tail: HashMap<String, Vec<DefaultKey>> = HashMap::new();

        for &key in candidates {
            let frag = &fragments[key];
            by_head.entry(frag.head.clone()).or_default().push(key);
            by_tail.entry(frag.tail.clone()).or_default().push(key);
        }

        Self { by_head, by_tail }
    }
}

/// Clears and repopulates every candidate's `match_head`/`match_tail`.
///
/// A fragment whose head appears in the tail table gains each bucket
/// entry as a predecessor candidate; symmetrically for its tail in the
/// head table. A fragment never adds itself, even when its own keys
/// land in the looked-up bucket. O(n·k) for average bucket size k.
pub(crate) fn fill_relations(
    fragments: &mut SlotMap<DefaultKey, Fragment>,
    candidates: &[DefaultKey],
) {
    let index = OverlapIndex::build(fragments, candidates);

    for &key in candidates {
        fragments[key].clear_relations();

        if let Some(bucket) = index.by_tail.get(&fragments[key].head) {
            let preceding: Vec<DefaultKey> =
                bucket.iter().copied().filter(|&m| m != key).collect();
            fragments[key].match_head = preceding;
        }

        if let Some(bucket) = index.by_head.get(&fragments[key].tail) {
            let following: Vec<DefaultKey> =
                bucket.iter().copied().filter(|&m| m != key).collect();
            fragments[key].match_tail = following;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(values: &[&str]) -> (SlotMap<DefaultKey, Fragment>, Vec<DefaultKey>) {
        let mut fragments = SlotMap::new();
        let candidates = values
            .iter()
            .map(|v| fragments.insert(Fragment::new(v.to_string())))
            .collect();
        (fragments, candidates)
    }

    #[test]
    fn test_index_bucket_sizes_by_head() {
        let (fragments, candidates) = arena(&["942517", "175676", "498294", "178894"]);
        let index = OverlapIndex::build(&fragments, &candidates);

        assert_eq!(index.by_head.len(), 3);
        assert_eq!(index.by_head["94"].len(), 1);
        assert_eq!(index.by_head["17"].len(), 2);
        assert_eq!(index.by_head["49"].len(), 1);
    }

    #[test]
    fn test_index_bucket_sizes_by_tail() {
        let (fragments, candidates) = arena(&["942517", "175676", "498294", "178894"]);
        let index = OverlapIndex::build(&fragments, &candidates);

        assert_eq!(index.by_tail.len(), 3);
        assert_eq!(index.by_tail["17"].len(), 1);
        assert_eq!(index.by_tail["76"].len(), 1);
        assert_eq!(index.by_tail["94"].len(), 2);
    }

    #[test]
    fn test_index_bucket_members() {
        let (fragments, candidates) = arena(&["942517", "175676"]);
        let index = OverlapIndex::build(&fragments, &candidates);

        assert_eq!(fragments[index.by_head["94"][0]].value(), "942517");
        assert_eq!(fragments[index.by_head["17"][0]].value(), "175676");
    }

    #[test]
    fn test_index_empty_arena() {
        let (fragments, candidates) = arena(&[]);
        let index = OverlapIndex::build(&fragments, &candidates);

        assert!(index.by_head.is_empty());
        assert!(index.by_tail.is_empty());
    }

    #[test]
    fn test_relations_directional() {
        // "942517" can be followed by both fragments starting "17"
        let (mut fragments, candidates) = arena(&["942517", "175676", "178894"]);
        fill_relations(&mut fragments, &candidates);

        let first = &fragments[candidates[0]];
        assert_eq!(first.match_tail(), &[candidates[1], candidates[2]]);
        assert!(first.match_head().is_empty());

        let second = &fragments[candidates[1]];
        assert_eq!(second.match_head(), &[candidates[0]]);
        assert!(second.match_tail().is_empty());
    }

    #[test]
    fn test_no_self_loop() {
        // head == tail == "aa": the fragment's own keys hit its own
        // buckets but it must never relate to itself
        let (mut fragments, candidates) = arena(&["aaaa"]);
        fill_relations(&mut fragments, &candidates);

        let frag = &fragments[candidates[0]];
        assert!(frag.match_head().is_empty());
        assert!(frag.match_tail().is_empty());
    }

    #[test]
    fn test_self_excluded_but_twin_kept() {
        let (mut fragments, candidates) = arena(&["aaaa", "aabb"]);
        fill_relations(&mut fragments, &candidates);

        // "aaaa".tail == "aa" matches "aabb".head and its own head;
        // only the twin survives the self-exclusion
        assert_eq!(fragments[candidates[0]].match_tail(), &[candidates[1]]);
        assert_eq!(fragments[candidates[1]].match_head(), &[candidates[0]]);
    }

    #[test]
    fn test_refill_clears_stale_relations() {
        let (mut fragments, candidates) = arena(&["942517", "175676"]);
        fill_relations(&mut fragments, &candidates);
        assert_eq!(fragments[candidates[0]].match_tail().len(), 1);

        // Dropping the successor from the candidate list and
        // rebuilding must not leave the old edge behind
        fill_relations(&mut fragments, &candidates[..1]);
        assert!(fragments[candidates[0]].match_tail().is_empty());
    }
}
