use crate::error::ChainError;
use crate::fragment::{Fragment, OVERLAP_LEN};
use slotmap::{DefaultKey, SlotMap};

/// Folds an ordered chain into one composite fragment.
///
/// The composite value is the first fragment's value followed by each
/// subsequent value with its first `OVERLAP_LEN` characters stripped,
/// since those characters already sit at the end of the accumulated
/// string. The composite keeps the first fragment's head and
/// `match_head` and takes the last fragment's tail and `match_tail`,
/// so it can still be extended forward. Source fragments are read
/// only; the arena is not modified.
///
/// An empty chain has no defined head or tail and fails with
/// [`ChainError::EmptyInput`].
pub(crate) fn merge_chain(
    fragments: &SlotMap<DefaultKey, Fragment>,
    chain: &[DefaultKey],
) -> Result<Fragment, ChainError> {
    let (&first, rest) = chain.split_first().ok_or(ChainError::EmptyInput)?;
    let last = rest.last().copied().unwrap_or(first);

    let mut value = fragments[first].value.clone();
    for &key in rest {
        value.extend(fragments[key].value.chars().skip(OVERLAP_LEN));
    }

    Ok(Fragment {
        value,
        head: fragments[first].head.clone(),
        tail: fragments[last].tail.clone(),
        match_head: fragments[first].match_head.clone(),
        match_tail: fragments[last].match_tail.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::fill_relations;

    fn connected_arena(
        values: &[&str],
    ) -> (SlotMap<DefaultKey, Fragment>, Vec<DefaultKey>) {
        let mut fragments = SlotMap::new();
        let candidates: Vec<DefaultKey> = values
            .iter()
            .map(|v| fragments.insert(Fragment::new(v.to_string())))
            .collect();
        fill_relations(&mut fragments, &candidates);
        (fragments, candidates)
    }

    #[test]
    fn test_merge_two_fragments() {
        let (fragments, keys) = connected_arena(&["942517", "175676"]);
        let merged = merge_chain(&fragments, &keys).unwrap();

        assert_eq!(merged.value(), "9425175676");
        assert_eq!(merged.head(), "94");
        assert_eq!(merged.tail(), "76");
    }

    #[test]
    fn test_merge_three_fragments_length() {
        let (fragments, keys) = connected_arena(&["942517", "175676", "768812"]);
        let merged = merge_chain(&fragments, &keys).unwrap();

        // len(f1) + (len(f2) - 2) + (len(f3) - 2)
        assert_eq!(merged.value().chars().count(), 6 + 4 + 4);
        assert_eq!(merged.value(), "94251756768812");
    }

    #[test]
    fn test_merge_single_fragment_is_copy() {
        let (fragments, keys) = connected_arena(&["942517"]);
        let merged = merge_chain(&fragments, &keys).unwrap();

        assert_eq!(merged.value(), "942517");
        assert_eq!(merged.head(), "94");
        assert_eq!(merged.tail(), "17");
    }

    #[test]
    fn test_merge_takes_last_fragment_relations() {
        let (fragments, keys) = connected_arena(&["942517", "175676", "768812"]);
        let merged = merge_chain(&fragments, &keys[..2]).unwrap();

        // "175676" is last in the merged chain; its successor "768812"
        // must carry over so the composite can extend forward
        assert_eq!(merged.match_tail(), fragments[keys[1]].match_tail());
        assert_eq!(merged.match_tail(), &[keys[2]]);
        assert_eq!(merged.match_head(), fragments[keys[0]].match_head());
    }

    #[test]
    fn test_merge_empty_chain_fails() {
        let (fragments, _) = connected_arena(&["942517"]);
        let err = merge_chain(&fragments, &[]).unwrap_err();
        assert!(matches!(err, ChainError::EmptyInput));
    }

    #[test]
    fn test_merge_fold_equals_pairwise() {
        let (fragments, keys) = connected_arena(&["aabb", "bbcc", "ccdd"]);

        let folded = merge_chain(&fragments, &keys).unwrap();
        let first_two = merge_chain(&fragments, &keys[..2]).unwrap();
        let mut stepwise = first_two.value().to_string();
        stepwise.extend(fragments[keys[2]].value().chars().skip(OVERLAP_LEN));

        assert_eq!(folded.value(), stepwise);
    }
}
