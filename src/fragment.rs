use slotmap::DefaultKey;

/// Number of characters in an overlap key (fragment prefix/suffix).
pub const OVERLAP_LEN: usize = 2;

/// One input fragment plus its derived overlap keys and relations.
///
/// Fragments live in a slotmap arena owned by [`crate::Assembler`];
/// relations are adjacency lists of arena keys rather than direct
/// references, so the cyclic overlap graph needs no shared ownership.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Current string content (the raw input line, or a merged result).
    pub(crate) value: String,

    /// First `OVERLAP_LEN` characters of `value` (fewer if the value
    /// is shorter). Derived once at construction.
    pub(crate) head: String,

    /// Last `OVERLAP_LEN` characters of `value` (fewer if the value
    /// is shorter). Derived once at construction.
    pub(crate) tail: String,

    /// Fragments whose tail equals this fragment's head (candidates
    /// that could precede it). Ordered, duplicate-free, never `self`.
    pub(crate) match_head: Vec<DefaultKey>,

    /// Fragments whose head equals this fragment's tail (candidates
    /// that could follow it). Ordered, duplicate-free, never `self`.
    pub(crate) match_tail: Vec<DefaultKey>,
}

impl Fragment {
    /// Creates a fragment from a raw input value, deriving its keys.
    pub(crate) fn new(value: String) -> Self {
        let head = head_key(&value);
        let tail = tail_key(&value);
        Self {
            value,
            head,
            tail,
            match_head: Vec::new(),
            match_tail: Vec::new(),
        }
    }

    /// The fragment's string content.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The prefix overlap key.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// The suffix overlap key.
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Arena keys of fragments that could precede this one.
    pub fn match_head(&self) -> &[DefaultKey] {
        &self.match_head
    }

    /// Arena keys of fragments that could follow this one.
    pub fn match_tail(&self) -> &[DefaultKey] {
        &self.match_tail
    }

    /// True if the fragment has no overlap relation in either direction.
    pub(crate) fn is_isolated(&self) -> bool {
        self.match_head.is_empty() && self.match_tail.is_empty()
    }

    pub(crate) fn clear_relations(&mut self) {
        self.match_head.clear();
        self.match_tail.clear();
    }
}

/// Derives the prefix key: the first `OVERLAP_LEN` characters.
///
/// Character-based, not byte-based, so multi-byte input never splits
/// a code point.
pub(crate) fn head_key(value: &str) -> String {
    value.chars().take(OVERLAP_LEN).collect()
}

/// Derives the suffix key: the last `OVERLAP_LEN` characters.
pub(crate) fn tail_key(value: &str) -> String {
    let suffix: Vec<char> = value.chars().rev().take(OVERLAP_LEN).collect();
    suffix.into_iter().rev().collect()
}
