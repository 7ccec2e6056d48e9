use crate::error::Result;
use crate::filter;
use crate::fragment::Fragment;
use crate::index;
use crate::observer::{NoopObserver, Observer};
use crate::merge;
use crate::search;
use slotmap::{DefaultKey, SlotMap};

/// Main overlap-assembly data structure.
///
/// Owns the fragment arena plus an insertion-ordered candidate list
/// and exposes the four core operations: relation building, filtering,
/// longest-chain search, and merging. Fragments are never deleted;
/// filtering only shrinks the candidate list, so arena keys handed out
/// by [`push`](Assembler::push) stay valid for the assembler's
/// lifetime.
pub struct Assembler {
    /// Storage for all fragments using generational indices.
    pub(crate) fragments: SlotMap<DefaultKey, Fragment>,

    /// Live candidates in input order. Drives index construction,
    /// start selection, and the deterministic tie-break.
    pub(crate) candidates: Vec<DefaultKey>,
}

impl Assembler {
    /// Creates an empty assembler.
    pub fn new() -> Self {
        Self {
            fragments: SlotMap::new(),
            candidates: Vec::new(),
        }
    }

    /// Adds one fragment and returns its arena key.
    pub fn push(&mut self, value: impl Into<String>) -> DefaultKey {
        let key = self.fragments.insert(Fragment::new(value.into()));
        self.candidates.push(key);
        key
    }

    /// Adds every value from the iterator as a fragment.
    pub fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for value in values {
            self.push(value);
        }
    }

    /// Number of live candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True if no candidates remain.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Looks up a fragment by arena key.
    pub fn fragment(&self, key: DefaultKey) -> Option<&Fragment> {
        self.fragments.get(key)
    }

    /// The live candidate keys, in input order.
    pub fn candidates(&self) -> &[DefaultKey] {
        &self.candidates
    }

    /// Rebuilds the head/tail indexes and repopulates every
    /// candidate's relations. Must be called again after new
    /// fragments are pushed; the indexes themselves are ephemeral.
    pub fn build_overlap_relations(&mut self) {
        self.build_overlap_relations_with(&mut NoopObserver);
    }

    /// [`build_overlap_relations`](Self::build_overlap_relations) with
    /// an injected diagnostic observer.
    pub fn build_overlap_relations_with(&mut self, observer: &mut dyn Observer) {
        index::fill_relations(&mut self.fragments, &self.candidates);
        observer.relations_built(self.candidates.len());
    }

    /// Drops candidates with no relation in either direction.
    ///
    /// If every candidate is unconnected the original list is kept,
    /// so the search still has input to work with. Idempotent.
    pub fn filter_unconnected(&mut self) {
        self.filter_unconnected_with(&mut NoopObserver);
    }

    /// [`filter_unconnected`](Self::filter_unconnected) with an
    /// injected diagnostic observer.
    pub fn filter_unconnected_with(&mut self, observer: &mut dyn Observer) {
        self.candidates =
            filter::filter_unconnected(&self.fragments, &self.candidates, observer);
    }

    /// Finds one longest simple path through the overlap graph.
    ///
    /// Returns arena keys in chain order; empty when the assembler
    /// holds no candidates. Equal-length ties keep the first chain
    /// discovered in depth-first order.
    pub fn find_longest_chain(&self) -> Vec<DefaultKey> {
        self.find_longest_chain_with(&mut NoopObserver)
    }

    /// [`find_longest_chain`](Self::find_longest_chain) with an
    /// injected diagnostic observer.
    pub fn find_longest_chain_with(&self, observer: &mut dyn Observer) -> Vec<DefaultKey> {
        search::find_longest_chain(&self.fragments, &self.candidates, observer)
    }

    /// Folds an ordered chain into one composite fragment.
    ///
    /// Fails with [`crate::ChainError::EmptyInput`] on an empty chain.
    pub fn merge_chain(&self, chain: &[DefaultKey]) -> Result<Fragment> {
        merge::merge_chain(&self.fragments, chain)
    }

    /// Runs the full pipeline: relations, filtering, search, merge.
    pub fn assemble(&mut self) -> Result<Fragment> {
        self.assemble_with(&mut NoopObserver)
    }

    /// [`assemble`](Self::assemble) with an injected diagnostic
    /// observer.
    pub fn assemble_with(&mut self, observer: &mut dyn Observer) -> Result<Fragment> {
        self.build_overlap_relations_with(observer);
        self.filter_unconnected_with(observer);
        let chain = self.find_longest_chain_with(observer);
        merge::merge_chain(&self.fragments, &chain)
    }

    /// Returns assembly statistics for the current candidate list.
    pub fn stats(&self) -> AssemblyStats {
        let connected = self
            .candidates
            .iter()
            .filter(|&&key| !self.fragments[key].is_isolated())
            .count();
        let start_candidates = self
            .candidates
            .iter()
            .filter(|&&key| self.fragments[key].match_head.is_empty())
            .count();

        AssemblyStats {
            fragments: self.candidates.len(),
            connected,
            start_candidates,
        }
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<S> for Assembler {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut assembler = Assembler::new();
        assembler.extend(iter);
        assembler
    }
}

/// Statistics about the current overlap graph.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyStats {
    /// Number of live candidate fragments
    pub fragments: usize,
    /// Candidates with at least one relation
    pub connected: usize,
    /// Candidates with no possible predecessor
    pub start_candidates: usize,
}
