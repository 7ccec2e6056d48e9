/// Callback surface for diagnostic events emitted during assembly.
///
/// The core never touches process-wide logging state; callers inject
/// an observer per operation. All methods default to no-ops, so an
/// implementation only overrides the events it cares about.
pub trait Observer {
    /// Overlap relations were (re)derived for `fragments` candidates.
    fn relations_built(&mut self, fragments: usize) {
        let _ = fragments;
    }

    /// `removed` isolated fragments were dropped by filtering.
    fn fragments_removed(&mut self, removed: usize) {
        let _ = removed;
    }

    /// Filtering would have removed all `total` fragments; the
    /// unfiltered set is being used instead.
    fn no_connected_fragments(&mut self, total: usize) {
        let _ = total;
    }

    /// `count` start candidates were selected for the search.
    fn start_candidates(&mut self, count: usize) {
        let _ = count;
    }

    /// No fragment has an empty `match_head`; all `total` fragments
    /// are being treated as possible starts.
    fn no_start_candidate(&mut self, total: usize) {
        let _ = total;
    }

    /// Every path rooted at the start fragment `value` was explored.
    fn start_exhausted(&mut self, value: &str) {
        let _ = value;
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Observer that forwards events to the `tracing` subscriber.
///
/// Recovery paths log at warn level, progress at info/debug, matching
/// how the rest of the pipeline reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn relations_built(&mut self, fragments: usize) {
        tracing::info!(fragments, "head and tail indexes created");
    }

    fn fragments_removed(&mut self, removed: usize) {
        tracing::info!(removed, "removed fragments with no connections");
    }

    fn no_connected_fragments(&mut self, total: usize) {
        tracing::warn!(total, "all fragments were unconnected; using original list");
    }

    fn start_candidates(&mut self, count: usize) {
        tracing::info!(count, "start candidates selected");
    }

    fn no_start_candidate(&mut self, total: usize) {
        tracing::warn!(total, "no start candidates found; using all fragments as starts");
    }

    fn start_exhausted(&mut self, value: &str) {
        tracing::debug!(start = value, "all chains from start explored");
    }
}

/// Observer that records event counts, used across the test suite.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    pub removed: usize,
    pub no_connected: usize,
    pub no_start: usize,
    pub starts_exhausted: usize,
}

#[cfg(test)]
impl Observer for RecordingObserver {
    fn fragments_removed(&mut self, removed: usize) {
        self.removed += removed;
    }

    fn no_connected_fragments(&mut self, _total: usize) {
        self.no_connected += 1;
    }

    fn no_start_candidate(&mut self, _total: usize) {
        self.no_start += 1;
    }

    fn start_exhausted(&mut self, _value: &str) {
        self.starts_exhausted += 1;
    }
}
