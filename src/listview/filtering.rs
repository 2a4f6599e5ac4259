//! Search term handling and filter recomputation.

use super::Model;
use crate::filter::Matcher;
use bubbletea_rs::Cmd;
use std::time::{Duration, Instant};

impl<R> Model<R> {
    /// Records a keystroke in the search box.
    ///
    /// The raw text is echoed by [`search_input`](Self::search_input) right
    /// away. Committing it as the search term waits for the debounce window;
    /// a newer keystroke supersedes this one. Feed the returned command's
    /// message back through [`update`](Self::update).
    pub fn set_search_input(&mut self, raw: impl Into<String>) -> Cmd {
        self.search_input = raw.into();
        self.debounce.push(self.search_input.clone())
    }

    /// Like [`set_search_input`](Self::set_search_input), stamped with `now`
    /// and without a command. Pair with [`poll`](Self::poll).
    pub fn set_search_input_at(&mut self, raw: impl Into<String>, now: Instant) {
        self.search_input = raw.into();
        self.debounce.push_at(self.search_input.clone(), now);
    }

    /// Commits the pending search input if its delay has elapsed at `now`.
    ///
    /// Returns whether a commit happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debounce.poll(now) {
            Some(term) => {
                self.commit_search(term);
                true
            }
            None => false,
        }
    }

    /// Commits the pending search input immediately.
    ///
    /// Returns whether a commit happened.
    pub fn flush_search(&mut self) -> bool {
        match self.debounce.flush() {
            Some(term) => {
                self.commit_search(term);
                true
            }
            None => false,
        }
    }

    /// Empties the search box and commits the empty term, cancelling any
    /// pending input.
    pub fn clear_search(&mut self) {
        self.debounce.cancel();
        self.search_input.clear();
        self.commit_search(String::new());
    }

    /// Raw text of the search box.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// The search term the current filter was computed from.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The debounce window applied to search input.
    pub fn debounce_delay(&self) -> Duration {
        self.debounce.delay()
    }

    /// Changes the debounce window for subsequent keystrokes. Input already
    /// pending keeps its original due time.
    pub fn set_debounce_delay(&mut self, delay: Duration) {
        self.debounce.set_delay(delay);
    }

    /// Whether typed input is still waiting for its debounce window.
    pub fn search_pending(&self) -> bool {
        self.debounce.pending().is_some()
    }

    /// Replaces the match predicate and recomputes the filter.
    pub fn set_matcher(&mut self, matcher: Matcher<R>) {
        self.matcher = matcher;
        self.refilter();
    }

    /// Replaces the records and recomputes the filter.
    ///
    /// `None` (records not fetched yet) is treated as an empty list.
    pub fn set_records(&mut self, records: Option<Vec<R>>) {
        self.records = records.unwrap_or_default();
        self.refilter();
    }

    /// All records, filtered or not.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub(super) fn commit_search(&mut self, term: String) {
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.refilter();
        log::debug!(
            "search committed: {:?} ({} of {} records match)",
            self.search_term,
            self.filtered.len(),
            self.records.len()
        );
    }

    /// Recomputes the matching indices and brings the page back in range.
    pub(super) fn refilter(&mut self) {
        self.filtered = self.matcher.filter_indices(&self.records, &self.search_term);
        self.paginator.set_total_items(self.filtered.len());
    }
}
