//! Pagination, view-model derivation and message handling.

use super::viewmodel::ViewModel;
use super::Model;
use crate::pagesize::PageSize;
use bubbletea_rs::{KeyMsg, Msg};

impl<R> Model<R> {
    /// Selected page, 1-indexed.
    pub fn current_page(&self) -> usize {
        self.paginator.page
    }

    /// Number of pages; at least 1 even when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Current page size.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.paginator.set_per_page(size.get());
        self.paginator.first_page();
        self.paginator.set_total_items(self.filtered.len());
        log::debug!(
            "page size set to {size}, {} pages",
            self.paginator.total_pages
        );
    }

    /// Selects a page, clamping the request into `[1, total_pages]`.
    pub fn set_current_page(&mut self, page: i64) {
        self.paginator.go_to(page);
    }

    /// Moves to the next page, if any.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
    }

    /// Moves to the previous page, if any.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
    }

    /// Jumps to page 1.
    pub fn first_page(&mut self) {
        self.paginator.first_page();
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.paginator.last_page();
    }

    /// Page numbers for a numbered pagination bar; `None` marks a gap.
    pub fn page_window(&self) -> Vec<Option<usize>> {
        self.paginator.page_window()
    }

    /// Derives what the table should show.
    ///
    /// Pure: repeated calls without mutations in between return equal
    /// results.
    pub fn view_model(&self) -> ViewModel<'_, R> {
        let filtered_records: Vec<&R> = self.filtered.iter().map(|&i| &self.records[i]).collect();
        let (start, end) = self.paginator.slice_bounds(filtered_records.len());
        ViewModel {
            filtered_records,
            current_page: self.paginator.page,
            total_pages: self.paginator.total_pages,
            page_size: self.paginator.per_page,
            page_range: start..end,
        }
    }

    /// Handles debounce ticks and keyboard input.
    ///
    /// A tick from the latest search keystroke commits the search term. Key
    /// presses drive paging, the page-size selector and clearing the search.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(term) = self.debounce.update(msg) {
            self.commit_search(term);
            return;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.grow_page_size.matches(key_msg) {
                self.set_page_size(self.page_size.cycle_next());
            } else if self.keymap.shrink_page_size.matches(key_msg) {
                self.set_page_size(self.page_size.cycle_prev());
            } else if self.keymap.clear_search.matches(key_msg) {
                self.clear_search();
            } else {
                self.paginator.update(msg);
            }
        }
    }
}
