//! The read-only snapshot handed to table rendering.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ops::Range;

/// Filtered rows, the rows of the selected page, and pagination metadata.
///
/// Borrowed from the controller; rebuild it after any mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a, R> {
    /// Every record matching the committed search term, in input order.
    pub filtered_records: Vec<&'a R>,
    /// Selected page, 1-indexed.
    pub current_page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// Rows per page.
    pub page_size: usize,
    pub(super) page_range: Range<usize>,
}

impl<'a, R> ViewModel<'a, R> {
    /// Rows of the selected page; a contiguous slice of `filtered_records`.
    pub fn page_records(&self) -> &[&'a R] {
        &self.filtered_records[self.page_range.clone()]
    }

    /// Number of rows on the selected page.
    pub fn displayed_count(&self) -> usize {
        self.page_range.len()
    }

    /// Number of matching rows across all pages.
    pub fn total_count(&self) -> usize {
        self.filtered_records.len()
    }

    /// 1-based position of the first row shown, or 0 when nothing is shown.
    pub fn first_shown(&self) -> usize {
        if self.page_range.is_empty() {
            0
        } else {
            self.page_range.start + 1
        }
    }

    /// 1-based position of the last row shown, or 0 when nothing is shown.
    pub fn last_shown(&self) -> usize {
        self.page_range.end
    }

    /// Whether no record matched.
    pub fn is_empty(&self) -> bool {
        self.filtered_records.is_empty()
    }
}

impl<R: Serialize> Serialize for ViewModel<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ViewModel", 9)?;
        state.serialize_field("filtered_records", &self.filtered_records)?;
        state.serialize_field("page_records", self.page_records())?;
        state.serialize_field("current_page", &self.current_page)?;
        state.serialize_field("total_pages", &self.total_pages)?;
        state.serialize_field("page_size", &self.page_size)?;
        state.serialize_field("displayed_count", &self.displayed_count())?;
        state.serialize_field("total_count", &self.total_count())?;
        state.serialize_field("first_shown", &self.first_shown())?;
        state.serialize_field("last_shown", &self.last_shown())?;
        state.end()
    }
}
