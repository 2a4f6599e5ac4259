//! Page arithmetic and the pagination control for table views.
//!
//! The paginator does not hold the rows. It tracks which page is selected, how
//! many rows fit on a page, and how many pages exist, and it turns those into
//! slice bounds and a short textual control ("2/5" or dots). Pages are
//! 1-indexed, matching what the pagination bar shows to users.
//!
//! Whenever the total changes, the selected page is brought back into
//! `[1, total_pages]` according to the configured [`PagePolicy`].

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use serde::{Deserialize, Serialize};

/// How the paginator renders itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Page numbers, e.g. "1/5".
    #[default]
    Arabic,
    /// One dot per page, e.g. "• ○ ○".
    Dots,
}

/// What happens to the selected page when the page count shrinks below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Move to the last page that still exists.
    #[default]
    ClampToLast,
    /// Jump back to page 1.
    ResetToFirst,
}

/// Key bindings for moving between pages.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left, 'h'.
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right, 'l'.
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'.
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'.
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
        ]
    }
}

/// Pagination state for a table view.
///
/// # Examples
///
/// ```rust
/// use esaku_listview::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(10).with_total_items(25);
/// assert_eq!(paginator.total_pages, 3);
/// assert_eq!(paginator.page, 1);
///
/// paginator.go_to(9999);
/// assert_eq!(paginator.page, 3);
/// assert_eq!(paginator.slice_bounds(25), (20, 25));
///
/// paginator.go_to(-5);
/// assert_eq!(paginator.page, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Rendering style.
    pub paginator_type: Type,
    /// Selected page, 1-indexed.
    pub page: usize,
    /// Rows per page, at least 1.
    pub per_page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// Recovery rule when `page` ends up past `total_pages`.
    pub policy: PagePolicy,

    /// Dot for the selected page in [`Type::Dots`] mode.
    pub active_dot: String,
    /// Dot for the other pages in [`Type::Dots`] mode.
    pub inactive_dot: String,
    /// Format for [`Type::Arabic`] mode; the two `%d` are page and total.
    pub arabic_format: String,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 1,
            total_pages: 1,
            policy: PagePolicy::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator on page 1 of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets rows per page (builder). Values below 1 become 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total row count (builder).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the out-of-range recovery policy (builder).
    pub fn with_policy(mut self, policy: PagePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the rendering style (builder).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets rows per page. Values below 1 become 1.
    ///
    /// The page count is not recalculated here; call
    /// [`set_total_items`](Self::set_total_items) afterwards.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Derives the page count from a row count and corrects the selected page.
    ///
    /// Zero rows still yield one (empty) page.
    ///
    /// ```rust
    /// use esaku_listview::paginator::{Model, PagePolicy};
    ///
    /// let mut p = Model::new().with_per_page(10).with_total_items(25);
    /// p.go_to(3);
    /// p.set_total_items(5);
    /// assert_eq!(p.page, 1);
    ///
    /// let mut p = Model::new()
    ///     .with_per_page(10)
    ///     .with_policy(PagePolicy::ClampToLast)
    ///     .with_total_items(50);
    /// p.go_to(5);
    /// p.set_total_items(25);
    /// assert_eq!(p.page, 3);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page).max(1);
        self.correct_page();
    }

    fn correct_page(&mut self) {
        if self.page == 0 {
            self.page = 1;
        }
        if self.page > self.total_pages {
            let corrected = match self.policy {
                PagePolicy::ClampToLast => self.total_pages,
                PagePolicy::ResetToFirst => 1,
            };
            log::trace!(
                "page {} out of range (total {}), moving to {}",
                self.page,
                self.total_pages,
                corrected
            );
            self.page = corrected;
        }
    }

    /// Selects a page, clamping the request into `[1, total_pages]`.
    pub fn go_to(&mut self, page: i64) {
        let max = self.total_pages as i64;
        self.page = page.clamp(1, max) as usize;
    }

    /// Number of rows on the selected page for a list of `total_items` rows.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.slice_bounds(total_items);
        end - start
    }

    /// Start (inclusive) and end (exclusive) indices of the selected page.
    ///
    /// Both bounds are capped at `length`, so the result can always be used to
    /// slice a list of that length.
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page.saturating_sub(1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Moves back one page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Moves forward one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Jumps to page 1.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.page = self.total_pages;
    }

    /// Whether page 1 is selected.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Whether the last page is selected.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Page numbers for a numbered pagination bar.
    ///
    /// Shows the first two and last two pages, plus two pages before and four
    /// after the selected one. `None` marks a gap to render as an ellipsis.
    ///
    /// ```rust
    /// use esaku_listview::paginator::Model;
    ///
    /// let mut p = Model::new().with_per_page(1).with_total_items(20);
    /// p.go_to(10);
    /// let window = p.page_window();
    /// assert_eq!(
    ///     window,
    ///     vec![
    ///         Some(1), Some(2), None,
    ///         Some(8), Some(9), Some(10), Some(11), Some(12), Some(13), Some(14),
    ///         None, Some(19), Some(20),
    ///     ]
    /// );
    /// ```
    pub fn page_window(&self) -> Vec<Option<usize>> {
        page_window(self.total_pages, self.page, 2, 2, 4, 2)
    }

    /// Handles paging keys.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            } else if self.keymap.first_page.matches(key_msg) {
                self.first_page();
            } else if self.keymap.last_page.matches(key_msg) {
                self.last_page();
            }
        }
    }

    /// Renders the control in the configured style.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (1..=self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;
    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);
    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);
    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}
