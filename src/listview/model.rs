//! Controller state.

use super::keys::ListViewKeyMap;
use super::style::ListViewStyles;
use crate::config::ListViewConfig;
use crate::debounce;
use crate::filter::{Matcher, Searchable};
use crate::pagesize::PageSize;
use crate::paginator;

/// Search, filter and pagination controller for one table view.
///
/// The controller owns three pieces of user-driven state: the committed
/// search term, the selected page, and the page size. Everything shown in the
/// table is derived from those plus the records through
/// [`view_model`](Model::view_model).
///
/// # Examples
///
/// ```rust
/// use esaku_listview::listview::Model;
/// use esaku_listview::PageSize;
///
/// let names: Vec<String> = ["Ayu", "Budi", "Citra"].iter().map(|s| s.to_string()).collect();
/// let mut list = Model::new(Some(names)).with_page_size(PageSize::Five);
///
/// let _cmd = list.set_search_input("a");
/// assert_eq!(list.search_input(), "a");
/// assert_eq!(list.search_term(), ""); // not committed yet
///
/// list.flush_search();
/// let vm = list.view_model();
/// assert_eq!(vm.total_count(), 2);
/// assert_eq!(vm.page_records(), &[&"Ayu".to_string(), &"Citra".to_string()]);
/// ```
#[derive(Debug)]
pub struct Model<R> {
    pub(super) records: Vec<R>,
    pub(super) matcher: Matcher<R>,

    // Search
    pub(super) search_input: String,
    pub(super) search_term: String,
    pub(super) debounce: debounce::Model,

    // Pagination
    pub(super) page_size: PageSize,
    pub(super) paginator: paginator::Model,

    /// Indices into `records` matching `search_term`; recomputed whenever
    /// either side changes.
    pub(super) filtered: Vec<usize>,

    pub(super) keymap: ListViewKeyMap,
    pub(super) styles: ListViewStyles,
    pub(super) empty_message: String,
}

impl<R: Searchable> Model<R> {
    /// Creates a controller with the default config.
    ///
    /// `None` stands for records that have not been fetched yet and is
    /// treated as an empty list.
    pub fn new(records: Option<Vec<R>>) -> Self {
        Self::with_config(records, &ListViewConfig::default())
    }

    /// Creates a controller from a view config.
    pub fn with_config(records: Option<Vec<R>>, config: &ListViewConfig) -> Self {
        Model::from_matcher(records, Matcher::default(), config)
    }
}

impl<R> Model<R> {
    /// Creates a controller with an explicit match predicate.
    ///
    /// Unlike [`new`](Self::new), the record type does not have to implement
    /// [`Searchable`] when `matcher` is a [`Matcher::Custom`].
    pub fn from_matcher(
        records: Option<Vec<R>>,
        matcher: Matcher<R>,
        config: &ListViewConfig,
    ) -> Self {
        let page_size = config.default_page_size;
        let paginator = paginator::Model::new()
            .with_per_page(page_size.get())
            .with_policy(config.page_policy)
            .with_type(config.paginator_type);

        let mut model = Self {
            records: records.unwrap_or_default(),
            matcher,
            search_input: String::new(),
            search_term: String::new(),
            debounce: debounce::new(config.debounce_delay()),
            page_size,
            paginator,
            filtered: Vec::new(),
            keymap: ListViewKeyMap::default(),
            styles: ListViewStyles::default(),
            empty_message: "No data".to_string(),
        };
        model.refilter();
        model
    }

    /// Sets the match predicate (builder).
    pub fn with_matcher(mut self, matcher: Matcher<R>) -> Self {
        self.set_matcher(matcher);
        self
    }

    /// Sets the page size (builder).
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.set_page_size(size);
        self
    }

    /// Sets the message shown when nothing matches (builder).
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the styles (builder).
    pub fn with_styles(mut self, styles: ListViewStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key bindings (builder).
    pub fn with_keymap(mut self, keymap: ListViewKeyMap) -> Self {
        self.paginator.keymap = keymap.paging.clone();
        self.keymap = keymap;
        self
    }
}
