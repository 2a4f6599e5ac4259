#![warn(missing_docs)]

//! # esaku-listview
//!
//! The list-view controller behind the E-Saku table screens: violation and
//! accomplishment history, students by class, and extracurriculars.
//!
//! Each of those screens needs a search box whose input is debounced, a
//! filter over records already fetched into memory, pagination with a
//! selectable page size, and a selected page that stays in range when results
//! shrink. This crate implements that once, as a [bubbletea-rs] component that
//! is generic over the record type and the match predicate.
//!
//! [bubbletea-rs]: https://github.com/joshka/bubbletea-rs
//!
//! ## Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`listview`] | The controller: search, filter, paginate, derive a view model |
//! | [`debounce`] | Cancellable last-write-wins delayed commit |
//! | [`paginator`] | 1-indexed page arithmetic, bounds policy, page window |
//! | [`filter`] | `Searchable` records and match predicates |
//! | [`pagesize`] | The 5/10/20/30/50 page-size choices |
//! | [`records`] | Student, history and extracurricular row types |
//! | [`config`] | View defaults loadable from JSON |
//!
//! ## Quick start
//!
//! ```rust
//! use esaku_listview::prelude::*;
//!
//! let students = vec![
//!     Student { nis: "2201".into(), name: "Ayu".into(), class_name: "XI RPL 1".into() },
//!     Student { nis: "2202".into(), name: "Budi".into(), class_name: "XI TKJ 2".into() },
//! ];
//!
//! let mut list = ListView::new(Some(students));
//! let _cmd = list.set_search_input("rpl"); // run the command, feed its Msg to `update`
//! list.flush_search();                     // or commit right away
//!
//! let vm = list.view_model();
//! assert_eq!(vm.total_count(), 1);
//! assert_eq!(vm.page_records()[0].name, "Ayu");
//! assert_eq!(list.status_text(), "Showing 1-1 of 1");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use esaku_listview::prelude::*;
//!
//! struct HistoryScreen {
//!     list: ListView<HistoryEntry>,
//! }
//!
//! impl Model for HistoryScreen {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { list: ListView::new(None) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```

pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod key;
pub mod listview;
pub mod pagesize;
pub mod paginator;
pub mod records;

pub use config::ListViewConfig;
pub use debounce::{DebounceMsg, Model as Debouncer};
pub use error::{Error, Result};
pub use filter::{Matcher, Searchable};
pub use listview::{ListViewKeyMap, ListViewStyles, Model as ListView, ViewModel};
pub use pagesize::PageSize;
pub use paginator::{Model as Paginator, PagePolicy};
pub use records::{EntryKind, Extracurricular, HistoryEntry, Student};

/// Common imports for building table screens.
///
/// ```rust
/// use esaku_listview::prelude::*;
///
/// let list: ListView<Extracurricular> = ListView::new(None);
/// assert_eq!(list.page_size(), PageSize::Ten);
/// ```
pub mod prelude {
    pub use crate::config::ListViewConfig;
    pub use crate::debounce::{DebounceMsg, Model as Debouncer};
    pub use crate::filter::{Matcher, Searchable};
    pub use crate::key::KeyMap;
    pub use crate::listview::{ListViewKeyMap, ListViewStyles, Model as ListView, ViewModel};
    pub use crate::pagesize::PageSize;
    pub use crate::paginator::{Model as Paginator, PagePolicy};
    pub use crate::records::{EntryKind, Extracurricular, HistoryEntry, Student};
}
