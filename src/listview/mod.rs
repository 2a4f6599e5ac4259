//! Generic list-view controller for the table screens.
//!
//! Every table (violation and accomplishment history, students by class,
//! extracurriculars) needs the same behaviour: a search box whose input is
//! debounced, a filter over in-memory records, pagination with a selectable
//! page size, and a selected page that never points past the last page.
//! [`Model`] provides it once, generic over the record type and the match
//! predicate.
//!
//! ### State
//! - `search_input`: raw text of the search box, echoed immediately
//! - `search_term`: the committed term, updated after the debounce window
//! - `page` and `page_size`: the paginator's selection
//!
//! Everything else is derived. [`Model::view_model`] returns the filtered
//! records, the selected page's slice, and counts for "Showing x-y of n".
//!
//! ### Page bounds
//! Whenever the filtered set or the page size changes, the selected page is
//! corrected according to [`PagePolicy`](crate::paginator::PagePolicy).
//! Changing the page size always returns to page 1.
//!
//! ### Debouncing
//! [`Model::set_search_input`] returns a tick command. When it fires, pass
//! the message to [`Model::update`]; only the tick from the most recent
//! keystroke commits. Hosts without a runtime use
//! [`Model::set_search_input_at`] and [`Model::poll`] instead.

pub mod keys;
pub mod style;

mod api;
mod filtering;
mod model;
mod rendering;
mod viewmodel;


pub use keys::ListViewKeyMap;
pub use model::Model;
pub use style::ListViewStyles;
pub use viewmodel::ViewModel;
