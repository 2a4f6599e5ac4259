//! Key bindings for a list view.
//!
//! Paging keys live on the embedded paginator; this map adds the page-size
//! selector and clearing the search box.
//!
//! - **Paging**: `←/h/pgup`, `→/l/pgdown`, `g/home`, `G/end`
//! - **Page size**: `+` (larger), `-` (smaller)
//! - **Search**: `esc` clears the search immediately

use crate::key::{self, KeyMap};
use crate::paginator::PaginatorKeyMap;

/// Key bindings for list-view actions other than paging.
#[derive(Debug, Clone)]
pub struct ListViewKeyMap {
    /// Switch to the next larger page size.
    pub grow_page_size: key::Binding,
    /// Switch to the next smaller page size.
    pub shrink_page_size: key::Binding,
    /// Clear the search box and commit the empty term without waiting.
    pub clear_search: key::Binding,
    /// Paging keys, forwarded to the paginator.
    pub paging: PaginatorKeyMap,
}

impl Default for ListViewKeyMap {
    fn default() -> Self {
        Self {
            grow_page_size: key::new_binding(vec![
                key::with_keys_str(&["+", "="]),
                key::with_help("+", "more rows"),
            ]),
            shrink_page_size: key::new_binding(vec![
                key::with_keys_str(&["-", "_"]),
                key::with_help("-", "fewer rows"),
            ]),
            clear_search: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "clear search"),
            ]),
            paging: PaginatorKeyMap::default(),
        }
    }
}

impl KeyMap for ListViewKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        let mut bindings = self.paging.short_help();
        bindings.push(&self.grow_page_size);
        bindings.push(&self.shrink_page_size);
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let mut columns = self.paging.full_help();
        columns.push(vec![&self.grow_page_size, &self.shrink_page_size]);
        columns.push(vec![&self.clear_search]);
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_page_size_keys() {
        let keymap = ListViewKeyMap::default();
        let short: Vec<&str> = keymap
            .short_help()
            .iter()
            .map(|b| b.help().desc.as_str())
            .collect();
        assert_eq!(short, vec!["prev page", "next page", "more rows", "fewer rows"]);
        assert_eq!(keymap.full_help().len(), 4);
    }
}
