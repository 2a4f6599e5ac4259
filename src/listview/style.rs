//! Styles for the list view's status and pagination strip.

use lipgloss_extras::prelude::*;

/// Separator placed between the status text and the pagination control.
pub const DIVIDER: &str = " • ";

/// Styles for each part of the strip under a table.
#[derive(Debug, Clone)]
pub struct ListViewStyles {
    /// "Showing 1-10 of 25".
    pub status_bar: Style,
    /// The empty-state message.
    pub status_empty: Style,
    /// The committed search term echoed after the counts.
    pub active_search: Style,
    /// The pagination control.
    pub pagination: Style,
    /// The divider between status and pagination.
    pub divider: Style,
}

impl Default for ListViewStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            status_empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            active_search: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            pagination: Style::new().foreground(subdued.clone()),
            divider: Style::new().foreground(subdued),
        }
    }
}
