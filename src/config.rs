//! Defaults applied when a table view mounts.
//!
//! Every field has a default, so an empty JSON object yields the standard
//! behaviour: 300ms search debounce, 10 rows per page, clamp to the last page
//! when results shrink, and an "n/m" pagination control.

use crate::error::Result;
use crate::pagesize::PageSize;
use crate::paginator::{PagePolicy, Type};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for a list view.
///
/// ```rust
/// use esaku_listview::{ListViewConfig, PageSize};
/// use esaku_listview::paginator::PagePolicy;
///
/// let config = ListViewConfig::from_json_str(
///     r#"{ "default_page_size": "20", "page_policy": "reset_to_first" }"#,
/// )
/// .unwrap();
/// assert_eq!(config.default_page_size, PageSize::Twenty);
/// assert_eq!(config.page_policy, PagePolicy::ResetToFirst);
/// assert_eq!(config.debounce_ms, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListViewConfig {
    /// Search debounce window in milliseconds.
    pub debounce_ms: u64,
    /// Page size selected when the view mounts.
    pub default_page_size: PageSize,
    /// Recovery rule when the selected page falls out of range.
    pub page_policy: PagePolicy,
    /// Pagination control style.
    pub paginator_type: Type,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            default_page_size: PageSize::default(),
            page_policy: PagePolicy::default(),
            paginator_type: Type::default(),
        }
    }
}

impl ListViewConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        log::debug!("loaded list view config: {config:?}");
        Ok(config)
    }

    /// The debounce window as a [`Duration`].
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = ListViewConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ListViewConfig::default());
        assert_eq!(config.debounce_delay(), Duration::from_millis(300));
        assert_eq!(config.default_page_size, PageSize::Ten);
        assert_eq!(config.page_policy, PagePolicy::ClampToLast);
    }

    #[test]
    fn test_rejects_unknown_page_size() {
        let err = ListViewConfig::from_json_str(r#"{ "default_page_size": 15 }"#).unwrap_err();
        assert!(err.to_string().contains("invalid list view config"));
    }

    #[test]
    fn test_dots_paginator() {
        let config = ListViewConfig::from_json_str(r#"{ "paginator_type": "dots" }"#).unwrap();
        assert_eq!(config.paginator_type, Type::Dots);
    }
}
