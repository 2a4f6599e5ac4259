//! Enumerated page-size choices for table views.
//!
//! The table views offer a fixed set of rows-per-page options. The select
//! element hands the choice back as a string (`"10"`), hosts loading JSON may
//! hand it as a number, so both forms parse.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows shown per page.
///
/// # Examples
///
/// ```rust
/// use esaku_listview::PageSize;
///
/// let size: PageSize = "20".parse().unwrap();
/// assert_eq!(size, PageSize::Twenty);
/// assert_eq!(size.get(), 20);
/// assert_eq!(PageSize::default(), PageSize::Ten);
/// assert!("7".parse::<PageSize>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "PageSizeRepr", into = "usize")]
pub enum PageSize {
    /// 5 rows.
    Five,
    /// 10 rows.
    #[default]
    Ten,
    /// 20 rows.
    Twenty,
    /// 30 rows.
    Thirty,
    /// 50 rows.
    Fifty,
}

impl PageSize {
    /// All choices, in the order a page-size selector lists them.
    pub const ALL: [PageSize; 5] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Thirty,
        PageSize::Fifty,
    ];

    /// Returns the number of rows.
    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
        }
    }

    /// Returns the next larger choice, wrapping around to the smallest.
    ///
    /// ```rust
    /// use esaku_listview::PageSize;
    ///
    /// assert_eq!(PageSize::Ten.cycle_next(), PageSize::Twenty);
    /// assert_eq!(PageSize::Fifty.cycle_next(), PageSize::Five);
    /// ```
    pub fn cycle_next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the next smaller choice, wrapping around to the largest.
    pub fn cycle_prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.get() == value)
            .ok_or_else(|| Error::InvalidPageSize(value.to_string()))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<usize>()
            .map_err(|_| Error::InvalidPageSize(trimmed.to_string()))
            .and_then(PageSize::try_from)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// Accepts both `10` and `"10"` when deserializing.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageSizeRepr {
    Number(usize),
    Text(String),
}

impl TryFrom<PageSizeRepr> for PageSize {
    type Error = Error;

    fn try_from(repr: PageSizeRepr) -> Result<Self> {
        match repr {
            PageSizeRepr::Number(n) => PageSize::try_from(n),
            PageSizeRepr::Text(s) => s.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_choices() {
        for (text, expected) in [
            ("5", PageSize::Five),
            ("10", PageSize::Ten),
            ("20", PageSize::Twenty),
            ("30", PageSize::Thirty),
            (" 50 ", PageSize::Fifty),
        ] {
            assert_eq!(text.parse::<PageSize>().unwrap(), expected);
        }
    }

    #[test]
    fn test_rejects_values_outside_choices() {
        assert!("0".parse::<PageSize>().is_err());
        assert!("15".parse::<PageSize>().is_err());
        assert!("ten".parse::<PageSize>().is_err());
        assert!(PageSize::try_from(100).is_err());
    }

    #[test]
    fn test_display_matches_select_value() {
        assert_eq!(PageSize::Thirty.to_string(), "30");
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(PageSize::Five.cycle_prev(), PageSize::Fifty);
        assert_eq!(PageSize::Fifty.cycle_next(), PageSize::Five);
        assert_eq!(PageSize::Twenty.cycle_prev(), PageSize::Ten);
    }

    #[test]
    fn test_serde_accepts_number_and_string() {
        let from_num: PageSize = serde_json::from_str("20").unwrap();
        let from_str: PageSize = serde_json::from_str("\"50\"").unwrap();
        assert_eq!(from_num, PageSize::Twenty);
        assert_eq!(from_str, PageSize::Fifty);
        assert!(serde_json::from_str::<PageSize>("7").is_err());
        assert_eq!(serde_json::to_string(&PageSize::Ten).unwrap(), "10");
    }
}
