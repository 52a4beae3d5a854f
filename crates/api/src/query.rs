//! Shared query parameter types and their tolerant parsers.
//!
//! Date filters on list endpoints never reject a request: an unparseable
//! value degrades to an empty result set, an absent one to the unfiltered
//! listing. The parsers live here as plain functions so the behaviour is
//! testable without a running server.

use chrono::{NaiveDate, NaiveTime};
use mediavault_core::types::Timestamp;
use serde::Deserialize;

/// Default page size for inventory listing.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

/// Maximum page size for inventory listing.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw query parameters for `GET /api/v1/inventory`.
///
/// `created_after` stays a string here; parsing is tolerant and happens in
/// [`CreatedAfter::parse`].
#[derive(Debug, Deserialize)]
pub struct InventoryListParams {
    pub created_after: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Raw query parameters for `GET /api/v1/orders`.
#[derive(Debug, Deserialize)]
pub struct OrderListParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A clamped limit/offset pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Clamp raw paging values: limit into `[1, MAX_PAGE_SIZE]` (default
    /// [`DEFAULT_PAGE_SIZE`]), offset to non-negative (default 0).
    /// Out-of-range values are clamped, never an error.
    pub fn clamp(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

/// Parsed form of the `created_after` filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CreatedAfter {
    /// Parameter absent or blank: no filtering.
    Unfiltered,
    /// Rows created strictly after this instant match.
    After(Timestamp),
    /// Parameter present but unparseable: nothing matches.
    MatchNothing,
}

impl CreatedAfter {
    /// Interpret an optional ISO calendar date at midnight UTC.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw {
            None => return Self::Unfiltered,
            Some(s) if s.is_empty() => return Self::Unfiltered,
            Some(s) => s,
        };
        match raw.parse::<NaiveDate>() {
            Ok(date) => Self::After(date.and_time(NaiveTime::MIN).and_utc()),
            Err(_) => Self::MatchNothing,
        }
    }
}

/// Parsed form of the `start`/`end` order window filter.
///
/// Both bounds must be supplied together; a lone or unparseable bound
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderWindow {
    /// Neither bound supplied: no filtering.
    Unfiltered,
    /// Orders fully contained in `[start, end]` match.
    Within { start: NaiveDate, end: NaiveDate },
    /// A lone or unparseable bound: nothing matches.
    MatchNothing,
}

impl OrderWindow {
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Self {
        match (start, end) {
            (None, None) => Self::Unfiltered,
            (Some(start), Some(end)) => {
                match (start.parse::<NaiveDate>(), end.parse::<NaiveDate>()) {
                    (Ok(start), Ok(end)) => Self::Within { start, end },
                    _ => Self::MatchNothing,
                }
            }
            _ => Self::MatchNothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    // --- Page ---

    #[test]
    fn page_defaults() {
        assert_eq!(Page::clamp(None, None), Page { limit: 3, offset: 0 });
    }

    #[test]
    fn page_clamps_out_of_range_values() {
        assert_eq!(Page::clamp(Some(500), Some(-5)), Page { limit: 100, offset: 0 });
        assert_eq!(Page::clamp(Some(0), None), Page { limit: 1, offset: 0 });
        assert_eq!(Page::clamp(Some(-3), Some(7)), Page { limit: 1, offset: 7 });
    }

    // --- CreatedAfter ---

    #[test]
    fn created_after_absent_or_blank_is_unfiltered() {
        assert_eq!(CreatedAfter::parse(None), CreatedAfter::Unfiltered);
        assert_eq!(CreatedAfter::parse(Some("")), CreatedAfter::Unfiltered);
    }

    #[test]
    fn created_after_parses_at_midnight_utc() {
        let CreatedAfter::After(ts) = CreatedAfter::parse(Some("2024-06-15")) else {
            panic!("expected After");
        };
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 6, 15));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (0, 0, 0));
    }

    #[test]
    fn created_after_garbage_matches_nothing() {
        assert_eq!(
            CreatedAfter::parse(Some("13131/2131/131")),
            CreatedAfter::MatchNothing
        );
        assert_eq!(
            CreatedAfter::parse(Some("not-a-date")),
            CreatedAfter::MatchNothing
        );
    }

    // --- OrderWindow ---

    #[test]
    fn window_requires_both_bounds() {
        assert_eq!(OrderWindow::parse(None, None), OrderWindow::Unfiltered);
        assert_eq!(
            OrderWindow::parse(Some("2024-06-01"), None),
            OrderWindow::MatchNothing
        );
        assert_eq!(
            OrderWindow::parse(None, Some("2024-06-30")),
            OrderWindow::MatchNothing
        );
    }

    #[test]
    fn window_parses_both_bounds() {
        let parsed = OrderWindow::parse(Some("2024-06-01"), Some("2024-06-30"));
        let OrderWindow::Within { start, end } = parsed else {
            panic!("expected Within");
        };
        assert_eq!(start.to_string(), "2024-06-01");
        assert_eq!(end.to_string(), "2024-06-30");
    }

    #[test]
    fn window_with_unparseable_bound_matches_nothing() {
        assert_eq!(
            OrderWindow::parse(Some("soon"), Some("2024-06-30")),
            OrderWindow::MatchNothing
        );
        assert_eq!(
            OrderWindow::parse(Some("2024-06-01"), Some("later")),
            OrderWindow::MatchNothing
        );
    }
}
