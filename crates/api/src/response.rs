//! Shared response envelope types for API handlers.
//!
//! The paginated list endpoints wrap their results in a
//! `{count, next, previous, results}` envelope; non-paginated list
//! endpoints return bare arrays and do not use this module.

use serde::Serialize;

/// Offset/limit pagination envelope.
///
/// `next` and `previous` are relative URLs; filter parameters supplied to
/// [`Paginated::new`] are preserved across page links.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Build a page with navigation links computed from the total count and
    /// the clamped limit/offset that produced `results`.
    pub fn new(
        path: &str,
        extra: &[(&str, &str)],
        count: i64,
        limit: i64,
        offset: i64,
        results: Vec<T>,
    ) -> Self {
        let next = (offset + limit < count).then(|| page_url(path, extra, limit, offset + limit));
        let previous = (offset > 0).then(|| page_url(path, extra, limit, (offset - limit).max(0)));
        Self {
            count,
            next,
            previous,
            results,
        }
    }

    /// An empty page with no links, used when a filter matches nothing.
    pub fn empty() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

fn page_url(path: &str, extra: &[(&str, &str)], limit: i64, offset: i64) -> String {
    let mut url = format!("{path}?limit={limit}&offset={offset}");
    for (key, value) in extra {
        url.push_str(&format!("&{key}={value}"));
    }
    url
}
