//! Page window arithmetic and navigation link construction.

use std::ops::Range;

use url::Url;

use crate::error::PaginationError;

/// Where a requested page lands once it has been clamped against the number
/// of pages that actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

impl PageWindow {
    /// `page` may be anything (zero, negative, far past the end); it is
    /// clamped into `[1, max(total_pages, 1)]`.
    pub fn new(total_items: u64, page: i64, limit: i64) -> Result<Self, PaginationError> {
        let limit = checked_limit(limit)?;
        let total_pages = total_items.div_ceil(limit);
        let current_page = if page < 1 {
            1
        } else {
            (page as u64).min(total_pages.max(1))
        };

        Ok(Self {
            limit,
            total_items,
            total_pages,
            current_page,
        })
    }

    /// Number of items that precede the current page.
    pub fn offset(&self) -> u64 {
        (self.current_page - 1) * self.limit
    }

    /// Page targeted by the `last` link. An empty collection still has a
    /// page 1 that can be requested.
    pub fn last_page(&self) -> u64 {
        self.total_pages.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Index range of the current page inside a collection of `len` items.
    pub fn slice_range(&self, len: usize) -> Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(self.limit)
            .map(|limit| start.saturating_add(limit))
            .unwrap_or(usize::MAX)
            .min(len);
        start..end
    }
}

pub fn checked_limit(limit: i64) -> Result<u64, PaginationError> {
    if limit <= 0 {
        return Err(PaginationError::InvalidLimit(limit));
    }
    Ok(limit as u64)
}

/// Parses the url the page links are derived from. Only absolute,
/// hierarchical urls (`scheme://host/path`) are accepted.
pub fn parse_base_url(base_url: &str) -> Result<Url, PaginationError> {
    let url = Url::parse(base_url).map_err(|source| PaginationError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(PaginationError::OpaqueBaseUrl(base_url.to_string()));
    }
    Ok(url)
}

/// Builds the absolute url of `page`: the base url with its `page` and `limit`
/// query parameters replaced. Path, fragment and other query parameters are
/// kept as they were.
pub fn page_link(base: &Url, page: u64, limit: u64) -> String {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != "page" && key != "limit")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.set_query(None);
    url.query_pairs_mut()
        .extend_pairs(retained)
        .append_pair("page", &page.to_string())
        .append_pair("limit", &limit.to_string());
    url.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_partial_last_page() {
        let window = PageWindow::new(25, 3, 10).unwrap();
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.current_page, 3);
        assert_eq!(window.offset(), 20);
        assert_eq!(window.slice_range(25), 20..25);
        assert!(window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn test_window_clamps_out_of_range_pages() {
        assert_eq!(PageWindow::new(25, 0, 10).unwrap().current_page, 1);
        assert_eq!(PageWindow::new(25, -7, 10).unwrap().current_page, 1);
        assert_eq!(PageWindow::new(25, 10_000_000, 10).unwrap().current_page, 3);
        assert_eq!(PageWindow::new(25, i64::MAX, 10).unwrap().current_page, 3);
    }

    #[test]
    fn test_window_empty_collection() {
        let window = PageWindow::new(0, 4, 10).unwrap();
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.last_page(), 1);
        assert_eq!(window.offset(), 0);
        assert_eq!(window.slice_range(0), 0..0);
        assert!(!window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn test_window_page_count() {
        for (total, limit, pages) in [(1, 10, 1), (10, 10, 1), (11, 10, 2), (100, 1, 100)] {
            assert_eq!(PageWindow::new(total, 1, limit).unwrap().total_pages, pages);
        }
    }

    #[test]
    fn test_window_rejects_non_positive_limit() {
        assert!(matches!(
            PageWindow::new(25, 1, 0),
            Err(PaginationError::InvalidLimit(0))
        ));
        assert!(matches!(
            PageWindow::new(25, 1, -5),
            Err(PaginationError::InvalidLimit(-5))
        ));
    }

    #[test]
    fn test_slice_range_when_collection_is_shorter_than_total() {
        // presliced data: the window describes page 2 of 25 but only 3 rows are at hand
        let window = PageWindow::new(25, 2, 10).unwrap();
        assert_eq!(window.slice_range(3), 3..3);
    }

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("https://x.test/api/items").is_ok());
        assert!(matches!(
            parse_base_url("/api/items"),
            Err(PaginationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("not a url"),
            Err(PaginationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("mailto:rm@x.test"),
            Err(PaginationError::OpaqueBaseUrl(_))
        ));
    }

    #[test]
    fn test_page_link_sets_page_and_limit() {
        let base = parse_base_url("https://x.test/api/items").unwrap();
        assert_eq!(
            page_link(&base, 2, 10),
            "https://x.test/api/items?page=2&limit=10"
        );
    }

    #[test]
    fn test_page_link_overwrites_existing_params_and_keeps_others() {
        let base =
            parse_base_url("https://x.test/api/items?page=9&rm_number=RM01&limit=3&aum=High")
                .unwrap();
        assert_eq!(
            page_link(&base, 1, 20),
            "https://x.test/api/items?rm_number=RM01&aum=High&page=1&limit=20"
        );
    }

    #[test]
    fn test_page_link_keeps_port_and_encoding() {
        let base = parse_base_url("http://localhost:3000/api/v1/customers?risk=Very%20High").unwrap();
        assert_eq!(
            page_link(&base, 4, 5),
            "http://localhost:3000/api/v1/customers?risk=Very+High&page=4&limit=5"
        );
    }
}
