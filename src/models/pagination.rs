//! Paginated response envelope and the query parameters that drive it.

use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::error::PaginationError;
use crate::models::Customer;
use crate::utils::pagination::{PageWindow, checked_limit, page_link, parse_base_url};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub items_per_page: u64,
    pub total_items: u64,
    pub current_page: u64,
    pub total_pages: u64,
    /// Length of `data`; below `itemsPerPage` on a trailing partial page.
    pub items_count: u64,
}

/// Absolute urls of the neighbouring pages. `previous` is null on the first
/// page and `next` is null on the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageLinks {
    pub first: String,
    pub previous: Option<String>,
    pub current: String,
    pub next: Option<String>,
    pub last: String,
}

impl PageLinks {
    fn new(base: &Url, window: &PageWindow) -> Self {
        let link = |page| page_link(base, page, window.limit);
        Self {
            first: link(1),
            previous: window
                .has_previous()
                .then(|| link(window.current_page - 1)),
            current: link(window.current_page),
            next: window.has_next().then(|| link(window.current_page + 1)),
            last: link(window.last_page()),
        }
    }
}

/// Where the rows of a page come from.
#[derive(Debug, Clone)]
pub enum PageSource<T> {
    /// The whole collection, in display order. The page is cut out of it.
    Materialized { items: Vec<T> },
    /// Rows already fetched for the requested page, e.g. by `LIMIT/OFFSET`,
    /// together with the row count across all pages.
    Presliced { data: Vec<T>, total_records: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[aliases(PaginatedCustomers = Paginated<Customer>)]
pub struct Paginated<T> {
    data: Vec<T>,
    meta: PageMeta,
    links: PageLinks,
}

impl<T> Paginated<T> {
    /// Cuts page `page` of size `limit` out of `items`.
    pub fn paginate(
        items: Vec<T>,
        page: i64,
        limit: i64,
        base_url: &str,
    ) -> Result<Self, PaginationError> {
        let window = PageWindow::new(items.len() as u64, page, limit)?;
        let base = parse_base_url(base_url)?;

        let range = window.slice_range(items.len());
        let data: Vec<T> = items
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();

        Ok(Self::assemble(data, &window, &base))
    }

    /// Wraps a page that was fetched elsewhere. `data` is returned as is; only
    /// the metadata and links are derived from `total_records`.
    pub fn paginate_by_total_records(
        data: Vec<T>,
        total_records: i64,
        page: i64,
        limit: i64,
        base_url: &str,
    ) -> Result<Self, PaginationError> {
        checked_limit(limit)?;
        if total_records < 0 {
            return Err(PaginationError::InvalidTotal(total_records));
        }
        let window = PageWindow::new(total_records as u64, page, limit)?;
        let base = parse_base_url(base_url)?;

        Ok(Self::assemble(data, &window, &base))
    }

    pub fn from_source(
        source: PageSource<T>,
        page: i64,
        limit: i64,
        base_url: &str,
    ) -> Result<Self, PaginationError> {
        match source {
            PageSource::Materialized { items } => Self::paginate(items, page, limit, base_url),
            PageSource::Presliced {
                data,
                total_records,
            } => Self::paginate_by_total_records(data, total_records, page, limit, base_url),
        }
    }

    fn assemble(data: Vec<T>, window: &PageWindow, base: &Url) -> Self {
        let meta = PageMeta {
            items_per_page: window.limit,
            total_items: window.total_items,
            current_page: window.current_page,
            total_pages: window.total_pages,
            items_count: data.len() as u64,
        };
        let links = PageLinks::new(base, window);
        Self { data, meta, links }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    pub fn links(&self) -> &PageLinks {
        &self.links
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// Raw `page`/`limit` query parameters.
///
/// A missing, non-numeric or zero value falls back to the caller's default.
/// Only plain integers count as numeric: `"2.5"` or `"1e1"` fall back too.
/// Negative values are passed through untouched: a negative page is clamped
/// to 1 later on, a negative limit is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationQuery {
    pub fn new(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    pub fn page_or(&self, default: i64) -> i64 {
        lenient_number(self.page.as_deref(), default)
    }

    pub fn limit_or(&self, default: i64) -> i64 {
        lenient_number(self.limit.as_deref(), default)
    }
}

fn lenient_number(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(0) | None => default,
        Some(n) => n,
    }
}
