//! Page-slicing over ordered queries.
//!
//! Pages are 1-based. Out-of-range input is clamped rather than rejected:
//! `page` is held to `1..=MAX_PAGE` and `per_page` to `1..=MAX_PER_PAGE`.

use sea_orm::QuerySelect;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::response::Meta;

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;
/// Keeps `offset()` within a signed 64-bit `OFFSET`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PER_PAGE;

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Parent record the listing is scoped to (country, department, store or product).
    pub id: Option<i32>,
    /// Page number, default 1.
    pub page: Option<i64>,
    /// Items per page, default 10.
    #[serde(alias = "recordsNumber")]
    pub per_page: Option<i64>,
    /// Case-insensitive substring filter.
    pub filter: Option<String>,
}

impl PaginationQuery {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page, self.per_page)
    }

    pub fn search_term(&self) -> Option<&str> {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub per_page: u64,
}

impl PageWindow {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = page.unwrap_or(1).clamp(1, MAX_PAGE as i64) as u64;
        let per_page = per_page
            .unwrap_or(DEFAULT_PER_PAGE as i64)
            .clamp(1, MAX_PER_PAGE as i64) as u64;
        Self { page, per_page }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }
}

/// Applies a [`PageWindow`] as `OFFSET`/`LIMIT` on any selectable query.
pub trait Paginate: QuerySelect + Sized {
    fn page_window(self, window: PageWindow) -> Self {
        self.offset(window.offset()).limit(window.per_page)
    }
}

impl<Q: QuerySelect> Paginate for Q {}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub window: PageWindow,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            window: self.window,
            total: self.total,
        }
    }

    pub fn meta(&self) -> Meta {
        Meta::new(self.window.page, self.window.per_page, self.total)
    }

    pub fn total_pages(&self) -> u64 {
        self.window.total_pages(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let window = PaginationQuery::default().window();
        assert_eq!(window, PageWindow { page: 1, per_page: 10 });
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn clamps_out_of_range_input() {
        let window = PageWindow::new(Some(-3), Some(0));
        assert_eq!(window, PageWindow { page: 1, per_page: 1 });

        let window = PageWindow::new(Some(2), Some(5_000));
        assert_eq!(window.per_page, MAX_PER_PAGE);
        assert_eq!(window.offset(), MAX_PER_PAGE);
    }

    #[test]
    fn huge_page_stays_in_offset_range() {
        let window = PageWindow::new(Some(i64::MAX), Some(100));
        assert_eq!(window.page, MAX_PAGE);
        assert!(window.offset() <= i64::MAX as u64);

        let window = PageWindow::new(Some(i64::MAX), Some(1));
        assert!(window.offset() <= i64::MAX as u64);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let window = PageWindow::new(Some(4), Some(25));
        assert_eq!(window.offset(), 75);
    }

    #[test]
    fn total_pages_rounds_up() {
        let window = PageWindow::new(Some(1), Some(3));
        assert_eq!(window.total_pages(0), 0);
        assert_eq!(window.total_pages(3), 1);
        assert_eq!(window.total_pages(7), 3);
    }

    #[test]
    fn blank_filter_is_ignored() {
        let query = PaginationQuery {
            filter: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(query.search_term(), None);

        let query = PaginationQuery {
            filter: Some(" reel ".into()),
            ..Default::default()
        };
        assert_eq!(query.search_term(), Some("reel"));
    }
}
