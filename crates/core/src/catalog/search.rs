//! Product search parameters: sort order, pagination and page counts.
//!
//! Pure data and arithmetic. The SQL backends turn a [`SearchQuery`] into a
//! parameterized statement.

use serde::{Deserialize, Serialize};

/// Page size used by the storefront search when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Ordering applied to product search results.
///
/// Ties are broken by product identifier, so equal keys keep insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    NameAsc,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    /// Maps the numeric order code used by the storefront (`o` query parameter).
    ///
    /// 1 sorts by name, 2 by ascending price, 3 by descending price. Any other
    /// code falls back to name.
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => SortOrder::PriceAsc,
            3 => SortOrder::PriceDesc,
            _ => SortOrder::NameAsc,
        }
    }

    /// Returns the numeric order code.
    pub fn code(&self) -> i64 {
        match self {
            SortOrder::NameAsc => 1,
            SortOrder::PriceAsc => 2,
            SortOrder::PriceDesc => 3,
        }
    }

    /// Returns the SQL `ORDER BY` clause for this order over the `p` product alias.
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            SortOrder::NameAsc => "p.nome ASC, p.id ASC",
            SortOrder::PriceAsc => "p.preco ASC, p.id ASC",
            SortOrder::PriceDesc => "p.preco DESC, p.id ASC",
        }
    }
}

/// A 1-based page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Page {
    /// Creates a page, clamping the number and size to at least 1.
    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }

    /// Row offset of the first result on this page: `(number - 1) * size`.
    pub fn offset(&self) -> u64 {
        u64::from(self.number.saturating_sub(1)) * u64::from(self.size)
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Number of pages needed to show `total` results, `ceil(total / page_size)`.
pub fn page_count(total: u64, page_size: u32) -> u64 {
    total.div_ceil(u64::from(page_size.max(1)))
}

/// A product search over name and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub page: Page,
    pub order: SortOrder,
    /// Restricts results to one category when set.
    pub category_id: Option<i64>,
}

impl SearchQuery {
    /// Creates a search for `term` on the first page, sorted by name.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            page: Page::default(),
            order: SortOrder::default(),
            category_id: None,
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    /// The `LIKE` pattern matching the term anywhere in a column.
    pub fn like_pattern(&self) -> String {
        like_pattern(&self.term)
    }
}

/// Wraps a search term in `%` wildcards.
pub fn like_pattern(term: &str) -> String {
    format!("%{term}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_from_code() {
        assert_eq!(SortOrder::from_code(1), SortOrder::NameAsc);
        assert_eq!(SortOrder::from_code(2), SortOrder::PriceAsc);
        assert_eq!(SortOrder::from_code(3), SortOrder::PriceDesc);
    }

    #[test]
    fn test_unknown_sort_code_falls_back_to_name() {
        assert_eq!(SortOrder::from_code(0), SortOrder::NameAsc);
        assert_eq!(SortOrder::from_code(99), SortOrder::NameAsc);
        assert_eq!(SortOrder::from_code(-2), SortOrder::NameAsc);
    }

    #[test]
    fn test_order_by_clause_breaks_ties_by_id() {
        assert!(SortOrder::PriceDesc
            .order_by_clause()
            .ends_with("p.id ASC"));
        assert!(SortOrder::PriceAsc.order_by_clause().starts_with("p.preco ASC"));
    }

    #[test]
    fn test_page_offsets() {
        assert_eq!(Page::new(1, 6).offset(), 0);
        assert_eq!(Page::new(2, 6).offset(), 6);
        assert_eq!(Page::new(3, 6).offset(), 12);
    }

    #[test]
    fn test_page_clamps_to_one() {
        let page = Page::new(0, 0);
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 6), 0);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(13, 6), 3);
    }

    #[test]
    fn test_page_count_zero_size() {
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_like_pattern() {
        assert_eq!(SearchQuery::new("abc").like_pattern(), "%abc%");
        assert_eq!(SearchQuery::new("").like_pattern(), "%%");
    }

    #[test]
    fn test_search_query_builders() {
        let query = SearchQuery::new("caneca")
            .with_page(Page::new(2, 10))
            .with_order(SortOrder::PriceDesc)
            .with_category(Some(4));

        assert_eq!(query.page.offset(), 10);
        assert_eq!(query.order, SortOrder::PriceDesc);
        assert_eq!(query.category_id, Some(4));
    }
}
