//! # Pagination Engine
//!
//! Converts a (count, startIndex) request into a skip/limit window over the
//! store and derives previous/next navigation links from a URL template.
//!
//! The parsing contract is forgiving: a missing, non-numeric, or non-positive
//! parameter falls back to its default rather than failing the request. This
//! asymmetry with the strict VIN check is intentional — best-effort paging vs
//! key-shape correctness.

use std::collections::HashMap;

/// Default page size if not specified.
pub const DEFAULT_COUNT: u64 = 10;

/// Default (first) page index. Pages are 1-based.
pub const DEFAULT_START_INDEX: u64 = 1;

/// A validated pagination request.
///
/// Both fields are strictly positive by construction, so the skip offset
/// can never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of results per page.
    pub count: u64,

    /// 1-based page index.
    pub start_index: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            start_index: DEFAULT_START_INDEX,
        }
    }
}

impl PageRequest {
    /// Parse `count` and `startIndex` from raw query parameters.
    ///
    /// Values that fail to parse or are not strictly positive are replaced
    /// by the defaults.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self {
            count: parse_positive(params.get("count")).unwrap_or(DEFAULT_COUNT),
            start_index: parse_positive(params.get("startIndex"))
                .unwrap_or(DEFAULT_START_INDEX),
        }
    }

    /// Number of documents to skip: `(startIndex - 1) * count`.
    ///
    /// Saturates on huge parameters; a saturated skip lands past any real
    /// collection and yields an empty page.
    pub fn skip(&self) -> u64 {
        (self.start_index - 1).saturating_mul(self.count)
    }

    /// Maximum number of documents to return.
    pub fn limit(&self) -> u64 {
        self.count
    }
}

fn parse_positive(raw: Option<&String>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n as u64)
}

/// Template for page navigation links over one resource.
#[derive(Debug, Clone)]
pub struct UrlTemplate {
    base: String,
}

impl UrlTemplate {
    /// `base` is the resource URL without query parameters,
    /// e.g. `http://127.0.0.1:8080/api/vehicles`.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Render the link for one page.
    pub fn page_url(&self, count: u64, start_index: u64) -> String {
        format!("{}?count={}&startIndex={}", self.base, count, start_index)
    }
}

/// Navigation links for one page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    /// Present iff `startIndex > 1`.
    pub prev: Option<String>,

    /// Present iff `total > count * startIndex`.
    pub next: Option<String>,
}

impl PageLinks {
    /// Derive the links for `page` given the total number of matching
    /// documents (ignoring pagination).
    ///
    /// A start index beyond the last page is not an error: it yields no
    /// next link and a prev link pointing at the preceding (possibly also
    /// empty) page.
    pub fn for_page(template: &UrlTemplate, page: &PageRequest, total: u64) -> Self {
        let prev = if page.start_index > 1 {
            Some(template.page_url(page.count, page.start_index - 1))
        } else {
            None
        };

        // Saturating product: once the window reaches u64::MAX it can never
        // be below the total, so next is correctly absent.
        let next = if total > page.count.saturating_mul(page.start_index) {
            Some(template.page_url(page.count, page.start_index + 1))
        } else {
            None
        };

        Self { prev, next }
    }
}
