//! Rules for the paginated transaction listing.

/// Page number used when `page` is missing or invalid.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `perPage` is missing or invalid.
pub const DEFAULT_PER_PAGE: i64 = 10;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Build from raw query-string values.
    ///
    /// Missing, non-numeric and non-positive values fall back to the defaults
    /// instead of failing the request.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            per_page: parse_positive(per_page).unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// Number of rows to skip: `(page - 1) * per_page`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// Total number of pages needed to show `total` rows.
    pub fn total_pages(&self, total: i64) -> i64 {
        total_pages(total, self.per_page)
    }
}

/// `ceil(total / per_page)`, or 0 when `per_page` is not positive.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if per_page <= 0 || total <= 0 {
        return 0;
    }
    total / per_page + i64::from(total % per_page != 0)
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A free-text search against title, description and price.
///
/// The text matches case-insensitively as a literal substring of `title` or
/// `description`. When the text is also a finite number, a record whose price
/// equals it exactly matches too.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    pub text: String,
    pub price: Option<f64>,
}

impl SearchTerm {
    /// Returns `None` for an absent or blank search.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let text = raw.map(str::trim).filter(|t| !t.is_empty())?;
        let price = text.parse::<f64>().ok().filter(|p| p.is_finite());
        Some(Self {
            text: text.to_string(),
            price,
        })
    }

    /// An `ILIKE` pattern matching the text anywhere in a column.
    pub fn like_pattern(&self) -> String {
        format!("%{}%", escape_like(&self.text))
    }
}

/// Escape `LIKE` metacharacters so user input matches literally.
///
/// Uses backslash, PostgreSQL's default `LIKE` escape character.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
