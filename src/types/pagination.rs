//! Pagination types for list endpoints.
//!
//! `page` and `size` arrive as loosely-typed query strings. They are resolved
//! once per request into an offset/limit window that every list query uses
//! unchanged.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PAGE_PARAM, SIZE_PARAM};

/// Raw pagination query parameters, exactly as the client sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number (1-based). `0` returns the whole collection.
    #[param(example = "1")]
    pub page: Option<String>,
    /// Number of items per page.
    #[param(example = "5")]
    pub size: Option<String>,
}

impl PaginationQuery {
    /// Build from decoded query pairs. The first occurrence of a key wins.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key.as_ref() == name)
                .map(|(_, value)| value.as_ref().to_string())
        };

        Self {
            page: first(PAGE_PARAM),
            size: first(SIZE_PARAM),
        }
    }

    /// Resolve into the offset/limit window.
    pub fn resolve(&self) -> Pagination {
        Pagination::resolve(self.page.as_deref(), self.size.as_deref())
    }
}

/// Resolved offset/limit window applied to a top-level collection.
///
/// `limit == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: Option<u64>,
}

impl Pagination {
    /// Derive the window from raw `page`/`size` inputs. Never fails.
    pub fn resolve(page: Option<&str>, size: Option<&str>) -> Self {
        let mut page = page.and_then(parse_leading_int).unwrap_or(DEFAULT_PAGE_NUMBER);
        let mut size = size.and_then(parse_leading_int).unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 0 {
            page = DEFAULT_PAGE_NUMBER;
        }
        if size < 0 {
            size = DEFAULT_PAGE_SIZE;
        }

        if page == 0 {
            return Self::unbounded();
        }

        // Both values stay within i64 so every SQL driver can bind them.
        let offset = size.saturating_mul(page - 1);
        Self {
            offset: offset.unsigned_abs(),
            limit: Some(size.unsigned_abs()),
        }
    }

    /// Window covering the whole collection.
    pub fn unbounded() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit.is_none()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Parse the leading integer of `input`: optional whitespace, optional sign,
/// then digits. Anything after the digits is ignored.
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(offset: u64, limit: u64) -> Pagination {
        Pagination {
            offset,
            limit: Some(limit),
        }
    }

    #[test]
    fn missing_params_use_defaults() {
        assert_eq!(Pagination::resolve(None, None), window(0, 5));
        assert_eq!(Pagination::default(), window(0, 5));
    }

    #[test]
    fn non_numeric_params_use_defaults() {
        for junk in ["", "abc", "  ", "-", "+", "NaN", "x12"] {
            assert_eq!(Pagination::resolve(Some(junk), None), window(0, 5), "page={junk:?}");
            assert_eq!(Pagination::resolve(None, Some(junk)), window(0, 5), "size={junk:?}");
        }
    }

    #[test]
    fn leading_integer_is_parsed() {
        assert_eq!(Pagination::resolve(Some("2abc"), Some("10.9")), window(10, 10));
        assert_eq!(Pagination::resolve(Some(" 3"), Some("+4")), window(8, 4));
    }

    #[test]
    fn negative_page_behaves_like_missing_page() {
        assert_eq!(
            Pagination::resolve(Some("-4"), Some("7")),
            Pagination::resolve(None, Some("7"))
        );
    }

    #[test]
    fn negative_size_behaves_like_missing_size() {
        assert_eq!(
            Pagination::resolve(Some("3"), Some("-1")),
            Pagination::resolve(Some("3"), None)
        );
        assert_eq!(Pagination::resolve(Some("3"), Some("-1")), window(10, 5));
    }

    #[test]
    fn page_zero_fetches_everything() {
        for size in [None, Some("1"), Some("50"), Some("-2"), Some("junk")] {
            let pagination = Pagination::resolve(Some("0"), size);
            assert_eq!(pagination, Pagination::unbounded());
            assert!(pagination.is_unbounded());
        }
        assert_eq!(Pagination::resolve(Some("-0"), None), Pagination::unbounded());
    }

    #[test]
    fn size_zero_is_preserved() {
        assert_eq!(Pagination::resolve(Some("2"), Some("0")), window(0, 0));
    }

    #[test]
    fn offsets_follow_page_and_size() {
        assert_eq!(Pagination::resolve(Some("2"), Some("5")), window(5, 5));
        assert_eq!(Pagination::resolve(Some("3"), Some("10")), window(20, 10));
        assert_eq!(Pagination::resolve(Some("1"), Some("25")), window(0, 25));
    }

    #[test]
    fn out_of_range_input_falls_back_to_default() {
        let huge = "99999999999999999999999";
        assert_eq!(Pagination::resolve(Some(huge), None), window(0, 5));
    }

    #[test]
    fn huge_windows_are_capped_at_i64_max() {
        let cap = i64::MAX as u64;
        assert_eq!(
            Pagination::resolve(Some("9223372036854775807"), Some("9223372036854775807")),
            window(cap, cap)
        );
        assert_eq!(
            Pagination::resolve(Some("9223372036854775807"), Some("2")),
            window(cap, 2)
        );
        assert_eq!(
            Pagination::resolve(Some("3"), Some("9223372036854775807")),
            window(cap, cap)
        );
    }

    #[test]
    fn query_pairs_take_first_occurrence() {
        let pairs = vec![
            ("size".to_string(), "3".to_string()),
            ("page".to_string(), "2".to_string()),
            ("page".to_string(), "9".to_string()),
        ];
        let query = PaginationQuery::from_pairs(&pairs);
        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.resolve(), window(3, 3));
        assert_eq!(PaginationQuery::from_pairs::<&str, &str>(&[]).resolve(), window(0, 5));
    }
}
