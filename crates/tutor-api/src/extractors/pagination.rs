//! Paging and sorting query parameters.

use tutor_core::error::AppError;
use tutor_core::result::AppResult;
use tutor_core::types::pagination::DEFAULT_PAGE_SIZE;
use tutor_core::types::{PageRequest, SortField};

/// Collects `page`, `size`, and repeated `sort` parameters.
///
/// `page` is zero-based on the wire.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    /// Zero-based page index.
    pub page: Option<u64>,
    /// Items per page.
    pub size: Option<u64>,
    /// `field,direction` entries in priority order.
    pub sort: Vec<SortField>,
}

impl PaginationParams {
    /// Whether `key` is a paging parameter rather than a criteria filter.
    pub fn is_paging_key(key: &str) -> bool {
        matches!(key, "page" | "size" | "sort")
    }

    /// Absorb one paging parameter.
    pub fn accept(&mut self, key: &str, raw: &str) -> AppResult<()> {
        match key {
            "page" => self.page = Some(parse_number(key, raw)?),
            "size" => self.size = Some(parse_number(key, raw)?),
            "sort" => self.sort.push(parse_sort(raw)?),
            other => {
                return Err(AppError::validation(format!(
                    "Unknown paging parameter '{other}'"
                )));
            }
        }
        Ok(())
    }

    /// Converts to a one-based `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        let page = self.page.unwrap_or(0).saturating_add(1);
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
        self.sort
            .into_iter()
            .fold(PageRequest::new(page, size), PageRequest::with_sort)
    }
}

fn parse_number(key: &str, raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid value '{raw}' for '{key}'")))
}

/// Parse `field,direction`, accepting the camelCase property name used in
/// JSON bodies.
fn parse_sort(raw: &str) -> AppResult<SortField> {
    let mut sort: SortField = raw.parse()?;
    sort.field = to_snake_case(&sort.field);
    Ok(sort)
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use tutor_core::types::SortDirection;

    use super::*;

    #[test]
    fn test_defaults_to_first_page() {
        let page = PaginationParams::default().into_page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert!(page.sort.is_empty());
    }

    #[test]
    fn test_zero_based_page_and_camel_case_sort() {
        let mut params = PaginationParams::default();
        params.accept("page", "2").expect("page");
        params.accept("size", "5").expect("size");
        params.accept("sort", "fullName,desc").expect("sort");
        params.accept("sort", "id").expect("sort");

        let page = params.into_page_request();
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 5);
        assert_eq!(page.sort[0].field, "full_name");
        assert_eq!(page.sort[0].direction, SortDirection::Desc);
        assert_eq!(page.sort[1], SortField::asc("id"));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let mut params = PaginationParams::default();
        assert!(params.accept("page", "-1").is_err());
        assert!(params.accept("sort", "score,up").is_err());
    }
}
