// src/utils/pagination.rs

use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters for paginated listings.
///
/// `page` is kept as raw text: a missing, non-numeric or non-positive value
/// falls back to the first page.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Resolved 1-based page number.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|&page| page >= 1)
            .unwrap_or(1)
    }
}

/// Returns the items on `page` (1-based). Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE)
        .min(items.len());
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());

    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn page_length_follows_formula() {
        for len in [0usize, 1, 9, 10, 11, 25, 30] {
            let items: Vec<usize> = (0..len).collect();
            for page in 1..=5 {
                let expected = QUESTIONS_PER_PAGE.min(len.saturating_sub(QUESTIONS_PER_PAGE * (page - 1)));
                let slice = paginate(&items, page);

                assert_eq!(slice.len(), expected, "len={} page={}", len, page);
                if let Some(first) = slice.first() {
                    assert_eq!(*first, (page - 1) * QUESTIONS_PER_PAGE);
                }
            }
        }
    }

    #[test]
    fn second_page_is_exact_sub_range() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 2), &items[10..20]);
        assert_eq!(paginate(&items, 3), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_beyond_data_is_empty() {
        let items = vec!["a"; 3];
        assert!(paginate(&items, 2).is_empty());
        assert!(paginate(&items, usize::MAX).is_empty());
    }

    #[test]
    fn page_param_defaults_to_first_page() {
        assert_eq!(params(None).page(), 1);
        assert_eq!(params(Some("abc")).page(), 1);
        assert_eq!(params(Some("0")).page(), 1);
        assert_eq!(params(Some("-2")).page(), 1);
        assert_eq!(params(Some("")).page(), 1);
    }

    #[test]
    fn page_param_parses_numbers() {
        assert_eq!(params(Some("3")).page(), 3);
        assert_eq!(params(Some(" 2 ")).page(), 2);
    }
}
