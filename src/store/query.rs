//! Pagination over a fully-computed match set.

use serde::{Deserialize, Serialize};

/// One page of results plus the total number of matches across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub total_count: usize,
}

/// Slice a fully-filtered match set down to the requested page.
///
/// `total_count` always reflects the complete match set, not the page.
/// Degenerate inputs never error: a negative `page` degrades to an empty
/// page, a non-positive `page_size` to the full unbounded result, and a page
/// past the end to an empty page.
pub fn paginate<T>(mut matches: Vec<T>, page: i64, page_size: i64) -> PageResult<T> {
    let total = matches.len();
    let (from, to) = page_bounds(page, page_size, total);
    PageResult {
        data: matches.drain(from..to).collect(),
        total_count: total,
    }
}

fn page_bounds(page: i64, page_size: i64, total: usize) -> (usize, usize) {
    if page < 0 {
        return (0, 0);
    }
    if page_size <= 0 {
        return (0, total);
    }
    let from = (page as u128)
        .saturating_mul(page_size as u128)
        .min(total as u128) as usize;
    let to = from
        .saturating_add(usize::try_from(page_size).unwrap_or(usize::MAX))
        .min(total);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn slices_the_requested_page() {
        let result = paginate(items(5), 1, 2);
        assert_eq!(result.data, vec![2, 3]);
        assert_eq!(result.total_count, 5);
    }

    #[test]
    fn last_page_may_be_short() {
        let result = paginate(items(5), 2, 2);
        assert_eq!(result.data, vec![4]);
        assert_eq!(result.total_count, 5);
    }

    #[test]
    fn page_past_the_end_is_empty_with_total_intact() {
        let result = paginate(items(3), 5, 10);
        assert!(result.data.is_empty());
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn negative_page_degrades_to_empty() {
        let result = paginate(items(3), -1, 10);
        assert!(result.data.is_empty());
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn non_positive_page_size_degrades_to_full_result() {
        let result = paginate(items(3), 0, 0);
        assert_eq!(result.data, vec![0, 1, 2]);
        assert_eq!(result.total_count, 3);

        let result = paginate(items(3), 7, -5);
        assert_eq!(result.data, vec![0, 1, 2]);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let result = paginate(items(3), i64::MAX, i64::MAX);
        assert!(result.data.is_empty());
        assert_eq!(result.total_count, 3);
    }
}
