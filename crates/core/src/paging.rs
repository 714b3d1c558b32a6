//! In-memory pagination over pre-ordered listings.
//!
//! Repositories return fully ordered sequences; handlers slice them into
//! page views here. The page number arrives from an untrusted query string,
//! so parsing and range handling are total: every input maps to a valid
//! page and no failure is observable from the outside.

use serde::Serialize;

/// Videos shown per page on the public subject detail listing.
pub const SUBJECT_VIDEOS_PAGE_SIZE: usize = 10;

/// Videos shown per page on the admin video listing.
pub const ADMIN_VIDEOS_PAGE_SIZE: usize = 15;

/// A bounded slice of an ordered listing plus navigation metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number actually served (after defaulting/clamping).
    pub page: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Parse a raw `?page=` query value into a 1-indexed page number.
///
/// Missing, non-numeric, zero, and negative values all default to page 1.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Slice `items` into the requested page.
///
/// A request past the last page is clamped to the last page. An empty
/// input yields a single empty page reporting no neighbours either way.
pub fn paginate<T>(items: Vec<T>, page_size: usize, requested: u64) -> Page<T> {
    debug_assert!(page_size > 0, "page size must be positive");

    let total_pages = (items.len().div_ceil(page_size)).max(1) as u64;
    let page = requested.clamp(1, total_pages);
    let start = (page - 1) as usize * page_size;

    Page {
        items: items.into_iter().skip(start).take(page_size).collect(),
        page,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_missing_defaults_to_one() {
        assert_eq!(parse_page(None), 1);
    }

    #[test]
    fn parse_non_numeric_defaults_to_one() {
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("1.5")), 1);
    }

    #[test]
    fn parse_zero_and_negative_default_to_one() {
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
    }

    #[test]
    fn parse_valid_number() {
        assert_eq!(parse_page(Some("7")), 7);
        assert_eq!(parse_page(Some(" 2 ")), 2);
    }

    #[test]
    fn twenty_three_items_page_three() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(items, 10, 3);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn first_page_of_many() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(items, 10, 1);
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
        assert!(!page.has_previous);
        assert!(page.has_next);
    }

    #[test]
    fn request_past_last_page_clamps() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(items, 10, 99);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![21, 22, 23]);
    }

    #[test]
    fn empty_listing_yields_single_empty_page() {
        let page = paginate(Vec::<u32>::new(), 10, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let items: Vec<u32> = (1..=20).collect();
        let page = paginate(items, 10, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert!(!page.has_next);
    }

    #[test]
    fn pages_partition_the_input_in_order() {
        let items: Vec<u32> = (1..=23).collect();
        let mut reassembled = Vec::new();
        for p in 1..=3 {
            reassembled.extend(paginate(items.clone(), 10, p).items);
        }
        assert_eq!(reassembled, items);
    }
}
