//! Listing Pipeline
//!
//! Pure logic behind the food listing: owner exclusion, text filter,
//! price sort, pagination and request generations.

use std::cmp::Ordering;
use std::ops::Range;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::FoodItem;

// ========================
// Sorting
// ========================

/// Price sort state, cycled by the sort toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// none -> ascending -> descending -> none
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::None => "Sort by Price",
            SortDirection::Ascending => "Price: Low to High",
            SortDirection::Descending => "Price: High to Low",
        }
    }

    pub fn is_active(self) -> bool {
        self != SortDirection::None
    }
}

/// Parse the longest numeric prefix, like JavaScript's `parseFloat`.
pub fn parse_price(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    // Optional exponent, only taken when it has digits
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// Unparseable prices go last in either direction.
fn compare_price(a: &FoodItem, b: &FoodItem, direction: SortDirection) -> Ordering {
    match (parse_price(&a.price), parse_price(&b.price)) {
        (Some(x), Some(y)) => match direction {
            SortDirection::Descending => y.total_cmp(&x),
            _ => x.total_cmp(&y),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ========================
// Filtering
// ========================

/// Case-insensitive substring match on the item name
pub fn matches_search(item: &FoodItem, query: &str) -> bool {
    query.is_empty() || item.name.to_lowercase().contains(&query.to_lowercase())
}

/// Items as displayed: owner exclusion, text filter, then stable price sort.
pub fn visible_foods(
    items: &[FoodItem],
    owner_email: Option<&str>,
    query: &str,
    sort: SortDirection,
) -> Vec<FoodItem> {
    let mut visible: Vec<FoodItem> = items
        .iter()
        .filter(|item| owner_email.map_or(true, |owner| item.owner_email != owner))
        .filter(|item| matches_search(item, query))
        .cloned()
        .collect();

    if sort.is_active() {
        visible.sort_by(|a, b| compare_price(a, b, sort));
    }
    visible
}

// ========================
// Pagination
// ========================

/// Page position within a listing of `total_count` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    total_count: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

impl Pagination {
    pub fn new(page_size: usize, total_count: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            total_count,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    /// One entry per page button, no windowing
    pub fn page_numbers(&self) -> Range<usize> {
        0..self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page_index -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page_index += 1;
        }
    }

    pub fn go_to(&mut self, page_index: usize) {
        if page_index < self.total_pages() {
            self.page_index = page_index;
        }
    }

    /// Changing the page size always returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    pub fn set_total_count(&mut self, total_count: usize) {
        self.total_count = total_count;
    }
}

// ========================
// Request Generations
// ========================

/// Identifies one listing fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Hands out tokens so only the newest response gets applied
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, name: &str, price: &str, owner: &str) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            description: String::new(),
            image_url: None,
            chef_name: None,
            added_by_name: None,
            owner_email: owner.to_string(),
            quantity: 1,
            sold_count: None,
        }
    }

    fn ids(items: &[FoodItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn menu() -> Vec<FoodItem> {
        vec![
            food("1", "Pizza Supreme", "9.99", "a@x.com"),
            food("2", "Burger", "5.00", "b@x.com"),
            food("3", "Pasta", "12.50", "c@x.com"),
            food("4", "Salad", "5.00", "b@x.com"),
        ]
    }

    #[test]
    fn test_own_items_excluded() {
        let items = vec![
            food("1", "Pizza", "9.99", "a@x.com"),
            food("2", "Burger", "5.00", "b@x.com"),
        ];
        let shown = visible_foods(&items, Some("a@x.com"), "", SortDirection::None);
        assert_eq!(ids(&shown), vec!["2"]);
    }

    #[test]
    fn test_no_user_keeps_everything() {
        let shown = visible_foods(&menu(), None, "", SortDirection::None);
        assert_eq!(ids(&shown), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_owner_never_displayed_under_any_filter() {
        for query in ["", "p", "PIZ", "a"] {
            for sort in [SortDirection::None, SortDirection::Ascending, SortDirection::Descending] {
                let shown = visible_foods(&menu(), Some("b@x.com"), query, sort);
                assert!(shown.iter().all(|i| i.owner_email != "b@x.com"));
            }
        }
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let shown = visible_foods(&menu(), None, "piz", SortDirection::None);
        assert_eq!(ids(&shown), vec!["1"]);
        let shown = visible_foods(&menu(), None, "SUPREME", SortDirection::None);
        assert_eq!(ids(&shown), vec!["1"]);
        assert!(visible_foods(&menu(), None, "sushi", SortDirection::None).is_empty());
    }

    #[test]
    fn test_sort_ascending_is_stable() {
        let shown = visible_foods(&menu(), None, "", SortDirection::Ascending);
        // Burger and Salad tie at 5.00 and keep fetch order
        assert_eq!(ids(&shown), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_sort_descending() {
        let shown = visible_foods(&menu(), None, "", SortDirection::Descending);
        assert_eq!(ids(&shown), vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_sort_cycle_returns_to_fetch_order() {
        let items = menu();
        let mut sort = SortDirection::None;
        for _ in 0..3 {
            sort = sort.next();
        }
        assert_eq!(sort, SortDirection::None);
        assert_eq!(visible_foods(&items, None, "", sort), items);
    }

    #[test]
    fn test_unparseable_prices_sort_last() {
        let items = vec![
            food("1", "Mystery", "ask", "x"),
            food("2", "Tea", "2", "x"),
            food("3", "Cake", "7", "x"),
        ];
        let asc = visible_foods(&items, None, "", SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["2", "3", "1"]);
        let desc = visible_foods(&items, None, "", SortDirection::Descending);
        assert_eq!(ids(&desc), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_parse_price_prefix_semantics() {
        assert_eq!(parse_price("9.99"), Some(9.99));
        assert_eq!(parse_price("  5.00 USD"), Some(5.0));
        assert_eq!(parse_price(".5"), Some(0.5));
        assert_eq!(parse_price("3."), Some(3.0));
        assert_eq!(parse_price("-2.5"), Some(-2.5));
        assert_eq!(parse_price("1e2"), Some(100.0));
        assert_eq!(parse_price("4e"), Some(4.0));
        assert_eq!(parse_price("$9"), None);
        assert_eq!(parse_price("."), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(SortDirection::None.label(), "Sort by Price");
        assert_eq!(SortDirection::Ascending.label(), "Price: Low to High");
        assert_eq!(SortDirection::Descending.label(), "Price: High to Low");
    }

    #[test]
    fn test_total_pages_matches_buttons() {
        for page_size in [5, 10] {
            for total in [0, 1, 4, 5, 6, 10, 11, 49, 50, 51] {
                let pagination = Pagination::new(page_size, total);
                let expected = (total + page_size - 1) / page_size;
                assert_eq!(pagination.total_pages(), expected);
                assert_eq!(pagination.page_numbers().len(), expected);
            }
        }
    }

    #[test]
    fn test_prev_next_bounds() {
        let mut p = Pagination::new(5, 12);
        assert!(!p.has_prev());
        assert!(p.has_next());
        p.prev();
        assert_eq!(p.page_index(), 0);

        p.next();
        p.next();
        assert_eq!(p.page_index(), 2);
        assert!(!p.has_next());
        p.next();
        assert_eq!(p.page_index(), 2);
        assert!(p.has_prev());
    }

    #[test]
    fn test_no_pages_disables_both() {
        let p = Pagination::new(10, 0);
        assert!(!p.has_prev());
        assert!(!p.has_next());
        assert!(p.page_numbers().is_empty());
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut p = Pagination::new(5, 20);
        p.go_to(3);
        assert_eq!(p.page_index(), 3);
        p.go_to(4);
        assert_eq!(p.page_index(), 3);
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut p = Pagination::new(5, 40);
        p.go_to(6);
        p.set_page_size(10);
        assert_eq!(p.page_index(), 0);
        assert_eq!(p.total_pages(), 4);
        p.set_page_size(10);
        assert_eq!(p.page_index(), 0);
    }

    #[test]
    fn test_only_latest_request_is_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        assert!(tracker.is_current(first));
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
