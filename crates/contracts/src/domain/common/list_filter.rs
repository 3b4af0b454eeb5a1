//! List-filter-render pipeline shared by every list page.
//!
//! A page keeps its dataset untouched and derives the visible list from the
//! current filter state on every change:
//!
//! ```text
//! dataset ──► FilterChain (search, category, ...) ──► ListView::Rows | ListView::Empty
//! ```
//!
//! Predicates are independent and conjunctive; the derived list always keeps
//! the source order.

use super::AggregateRoot;

/// Selector values that disable a categorical predicate (compared
/// case-insensitively).
pub const ALL_SENTINELS: [&str; 2] = ["all", "any"];

/// Types whose text fields take part in free-text search
pub trait Searchable {
    /// Fields matched against the search text
    fn search_fields(&self) -> Vec<&str>;

    /// True when any search field contains `filter` (case-insensitive)
    fn matches_filter(&self, filter: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| text_matches(field, filter))
    }
}

/// Types with a single categorical field (category, status, ...)
pub trait Categorized {
    fn category_key(&self) -> &str;
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn text_matches(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when the selector bypasses the categorical predicate.
pub fn is_all_selector(selector: &str) -> bool {
    let selector = selector.trim();
    selector.is_empty()
        || ALL_SENTINELS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(selector))
}

/// Ordered chain of predicates; a record is kept when every predicate holds.
pub struct FilterChain<'a, T> {
    predicates: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<'a, T> Default for FilterChain<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FilterChain<'a, T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add an arbitrary predicate
    pub fn with(mut self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Number of active predicates
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p(item))
    }

    /// Derive the visible list, preserving source order
    pub fn apply(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

impl<'a, T: Searchable> FilterChain<'a, T> {
    /// Free-text predicate; skipped when `text` is empty
    pub fn search(self, text: &'a str) -> Self {
        if text.is_empty() {
            return self;
        }
        self.with(move |item: &T| item.matches_filter(text))
    }
}

impl<'a, T: Categorized> FilterChain<'a, T> {
    /// Equality predicate on the categorical field; skipped for "all"/"any"
    pub fn category(self, selector: &'a str) -> Self {
        if is_all_selector(selector) {
            return self;
        }
        let selector = selector.trim();
        self.with(move |item: &T| item.category_key().eq_ignore_ascii_case(selector))
    }
}

/// Result of the render stage: either rows or the fixed empty-state message
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    Rows(Vec<T>),
    Empty(&'static str),
}

impl<T> ListView<T> {
    pub fn from_rows(rows: Vec<T>, empty_message: &'static str) -> Self {
        if rows.is_empty() {
            ListView::Empty(empty_message)
        } else {
            ListView::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[T] {
        match self {
            ListView::Rows(rows) => rows,
            ListView::Empty(_) => &[],
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            ListView::Rows(_) => None,
            ListView::Empty(msg) => Some(*msg),
        }
    }
}

impl<T: AggregateRoot> ListView<T> {
    /// Use the aggregate's own empty-state message
    pub fn for_aggregate(rows: Vec<T>) -> Self {
        Self::from_rows(rows, T::empty_message())
    }
}

/// Distinct categories in first-appearance order, prefixed with `all_label`
pub fn distinct_categories<T: Categorized>(items: &[T], all_label: &str) -> Vec<String> {
    let mut out = vec![all_label.to_string()];
    for item in items {
        let key = item.category_key();
        if !out.iter().any(|c| c == key) {
            out.push(key.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        note: &'static str,
        kind: &'static str,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.note]
        }
    }

    impl Categorized for Item {
        fn category_key(&self) -> &str {
            self.kind
        }
    }

    fn dataset() -> Vec<Item> {
        vec![
            Item { name: "Alpha", note: "first", kind: "Red" },
            Item { name: "Beta", note: "second", kind: "Blue" },
            Item { name: "Gamma", note: "alpha-ish", kind: "Red" },
            Item { name: "Delta", note: "fourth", kind: "Green" },
        ]
    }

    #[test]
    fn test_text_matches_is_case_insensitive() {
        assert!(text_matches("Bob The Builder", "bob"));
        assert!(text_matches("bob@example.com", "EXAMPLE"));
        assert!(text_matches("anything", ""));
        assert!(!text_matches("Alice", "bob"));
    }

    #[test]
    fn test_all_selector_variants() {
        assert!(is_all_selector("all"));
        assert!(is_all_selector("All"));
        assert!(is_all_selector("ANY"));
        assert!(is_all_selector(""));
        assert!(!is_all_selector("Active"));
    }

    #[test]
    fn test_empty_chain_keeps_everything() {
        let chain = FilterChain::<Item>::new().search("").category("all");
        assert!(chain.is_empty());
        assert_eq!(chain.apply(&dataset()), dataset());
    }

    #[test]
    fn test_search_over_several_fields() {
        let out = FilterChain::<Item>::new().search("alpha").apply(&dataset());
        let names: Vec<&str> = out.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let out = FilterChain::<Item>::new()
            .search("a")
            .category("red")
            .apply(&dataset());
        let names: Vec<&str> = out.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);

        let out = FilterChain::<Item>::new()
            .search("beta")
            .category("Red")
            .apply(&dataset());
        assert!(out.is_empty());
    }

    #[test]
    fn test_result_is_ordered_subset_without_duplicates() {
        let data = dataset();
        let chain = FilterChain::<Item>::new().search("e");
        let out = chain.apply(&data);

        let mut cursor = 0;
        for item in &out {
            let pos = data[cursor..]
                .iter()
                .position(|d| d == item)
                .map(|p| p + cursor)
                .expect("item must come from the dataset, in order");
            cursor = pos + 1;
        }
        let expected: Vec<Item> = data.iter().filter(|i| chain.matches(i)).cloned().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let chain = FilterChain::<Item>::new().search("a").category("Red");
        let once = chain.apply(&dataset());
        let twice = chain.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_list_view_empty_state() {
        let view: ListView<Item> = ListView::from_rows(Vec::new(), "Nothing here.");
        assert_eq!(view.empty_message(), Some("Nothing here."));
        assert!(view.rows().is_empty());

        let view = ListView::from_rows(dataset(), "Nothing here.");
        assert_eq!(view.empty_message(), None);
        assert_eq!(view.rows().len(), 4);
    }

    #[test]
    fn test_distinct_categories_in_source_order() {
        let cats = distinct_categories(&dataset(), "All");
        assert_eq!(cats, vec!["All", "Red", "Blue", "Green"]);
    }
}
