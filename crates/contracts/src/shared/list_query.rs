//! Client-side search, dropdown filters and pagination over a fetched list.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::common::Entity;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];
/// Filter key every list understands: matches `RecordStatus::label()`.
pub const STATUS_FILTER: &str = "status";

/// Exact-match dropdown filter; an empty `options` list means "distinct values from data".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
}

impl FilterSpec {
    pub const fn fixed(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            options,
        }
    }

    pub const fn from_data(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            options: &[],
        }
    }
}

pub const STATUS_FILTER_SPEC: FilterSpec =
    FilterSpec::fixed(STATUS_FILTER, "Status", &["Active", "Inactive"]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    /// Active predicates only; "All" is represented by absence.
    pub filters: BTreeMap<String, String>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of the filtered list plus the counts the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub rows: Vec<T>,
    pub filtered: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// An empty value clears the filter.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value);
        }
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = effective_page_size(page_size);
        self.page = 1;
    }

    pub fn matches_search<E: Entity>(&self, item: &E) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches_filters<E: Entity>(&self, item: &E) -> bool {
        self.filters.iter().all(|(key, expected)| {
            filter_value_of(item, key).is_some_and(|actual| &actual == expected)
        })
    }

    pub fn matches<E: Entity>(&self, item: &E) -> bool {
        self.matches_search(item) && self.matches_filters(item)
    }

    pub fn filter<'a, E: Entity>(&self, items: &'a [E]) -> Vec<&'a E> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    pub fn apply<E: Entity>(&self, items: &[E]) -> PageSlice<E> {
        let filtered: Vec<E> = self.filter(items).into_iter().cloned().collect();
        let page_size = effective_page_size(self.page_size);
        let total_pages = total_pages(filtered.len(), page_size);
        // The list can shrink under the current page after a re-fetch.
        let page = self.page.clamp(1, total_pages);
        PageSlice {
            rows: paginate(&filtered, page, page_size),
            filtered: filtered.len(),
            page,
            page_size,
            total_pages,
        }
    }
}

fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

/// Status is filterable on every entity; everything else is entity-specific.
pub fn filter_value_of<E: Entity>(item: &E, key: &str) -> Option<String> {
    if key == STATUS_FILTER {
        Some(item.status().label().to_string())
    } else {
        item.filter_value(key)
    }
}

/// Slice `(page-1)*page_size .. page*page_size`; pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page_size = effective_page_size(page_size);
    let start = (page.max(1) - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// `ceil(count / page_size)`, at least 1 so the pager always reads "1 / 1".
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = effective_page_size(page_size);
    count.div_ceil(page_size).max(1)
}

/// Sorted distinct non-empty values of a filter key, for data-driven dropdowns.
pub fn distinct_values<E: Entity>(items: &[E], key: &str) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| filter_value_of(item, key))
        .filter(|v| !v.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::aggregate::Client;
    use crate::domain::common::RecordStatus;

    fn client(id: i64, name: &str, contact: &str, email: &str, city: &str) -> Client {
        Client {
            id,
            name: name.into(),
            contact_person: contact.into(),
            email: email.into(),
            phone: format!("555-010{id}"),
            city: city.into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Client> {
        vec![
            client(1, "Acme Foods", "Ravi Kumar", "ravi@acme.in", "Pune"),
            client(2, "Blue Ocean Traders", "Meera Shah", "sales@blueocean.com", "Mumbai"),
            client(3, "Crescent Mills", "Arjun Rao", "arjun@crescent.in", "Pune"),
            client(4, "Delta Packaging", "Sara Thomas", "info@ACMEgroup.com", "Chennai"),
        ]
    }

    #[test]
    fn search_matches_name_contact_or_email_case_insensitively() {
        let items = sample();
        let mut query = ListQuery::new();
        query.set_search("ACME");
        let ids: Vec<i64> = query.filter(&items).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4]);

        query.set_search("meera");
        assert_eq!(query.filter(&items).len(), 1);

        query.set_search("  ");
        assert_eq!(query.filter(&items).len(), items.len());

        // Phone numbers are shown but not searched.
        query.set_search("555-0101");
        assert!(query.filter(&items).is_empty());
    }

    #[test]
    fn row_count_equals_matching_records() {
        let items = sample();
        for term in ["a", "in", "pack", "zzz", "RAO", "555", "0103"] {
            let mut query = ListQuery::new();
            query.set_search(term);
            let expected = items
                .iter()
                .filter(|c| {
                    let t = term.to_lowercase();
                    c.name.to_lowercase().contains(&t)
                        || c.contact_person.to_lowercase().contains(&t)
                        || c.email.to_lowercase().contains(&t)
                })
                .count();
            assert_eq!(query.apply(&items).filtered, expected, "term {term}");
        }
    }

    #[test]
    fn filters_are_exact_and_combined() {
        let mut items = sample();
        items[2].status = RecordStatus::Inactive;
        let mut query = ListQuery::new();
        query.set_filter("city", "Pune");
        assert_eq!(query.filter(&items).len(), 2);
        query.set_filter(STATUS_FILTER, "Active");
        let ids: Vec<i64> = query.filter(&items).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1]);
        query.set_filter("city", "Pun");
        assert!(query.filter(&items).is_empty());
        query.set_filter("city", "");
        assert!(!query.filters.contains_key("city"));
    }

    #[test]
    fn search_and_filter_reset_page() {
        let mut query = ListQuery::new();
        query.set_page(3);
        query.set_search("x");
        assert_eq!(query.page, 1);
        query.set_page(2);
        query.set_filter("city", "Pune");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn pagination_slices_filtered_list() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3, 10), vec![21, 22, 23]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert_eq!(paginate(&items, 0, 10), paginate(&items, 1, 10));
        assert_eq!(paginate(&items, 1, 0).len(), DEFAULT_PAGE_SIZE);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn apply_reports_counts() {
        let items = sample();
        let mut query = ListQuery::new();
        query.set_page_size(3);
        query.set_page(2);
        let page = query.apply(&items);
        assert_eq!(page.filtered, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].id, 4);
    }

    #[test]
    fn apply_clamps_page_when_list_shrinks() {
        let items: Vec<Client> = (1..=11)
            .map(|id| client(id, "Mill", "Arjun", "a@mill.in", "Pune"))
            .collect();
        let mut query = ListQuery::new();
        query.set_page(2);
        assert_eq!(query.apply(&items).rows.len(), 1);

        let page = query.apply(&items[..10]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.filtered, 10);
    }

    #[test]
    fn distinct_values_are_sorted_and_unique() {
        let items = sample();
        assert_eq!(
            distinct_values(&items, "city"),
            vec!["Chennai", "Mumbai", "Pune"]
        );
        assert_eq!(distinct_values(&items, STATUS_FILTER), vec!["Active"]);
    }
}
