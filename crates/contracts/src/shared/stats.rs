//! Aggregate counts for the stat-card row above each table.

use std::collections::BTreeMap;

use crate::domain::common::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl StatusCounts {
    pub fn of<E: Entity>(items: &[E]) -> Self {
        let active = items.iter().filter(|i| i.status().is_active()).count();
        Self {
            total: items.len(),
            active,
            inactive: items.len() - active,
        }
    }
}

/// Occurrences per key, ordered by key.
pub fn count_by<T, K, F>(items: &[T], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_vendor::aggregate::Vendor;
    use crate::domain::common::RecordStatus;

    #[test]
    fn counts_by_status() {
        let vendors = vec![
            Vendor {
                id: 1,
                ..Default::default()
            },
            Vendor {
                id: 2,
                status: RecordStatus::Inactive,
                ..Default::default()
            },
            Vendor {
                id: 3,
                ..Default::default()
            },
        ];
        assert_eq!(
            StatusCounts::of(&vendors),
            StatusCounts {
                total: 3,
                active: 2,
                inactive: 1
            }
        );
        assert_eq!(StatusCounts::of::<Vendor>(&[]), StatusCounts::default());
    }

    #[test]
    fn count_by_groups_and_orders() {
        let words = ["b", "a", "b", "c", "b"];
        let counts = count_by(&words, |w| w.to_string());
        let pairs: Vec<(String, usize)> = counts.into_iter().collect();
        assert_eq!(
            pairs,
            vec![("a".into(), 1), ("b".into(), 3), ("c".into(), 1)]
        );
    }
}
