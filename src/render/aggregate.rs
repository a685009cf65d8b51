use std::cmp::Ordering;
use std::collections::HashMap;

use crate::slug::fold_accents;
use crate::types::Match;

/// All matches sharing one exact category label, in ascending date order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub matches: Vec<Match>,
}

/// Locale-like ordering: accents and case folded first, then case-insensitive,
/// exact bytes as the final tie-break
pub fn compare_categories(a: &str, b: &str) -> Ordering {
    fold_accents(a)
        .cmp(&fold_accents(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Group records by exact category, order groups alphabetically and sort each by date.
///
/// The date sort is stable, so records with equal instants keep their input order.
pub fn group_by_category(matches: &[Match]) -> Vec<CategoryGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for record in matches {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            groups.push(CategoryGroup {
                category: record.category.clone(),
                matches: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].matches.push(record.clone());
    }

    groups.sort_by(|a, b| compare_categories(&a.category, &b.category));
    for group in &mut groups {
        group.matches.sort_by_key(|m| m.date);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn record(id: &str, category: &str, date: &str) -> Match {
        Match {
            id: id.to_string(),
            title: id.to_string(),
            category: category.to_string(),
            category_slug: category.to_lowercase(),
            date: DateTime::parse_from_rfc3339(date).unwrap().with_timezone(&Utc),
            url: format!("matches/{}.html", id),
            slug: id.to_string(),
        }
    }

    #[test]
    fn test_categories_alphabetical() {
        let groups = group_by_category(&[
            record("b1", "B", "2025-09-07T13:00:00Z"),
            record("a1", "A", "2025-09-07T13:00:00Z"),
        ]);
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_case_insensitive_ordering() {
        let groups = group_by_category(&[
            record("x", "basketball", "2025-09-07T13:00:00Z"),
            record("y", "Football", "2025-09-07T13:00:00Z"),
            record("z", "Athletics", "2025-09-07T13:00:00Z"),
        ]);
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Athletics", "basketball", "Football"]);
    }

    #[test]
    fn test_accented_categories_sort_with_base_letters() {
        let groups = group_by_category(&[
            record("1", "Super Lig", "2025-09-07T13:00:00Z"),
            record("2", "Série A", "2025-09-07T13:00:00Z"),
            record("3", "Eredivisie", "2025-09-07T13:00:00Z"),
            record("4", "Émirats League", "2025-09-07T13:00:00Z"),
        ]);
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Émirats League", "Eredivisie", "Série A", "Super Lig"]);
    }

    #[test]
    fn test_accent_only_difference_is_deterministic() {
        assert_eq!(compare_categories("Serie A", "Série A"), Ordering::Less);
        assert_eq!(compare_categories("Série A", "Serie A"), Ordering::Greater);
    }

    #[test]
    fn test_sorted_by_date_and_stable() {
        let groups = group_by_category(&[
            record("late", "UEFA", "2025-09-07T16:00:00Z"),
            record("tie-first", "UEFA", "2025-09-07T13:00:00Z"),
            record("tie-second", "UEFA", "2025-09-07T13:00:00Z"),
        ]);
        assert_eq!(groups.len(), 1);
        let ids: Vec<_> = groups[0].matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["tie-first", "tie-second", "late"]);
    }

    #[test]
    fn test_exact_category_keys() {
        let groups = group_by_category(&[
            record("a", "Tennis", "2025-09-07T13:00:00Z"),
            record("b", "tennis", "2025-09-07T13:00:00Z"),
        ]);
        assert_eq!(groups.len(), 2);
    }
}
