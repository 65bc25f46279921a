use fertibase_domain::{CatalogRecord, CategoryGroup, JobListing};
use std::collections::HashMap;

use super::search;

const ALL_CATEGORIES: &str = "All";

/// Partitions listings by category in first-seen order. Order inside a
/// group follows the input.
pub fn group_by_category(items: &[JobListing]) -> Vec<CategoryGroup<JobListing>> {
    let mut groups: Vec<CategoryGroup<JobListing>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for job in items {
        let label = job.group_label();
        match index.get(label) {
            Some(&idx) => groups[idx].items.push(job.clone()),
            None => {
                index.insert(label, groups.len());
                groups.push(CategoryGroup {
                    category: label.to_string(),
                    items: vec![job.clone()],
                });
            }
        }
    }

    groups
}

/// The category picker on the careers page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name,
        }
    }

    fn admits(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Named(name) => name == category,
        }
    }
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(value.to_string())
        }
    }
}

/// `"All"` followed by every group's category.
pub fn category_options<T>(groups: &[CategoryGroup<T>]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(groups.iter().map(|g| g.category.clone()))
        .collect()
}

/// Applies the category picker and the title search. Groups emptied by the
/// search stay in the result so the page can say there are no matching roles.
pub fn filter_groups<T: CatalogRecord>(
    groups: &[CategoryGroup<T>],
    selection: &CategorySelection,
    term: &str,
) -> Vec<CategoryGroup<T>> {
    groups
        .iter()
        .filter(|g| selection.admits(&g.category))
        .map(|g| CategoryGroup {
            category: g.category.clone(),
            items: search(&g.items, term),
        })
        .collect()
}
