use fertibase_application::use_cases::{
    category_options, filter_groups, group_by_category, CategorySelection,
};
use fertibase_domain::{CategoryGroup, JobListing};

mod helpers;
use helpers::job;

fn listings() -> Vec<JobListing> {
    vec![
        job("1", "Field Agronomist", Some("Field")),
        job("2", "Research Scientist", Some("R&D")),
        job("3", "Field Technician", Some("Field")),
        job("4", "Warehouse Helper", None),
        job("5", "Microbiologist", Some("R&D")),
    ]
}

#[test]
fn test_group_single_listing() {
    let jobs = vec![job("1", "Agronomist", Some("Field"))];

    let groups = group_by_category(&jobs);

    assert_eq!(
        groups,
        vec![CategoryGroup {
            category: "Field".to_string(),
            items: jobs.clone(),
        }]
    );
}

#[test]
fn test_group_order_is_first_seen() {
    let groups = group_by_category(&listings());

    let categories: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(categories, vec!["Field", "R&D", "Other"]);
}

#[test]
fn test_group_is_stable_within_category() {
    let groups = group_by_category(&listings());

    let field: Vec<_> = groups[0].items.iter().map(|j| j.id.as_str()).collect();
    let research: Vec<_> = groups[1].items.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(field, vec!["1", "3"]);
    assert_eq!(research, vec!["2", "5"]);
}

#[test]
fn test_group_partitions_without_loss() {
    let input = listings();
    let groups = group_by_category(&input);

    let mut regrouped: Vec<_> = groups
        .into_iter()
        .flat_map(|g| g.items)
        .map(|j| j.id.to_string())
        .collect();
    let mut expected: Vec<_> = input.iter().map(|j| j.id.to_string()).collect();
    regrouped.sort();
    expected.sort();
    assert_eq!(regrouped, expected);
}

#[test]
fn test_group_missing_and_blank_category_share_other() {
    let jobs = vec![job("1", "Driver", None), job("2", "Clerk", Some(""))];

    let groups = group_by_category(&jobs);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category, "Other");
    assert_eq!(groups[0].items.len(), 2);
}

#[test]
fn test_group_empty_input() {
    assert!(group_by_category(&[]).is_empty());
}

#[test]
fn test_category_options_start_with_all() {
    let groups = group_by_category(&listings());

    assert_eq!(category_options(&groups), vec!["All", "Field", "R&D", "Other"]);
}

#[test]
fn test_filter_groups_by_category() {
    let groups = group_by_category(&listings());

    let filtered = filter_groups(&groups, &CategorySelection::from("R&D"), "");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].category, "R&D");
    assert_eq!(filtered[0].items.len(), 2);
}

#[test]
fn test_filter_groups_all_with_search_keeps_empty_groups() {
    let groups = group_by_category(&listings());

    let filtered = filter_groups(&groups, &CategorySelection::All, "field");

    assert_eq!(filtered.len(), 3);
    assert_eq!(filtered[0].items.len(), 2);
    assert!(filtered[1].items.is_empty());
    assert!(filtered[2].items.is_empty());
}

#[test]
fn test_category_selection_parsing() {
    assert_eq!(CategorySelection::from("All"), CategorySelection::All);
    assert_eq!(CategorySelection::from(""), CategorySelection::All);
    assert_eq!(
        CategorySelection::from("Field"),
        CategorySelection::Named("Field".to_string())
    );
    assert_eq!(CategorySelection::default().label(), "All");
}
