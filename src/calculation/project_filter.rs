//! Project category filtering.

use crate::models::Project;

/// The wildcard category that matches every project.
pub const ALL_CATEGORIES: &str = "All";

/// Returns the projects in `category`, preserving content order.
///
/// [`ALL_CATEGORIES`] or a blank category returns every project. Matching is
/// exact.
///
/// # Example
///
/// ```
/// use portfolio_stats::calculation::filter_projects;
/// use portfolio_stats::models::{Project, ProjectLinks};
///
/// let project = |id: &str, category: &str| Project {
///     id: id.to_string(),
///     title: id.to_string(),
///     category: category.to_string(),
///     description: String::new(),
///     long_description: None,
///     technologies: vec![],
///     features: vec![],
///     links: ProjectLinks::default(),
/// };
/// let projects = vec![project("a", "Frontend"), project("b", "Backend")];
///
/// assert_eq!(filter_projects(&projects, "All").len(), 2);
/// assert_eq!(filter_projects(&projects, "Backend")[0].id, "b");
/// ```
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    let category = category.trim();
    if category.is_empty() || category == ALL_CATEGORIES {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| p.category == category).collect()
}

/// Returns the distinct project categories in first-seen order.
pub fn project_categories(projects: &[Project]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for project in projects {
        if !categories.contains(&project.category.as_str()) {
            categories.push(&project.category);
        }
    }
    categories
}

/// Returns the filter tabs: "All" followed by each distinct category.
///
/// A project whose category is literally "All" does not add a second tab.
pub fn category_tabs(projects: &[Project]) -> Vec<&str> {
    std::iter::once(ALL_CATEGORIES)
        .chain(
            project_categories(projects)
                .into_iter()
                .filter(|c| *c != ALL_CATEGORIES),
        )
        .collect()
}
