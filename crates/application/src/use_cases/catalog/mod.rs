mod career_groups;
mod resolve_catalog;
mod search;

pub use career_groups::{category_options, filter_groups, group_by_category, CategorySelection};
pub use resolve_catalog::{ResolveCatalogUseCase, ResolvedCatalog};
pub use search::search;
