pub mod catalog;
pub mod records;

pub use catalog::{
    category_options, filter_groups, group_by_category, search, CategorySelection,
    ResolveCatalogUseCase, ResolvedCatalog,
};
pub use records::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, SeedCatalogUseCase,
    UpdateRecordUseCase,
};
