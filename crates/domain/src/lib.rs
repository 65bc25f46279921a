//! FertiBase Domain Layer
pub mod catalog;
pub mod config;
pub mod errors;
pub mod job_listing;
pub mod product;
pub mod record_id;

mod wire;

pub use catalog::{CatalogDomain, CatalogRecord, CatalogSource};
pub use config::{CliOverrides, Config};
pub use errors::{DomainError, LookupError};
pub use job_listing::{CategoryGroup, JobListing, OTHER_CATEGORY};
pub use product::{BenefitEntry, CropList, DosageEntry, DosagePlan, Faq, Product, TechSpec};
pub use record_id::RecordId;
