mod catalog;

pub use catalog::{list_careers, list_products, show_product};
