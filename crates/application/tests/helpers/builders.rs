#![allow(dead_code)]
use fertibase_domain::{JobListing, Product, RecordId};

pub fn product(id: &str, name: &str, category: Option<&str>) -> Product {
    Product {
        id: RecordId::parse(id).unwrap(),
        name: name.to_string(),
        category: category.map(str::to_string),
        ..Default::default()
    }
}

pub fn job(id: &str, title: &str, category: Option<&str>) -> JobListing {
    JobListing {
        id: RecordId::parse(id).unwrap(),
        title: title.to_string(),
        category: category.map(str::to_string),
        positions: 1,
        days_left: 10,
        ..Default::default()
    }
}
