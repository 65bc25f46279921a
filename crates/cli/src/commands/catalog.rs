use fertibase_application::services::LatestRequestGuard;
use fertibase_application::use_cases::{
    category_options, filter_groups, group_by_category, search, CategorySelection,
};
use fertibase_domain::{LookupError, Product};
use serde::Serialize;
use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

use crate::di::Resolvers;

/// Runs `fut` as the only live request; Ctrl-C abandons it.
async fn interruptible<F: Future>(fut: F) -> Option<F::Output> {
    let guard = Arc::new(LatestRequestGuard::new());
    let ticket = guard.begin();

    let canceller = guard.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            canceller.cancel_all();
        }
    });

    let output = guard.run(&ticket, fut).await;
    watcher.abort();
    output
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn list_products(
    resolvers: &Resolvers,
    term: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let Some(Ok(resolved)) = interruptible(resolvers.products.list_all()).await else {
        warn!("Product listing interrupted");
        return Ok(ExitCode::FAILURE);
    };

    info!(source = resolved.source.to_str(), count = resolved.items.len(), "Products resolved");
    let products = search(&resolved.items, term);

    if json {
        print_json(&products)?;
        return Ok(ExitCode::SUCCESS);
    }

    if products.is_empty() {
        println!("No products match \"{}\"", term);
    }
    for product in &products {
        println!("{:<14} {:<32} {}", product.id.as_str(), product.name, product.category_label());
        if let Some(summary) = product.summary() {
            println!("{:<14} {}", "", summary);
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn show_product(resolvers: &Resolvers, id: &str, json: bool) -> anyhow::Result<ExitCode> {
    let Some(result) = interruptible(resolvers.products.get_by_id(id)).await else {
        warn!("Product lookup interrupted");
        return Ok(ExitCode::FAILURE);
    };

    let product = match result {
        Ok(product) => product,
        Err(LookupError::NotFound(_)) => {
            println!("Product Not Found");
            return Ok(ExitCode::FAILURE);
        }
        Err(e @ LookupError::Unavailable(_)) => {
            warn!(error = %e, "Product lookup failed");
            println!("Product Not Found");
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        print_json(&product)?;
    } else {
        print_product(&product);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_product(product: &Product) {
    println!("{}", product.name);
    println!("Category: {}", product.category_label());
    if let Some(summary) = product.summary() {
        println!("\n{}", summary);
    }
    if let Some(how) = &product.how_it_works {
        println!("\nHow it works: {}", how);
    }
    if let Some(why) = &product.why_choose {
        println!("Why choose: {}", why);
    }
    if let Some(dosage) = product.suggested_dosage() {
        println!("Suggested dosage: {}", dosage);
    }
    if !product.pack_sizes.is_empty() {
        println!("Pack sizes: {}", product.pack_sizes.join(", "));
    }
}

pub async fn list_careers(
    resolvers: &Resolvers,
    term: &str,
    category: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let Some(Ok(resolved)) = interruptible(resolvers.careers.list_all()).await else {
        warn!("Careers listing interrupted");
        return Ok(ExitCode::FAILURE);
    };

    info!(source = resolved.source.to_str(), count = resolved.items.len(), "Careers resolved");
    let groups = group_by_category(&resolved.items);
    let selection = CategorySelection::from(category);
    let filtered = filter_groups(&groups, &selection, term);

    if json {
        print_json(&filtered)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("Categories: {}", category_options(&groups).join(" | "));
    if filtered.is_empty() {
        println!("\nNo category named \"{}\"", selection.label());
    }
    for group in &filtered {
        println!("\n{}", group.category);
        if group.items.is_empty() {
            println!("  No matching positions");
        }
        for job in &group.items {
            println!(
                "  {:<32} {} open, {} days left",
                job.title, job.positions, job.days_left
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
