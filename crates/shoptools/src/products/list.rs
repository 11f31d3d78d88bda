use crate::prelude::{eprintln, println, *};
use shoptools_core::catalog::{build_list_output, ListOutput};

use super::{create_client, fetch_products, CatalogConfig, SearchCriteria};

/// Options for listing products
#[derive(Debug, clap::Args, Clone)]
#[command(after_help = "EXAMPLES:
  # List the first page of the catalog:
  shoptools products list

  # Filter by free-text containment match on product names:
  shoptools products list --contains-text able

  # Fetch a specific page of the filtered listing:
  shoptools products list --contains-text able --page 3

NOTES:
  - Page numbers are 1-indexed
  - Without --contains-text the catalog's stock filter is applied
  - The page count in the output reflects the current filter")]
pub struct ListOptions {
    /// Free-text containment filter (matches product names)
    #[arg(short, long, env = "SHOPTOOLS_CONTAINS_TEXT")]
    pub contains_text: Option<String>,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the list command
pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching products...");
    }

    let data = list_products_data(options.contains_text.clone(), options.page).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print!("{}", format_list_text(&data));

        if let Some(next_command) = &data.pagination.next_page_command {
            eprintln!("\nTo fetch the next page, run:\n  {next_command}");
        }
    }

    Ok(())
}

/// Fetches one page of the product catalog as a structured ListOutput
pub async fn list_products_data(
    contains_text: Option<String>,
    page: usize,
) -> Result<ListOutput> {
    let config = CatalogConfig::from_env()?;
    let client = create_client()?;

    let mut criteria = SearchCriteria::new();
    criteria.contains_text = contains_text;
    criteria.switch_page(page);

    let product_page = fetch_products(&client, &config, &criteria).await?;

    Ok(build_list_output(
        product_page,
        criteria.contains_text.as_deref(),
    ))
}

/// Convert list output to formatted text
fn format_list_text(output: &ListOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("Found {} product(s):\n\n", output.products.len()));

    if output.products.is_empty() {
        result.push_str("No products on this page.\n");
    } else {
        let mut table = crate::prelude::new_table();
        table.add_row(prettytable::row!["Id", "Name", "Category", "Price"]);

        for product in &output.products {
            let category = product
                .category
                .as_ref()
                .unwrap_or(&"Uncategorized".to_string())
                .clone();
            let price = product
                .price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(prettytable::row![
                product.id,
                &product.name,
                category,
                price
            ]);
        }

        result.push_str(&table.to_string());
    }

    result.push_str(&format!(
        "\nPage {} of {}\n",
        output.pagination.page_number, output.pagination.page_count
    ));

    result
}
