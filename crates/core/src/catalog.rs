//! Wire types and transformation functions for the product catalog API

use serde::{Deserialize, Serialize};

/// Product record from the catalog API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Listing response from the catalog API
///
/// The GET products/ endpoint returns the records for one page together
/// with the paging counters for the current criteria.
#[derive(Debug, Deserialize, Clone)]
pub struct ProductsResponse {
    pub products: Vec<ProductRecord>,
    #[serde(rename = "pageNumber")]
    pub page_number: usize,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
}

/// Output structure for a single product
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProductOutput {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// The current page of the listing plus its paging counters.
///
/// Replaced wholesale on each successful query; the default value is the
/// empty listing shown before the first fetch completes.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ProductPage {
    pub products: Vec<ProductOutput>,
    pub page_number: usize,
    pub page_count: usize,
}

/// Pagination metadata for list output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListPaginationInfo {
    pub page_number: usize,
    pub page_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page_command: Option<String>,
}

/// Complete list output with products and pagination
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListOutput {
    pub products: Vec<ProductOutput>,
    pub pagination: ListPaginationInfo,
}

/// Error type for catalog transformations
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog reported page {page_number} of {page_count} pages")]
    PageOutOfRange {
        page_number: usize,
        page_count: usize,
    },
}

/// Transform a catalog API response into a product page
///
/// A non-empty listing must report 1 <= pageNumber <= pageCount; a
/// response violating that is rejected rather than rendered.
pub fn transform_products_response(
    response: ProductsResponse,
) -> Result<ProductPage, CatalogError> {
    if response.page_count >= 1
        && !(1..=response.page_count).contains(&response.page_number)
    {
        return Err(CatalogError::PageOutOfRange {
            page_number: response.page_number,
            page_count: response.page_count,
        });
    }

    let products = response
        .products
        .iter()
        .map(|record| ProductOutput {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            category: record.category.clone(),
        })
        .collect();

    Ok(ProductPage {
        products,
        page_number: response.page_number,
        page_count: response.page_count,
    })
}

/// Build list output with pagination metadata
///
/// Constructs the complete list output including navigation commands for
/// the pages reachable from the current one.
pub fn build_list_output(page: ProductPage, contains_text: Option<&str>) -> ListOutput {
    let next_page = if page.page_number < page.page_count {
        Some(list_command(contains_text, page.page_number + 1))
    } else {
        None
    };

    let prev_page = if page.page_number > 1 {
        Some(list_command(contains_text, page.page_number - 1))
    } else {
        None
    };

    ListOutput {
        pagination: ListPaginationInfo {
            page_number: page.page_number,
            page_count: page.page_count,
            next_page_command: next_page,
            prev_page_command: prev_page,
        },
        products: page.products,
    }
}

fn list_command(contains_text: Option<&str>, page: usize) -> String {
    match contains_text {
        Some(text) => {
            format!("shoptools products list --contains-text '{text}' --page {page}")
        }
        None => format!("shoptools products list --page {page}"),
    }
}
