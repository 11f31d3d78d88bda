use crate::prelude::*;

pub mod browse;
pub mod list;

// Re-export domain types from core
pub use shoptools_core::catalog::{transform_products_response, ProductPage, ProductsResponse};
pub use shoptools_core::criteria::SearchCriteria;

/// Default free-text filter merged into every listing query that carries
/// no filter of its own. Matches the catalog service's stock behavior.
const DEFAULT_CONTAINS_TEXT: &str = "abl";

/// Products module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "products")]
#[command(about = "Product catalog operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List one page of the product catalog
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Page through the product catalog interactively
    #[clap(name = "browse")]
    Browse(browse::BrowseOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list::run(options, global).await,
        Commands::Browse(options) => browse::run(options, global).await,
    }
}

/// Catalog configuration from environment variables
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl CatalogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: std::env::var("SHOPTOOLS_CATALOG_URL")
                .map_err(|_| eyre!("SHOPTOOLS_CATALOG_URL environment variable not set"))?,
        })
    }
}

/// Create an HTTP client that accepts JSON responses
pub fn create_client() -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to create HTTP client: {}", e))
}

/// Build the query parameters for a listing request
///
/// The fixed containsText default is merged in unless the criteria
/// already carry a free-text filter.
pub fn build_query_params(criteria: &SearchCriteria) -> Vec<(String, String)> {
    let mut params = criteria.to_query_params();

    if criteria.contains_text.is_none() {
        params.push((
            "containsText".to_string(),
            DEFAULT_CONTAINS_TEXT.to_string(),
        ));
    }

    params
}

/// Issue a listing query against the products endpoint
pub async fn fetch_products(
    client: &reqwest::Client,
    config: &CatalogConfig,
    criteria: &SearchCriteria,
) -> Result<ProductPage> {
    // Handle base_url that may or may not have trailing slash
    let base_url = config.base_url.trim_end_matches('/');
    let url = format!("{base_url}/products/");

    let params = build_query_params(criteria);

    let response = client
        .get(&url)
        .query(&params)
        .send()
        .await
        .map_err(|e| eyre!("Failed to send request to catalog: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(eyre!("Catalog API error [{}]: {}", status, body));
    }

    let products_response: ProductsResponse = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse catalog response: {}", e))?;

    transform_products_response(products_response).map_err(|e| eyre!("{}", e))
}

/// A source of product pages, one query per call.
///
/// Decouples the listing session from the transport so the transition
/// logic can be exercised against a scripted catalog.
pub trait ProductCatalog {
    async fn query(&self, criteria: &SearchCriteria) -> Result<ProductPage>;
}

/// Catalog backed by the remote products endpoint
pub struct HttpProductCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpProductCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl ProductCatalog for HttpProductCatalog {
    async fn query(&self, criteria: &SearchCriteria) -> Result<ProductPage> {
        fetch_products(&self.client, &self.config, criteria).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_merged_into_empty_criteria() {
        let criteria = SearchCriteria::new();

        let params = build_query_params(&criteria);

        assert_eq!(
            params,
            vec![("containsText".to_string(), "abl".to_string())]
        );
    }

    #[test]
    fn test_explicit_filter_not_overridden_by_default() {
        let criteria = SearchCriteria {
            contains_text: Some("able".to_string()),
            page_number: Some(2),
        };

        let params = build_query_params(&criteria);

        assert_eq!(
            params,
            vec![
                ("containsText".to_string(), "able".to_string()),
                ("pageNumber".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_only_criteria_still_gets_default_filter() {
        let criteria = SearchCriteria {
            contains_text: None,
            page_number: Some(3),
        };

        let params = build_query_params(&criteria);

        assert_eq!(
            params,
            vec![
                ("pageNumber".to_string(), "3".to_string()),
                ("containsText".to_string(), "abl".to_string()),
            ]
        );
    }
}
