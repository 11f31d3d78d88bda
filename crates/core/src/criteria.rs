//! Filter and paging parameters sent with each catalog query

use serde::Serialize;

/// Filter and paging criteria for a catalog listing query.
///
/// Owned by the listing session and passed by reference to the catalog
/// client on every query. All fields are optional; an empty criteria
/// requests the unconstrained listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchCriteria {
    /// Free-text containment filter (matches product names)
    pub contains_text: Option<String>,
    /// 1-indexed page to request
    pub page_number: Option<usize>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart at the first page. Changing the filter invalidates the
    /// previous page position.
    pub fn first_page(&mut self) {
        self.page_number = Some(1);
    }

    /// Request the given page on the next query.
    pub fn switch_page(&mut self, page: usize) {
        self.page_number = Some(page);
    }

    /// Drop all filter and paging constraints.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Render the criteria as query parameters for the catalog API.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(text) = &self.contains_text {
            params.push(("containsText".to_string(), text.clone()));
        }
        if let Some(page) = self.page_number {
            params.push(("pageNumber".to_string(), page.to_string()));
        }

        params
    }
}
