//! Page navigation state derived from the current listing page

use serde::Serialize;

use crate::catalog::ProductPage;

/// Clickable state of a navigation control
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageState {
    Enabled,
    Disabled,
}

impl std::fmt::Display for PageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageState::Enabled => write!(f, "enabled"),
            PageState::Disabled => write!(f, "disabled"),
        }
    }
}

/// One entry in the page button row
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PageButton {
    pub index: usize,
}

/// Rebuild the page button row for the given page.
///
/// Always a full rebuild with one button per available page, indexed from
/// zero; no diffing against the previous row.
pub fn page_buttons(page: &ProductPage) -> Vec<PageButton> {
    (0..page.page_count).map(|index| PageButton { index }).collect()
}

/// Whether the next-page control is clickable.
pub fn next_page_state(page: &ProductPage) -> PageState {
    if page.page_number < page.page_count {
        PageState::Enabled
    } else {
        PageState::Disabled
    }
}

/// Whether the previous-page control is clickable.
pub fn prev_page_state(page: &ProductPage) -> PageState {
    if page.page_number > 1 {
        PageState::Enabled
    } else {
        PageState::Disabled
    }
}

/// Clickable state of a single page button.
///
/// The button for the page currently shown is inert; every other button
/// stays clickable. Note the inverted sense versus the next/prev
/// predicates.
pub fn page_button_state(page: &ProductPage, candidate: usize) -> PageState {
    if page.page_number == candidate {
        PageState::Disabled
    } else {
        PageState::Enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(page_number: usize, page_count: usize) -> ProductPage {
        ProductPage {
            products: vec![],
            page_number,
            page_count,
        }
    }

    #[test]
    fn test_page_buttons_one_per_page_indexed_from_zero() {
        let buttons = page_buttons(&page_with(1, 4));

        assert_eq!(buttons.len(), 4);
        for (expected, button) in buttons.iter().enumerate() {
            assert_eq!(button.index, expected);
        }
    }

    #[test]
    fn test_page_buttons_empty_listing_has_no_buttons() {
        assert!(page_buttons(&page_with(0, 0)).is_empty());
    }

    #[test]
    fn test_next_enabled_below_page_count() {
        assert_eq!(next_page_state(&page_with(1, 3)), PageState::Enabled);
        assert_eq!(next_page_state(&page_with(2, 3)), PageState::Enabled);
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        assert_eq!(next_page_state(&page_with(3, 3)), PageState::Disabled);
    }

    #[test]
    fn test_next_disabled_when_no_pages() {
        assert_eq!(next_page_state(&page_with(0, 0)), PageState::Disabled);
    }

    #[test]
    fn test_prev_enabled_past_first_page() {
        assert_eq!(prev_page_state(&page_with(2, 3)), PageState::Enabled);
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        assert_eq!(prev_page_state(&page_with(1, 3)), PageState::Disabled);
        assert_eq!(prev_page_state(&page_with(0, 0)), PageState::Disabled);
    }

    #[test]
    fn test_current_page_button_is_inert() {
        let page = page_with(2, 5);

        assert_eq!(page_button_state(&page, 2), PageState::Disabled);
        assert_eq!(page_button_state(&page, 1), PageState::Enabled);
        assert_eq!(page_button_state(&page, 3), PageState::Enabled);
    }

    #[test]
    fn test_middle_page_navigation_states() {
        // The full derivation for a page in the middle of the listing
        let page = page_with(2, 5);

        assert_eq!(next_page_state(&page), PageState::Enabled);
        assert_eq!(prev_page_state(&page), PageState::Enabled);
        assert_eq!(page_button_state(&page, 2), PageState::Disabled);
        assert_eq!(page_button_state(&page, 3), PageState::Enabled);

        let buttons = page_buttons(&page);
        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].index, 0);
        assert_eq!(buttons[4].index, 4);
    }

    #[test]
    fn test_page_state_display() {
        assert_eq!(PageState::Enabled.to_string(), "enabled");
        assert_eq!(PageState::Disabled.to_string(), "disabled");
    }
}
