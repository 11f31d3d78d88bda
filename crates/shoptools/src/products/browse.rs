use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use shoptools_core::catalog::ProductPage;
use shoptools_core::criteria::SearchCriteria;
use shoptools_core::paging::{self, PageButton, PageState};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{CatalogConfig, HttpProductCatalog, ProductCatalog};

/// Options for interactive catalog browsing
#[derive(Debug, clap::Args, Clone)]
#[command(after_help = "COMMANDS (at the prompt):
  n, next          Go to the next page
  p, prev          Go to the previous page
  <number>         Jump to that page
  filter <text>    Filter by free-text containment match, back on page 1
  filter           Clear the filter, back on page 1
  all              Drop every constraint and reload the listing
  help, ?          Show the command list
  q, quit          Leave the session")]
pub struct BrowseOptions {}

/// Interactive listing state.
///
/// Owns the criteria, the page last fetched, and the page button row
/// derived from it. Every action mutates the criteria, issues one query,
/// and on success replaces the page and rebuilds the buttons.
pub struct ListingSession<C> {
    catalog: C,
    pub criteria: SearchCriteria,
    pub page: ProductPage,
    pub buttons: Vec<PageButton>,
}

impl<C: ProductCatalog> ListingSession<C> {
    fn new(catalog: C) -> Self {
        Self {
            catalog,
            criteria: SearchCriteria::new(),
            page: ProductPage::default(),
            buttons: Vec::new(),
        }
    }

    /// Create a session and load the unconstrained first listing.
    pub async fn start(catalog: C) -> Result<Self> {
        let mut session = Self::new(catalog);
        session.show_all().await?;
        Ok(session)
    }

    /// Issue a query with the current criteria.
    ///
    /// On success the result page is replaced and the button row rebuilt
    /// in full. On failure the previous page and buttons are kept.
    pub async fn fetch_data(&mut self) -> Result<()> {
        let page = self.catalog.query(&self.criteria).await?;
        self.page = page;
        self.refresh_paging();
        Ok(())
    }

    /// Apply a free-text filter, restarting from the first page.
    pub async fn apply_filter(&mut self, contains_text: Option<String>) -> Result<()> {
        self.criteria.contains_text = contains_text;
        self.criteria.first_page();
        self.fetch_data().await
    }

    /// Drop all constraints and reload the listing from scratch.
    pub async fn show_all(&mut self) -> Result<()> {
        self.criteria.clear();
        self.buttons.clear();
        self.fetch_data().await
    }

    /// Jump to the given page.
    ///
    /// Bounds are enforced by the button states, not here; an
    /// out-of-range page is sent to the catalog as requested.
    pub async fn switch_page(&mut self, page: usize) -> Result<()> {
        self.criteria.switch_page(page);
        self.fetch_data().await
    }

    pub fn next_page_state(&self) -> PageState {
        paging::next_page_state(&self.page)
    }

    pub fn prev_page_state(&self) -> PageState {
        paging::prev_page_state(&self.page)
    }

    pub fn page_button_state(&self, page: usize) -> PageState {
        paging::page_button_state(&self.page, page)
    }

    fn refresh_paging(&mut self) {
        self.buttons = paging::page_buttons(&self.page);
    }
}

/// Commands accepted at the browse prompt
#[derive(Debug, PartialEq)]
enum BrowseCommand {
    Next,
    Prev,
    Page(usize),
    Filter(Option<String>),
    ShowAll,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Result<BrowseCommand> {
    let mut parts = input.split_whitespace();

    let command = match parts.next() {
        Some(word) => word,
        None => return Err(eyre!("Empty command")),
    };

    match command {
        "n" | "next" => Ok(BrowseCommand::Next),
        "p" | "prev" => Ok(BrowseCommand::Prev),
        "all" => Ok(BrowseCommand::ShowAll),
        "help" | "?" => Ok(BrowseCommand::Help),
        "q" | "quit" | "exit" => Ok(BrowseCommand::Quit),
        "filter" => {
            let text = parts.collect::<Vec<_>>().join(" ");
            if text.is_empty() {
                Ok(BrowseCommand::Filter(None))
            } else {
                Ok(BrowseCommand::Filter(Some(text)))
            }
        }
        "page" => {
            let page = parts
                .next()
                .ok_or_else(|| eyre!("Usage: page <number>"))?
                .parse::<usize>()
                .map_err(|_| eyre!("Usage: page <number>"))?;
            Ok(BrowseCommand::Page(page))
        }
        other => {
            if let Ok(page) = other.parse::<usize>() {
                return Ok(BrowseCommand::Page(page));
            }
            Err(eyre!(
                "Unknown command: {}. Type 'help' for the command list.",
                other
            ))
        }
    }
}

/// Handle the browse command
pub async fn run(_options: BrowseOptions, global: crate::Global) -> Result<()> {
    let config = CatalogConfig::from_env()?;
    let catalog = HttpProductCatalog::new(config)?;

    if global.verbose {
        println!("Catalog: {}", catalog.base_url());
        println!();
    }

    let mut session = ListingSession::start(catalog).await?;
    print!("{}", format_listing(&session.page, &session.buttons, &session.criteria));

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        prompt()?;

        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = match parse_command(trimmed) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err.to_string().yellow());
                continue;
            }
        };

        let outcome = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                print_help();
                continue;
            }
            BrowseCommand::Next => {
                if session.next_page_state() == PageState::Disabled {
                    println!("{}", "Already on the last page.".yellow());
                    continue;
                }
                let next = session.page.page_number + 1;
                session.switch_page(next).await
            }
            BrowseCommand::Prev => {
                if session.prev_page_state() == PageState::Disabled {
                    println!("{}", "Already on the first page.".yellow());
                    continue;
                }
                let prev = session.page.page_number - 1;
                session.switch_page(prev).await
            }
            BrowseCommand::Page(page) => {
                if session.page_button_state(page) == PageState::Disabled {
                    println!("{}", format!("Already on page {page}.").yellow());
                    continue;
                }
                session.switch_page(page).await
            }
            BrowseCommand::Filter(text) => session.apply_filter(text).await,
            BrowseCommand::ShowAll => session.show_all().await,
        };

        match outcome {
            Ok(()) => {
                print!(
                    "{}",
                    format_listing(&session.page, &session.buttons, &session.criteria)
                );
            }
            Err(err) => {
                eprintln!("{}", format!("Query failed: {err}").red());
            }
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    use std::io::Write;

    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  n, next          Go to the next page");
    println!("  p, prev          Go to the previous page");
    println!("  <number>         Jump to that page");
    println!("  filter <text>    Filter by free-text match, back on page 1");
    println!("  filter           Clear the filter, back on page 1");
    println!("  all              Drop every constraint and reload");
    println!("  q, quit          Leave the session");
}

/// Render the current listing with its page button row
fn format_listing(
    page: &ProductPage,
    buttons: &[PageButton],
    criteria: &SearchCriteria,
) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(60).bright_cyan()));
    let header = if page.page_count == 0 {
        "PRODUCT CATALOG (no pages)".to_string()
    } else {
        format!(
            "PRODUCT CATALOG (Page {} of {})",
            page.page_number, page.page_count
        )
    };
    result.push_str(&format!("{}\n", header.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(60).bright_cyan()));

    if let Some(text) = &criteria.contains_text {
        result.push_str(&format!(
            "{} {}\n",
            "Filter:".green(),
            text.bright_white()
        ));
    }

    if page.products.is_empty() {
        result.push_str(&format!("\n{}\n", "No products on this page.".yellow()));
    } else {
        for product in &page.products {
            result.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", product.id).yellow().bold(),
                product.name.white().bold()
            ));

            if let Some(description) = &product.description {
                result.push_str(&format!("    {description}\n"));
            }

            let price = product
                .price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let category = product.category.as_deref().unwrap_or("Uncategorized");
            result.push_str(&format!(
                "    {}: {} | {}: {}\n",
                "Price".green(),
                price.bright_yellow(),
                "Category".green(),
                category.bright_white()
            ));
        }
    }

    if !buttons.is_empty() {
        let row = buttons
            .iter()
            .map(|button| {
                let page_no = button.index + 1;
                match paging::page_button_state(page, page_no) {
                    PageState::Disabled => format!("[{page_no}]").bold().to_string(),
                    PageState::Enabled => page_no.to_string().cyan().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        result.push_str(&format!("\n{} {}\n", "Pages:".green(), row));
    }

    result.push_str(&format!(
        "next: {} | prev: {}\n",
        paging::next_page_state(page),
        paging::prev_page_state(page)
    ));

    result
}
