use maud::{html, Markup};

use crate::models::SearchItem;
use crate::templates::page::Page;

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Outcome of one dispatched query.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub items: Vec<SearchItem>,
    pub error: Option<String>,
}

pub struct SearchPage {
    /// Value shown in the input box.
    pub query: String,
    /// `None` until a query has been submitted.
    pub results: Option<SearchResults>,
}

impl Page for SearchPage {
    fn get_name(&self) -> String {
        "Custom Search".to_string()
    }

    fn get_description(&self) -> Option<String> {
        Some("Search the web with Google Programmable Search".to_string())
    }

    fn draw_body(&self) -> Markup {
        html! {
          h1 { "Custom Search" }
          p class="subtitle" {
            "Search the web with Google Programmable Search. The top five results are shown."
          }
          form class="search-form" method="get" action="/" {
            input class="search-box" type="text" name="q" value=(self.query) aria-label="Search query";
            button type="submit" { "Search" }
          }
          @if let Some(results) = &self.results {
            div class="results" {
              @if let Some(error) = &results.error {
                div class="error" role="alert" { (error) }
              }
              @if results.items.is_empty() {
                div class="info" { (NO_RESULTS_MESSAGE) }
              } @else {
                @for item in &results.items {
                  div class="result" {
                    a href=(item.link) { (item.title) }
                    p class="snippet" { (item.snippet) }
                  }
                }
              }
            }
          }
        }
    }
}
