pub mod error_page;
pub mod search_page;

pub use error_page::ErrorPage;
pub use search_page::{SearchPage, SearchResults};
