pub mod head;
pub mod page;
pub mod pages;

pub use page::{Page, RenderPage};
