use maud::{html, Markup};

use crate::templates::page::Page;

pub struct ErrorPage;

impl Page for ErrorPage {
    fn get_name(&self) -> String {
        "Error".to_string()
    }

    fn draw_body(&self) -> Markup {
        html! {
          h2 { "Error" }
          p { "The search could not be completed. Please try again later." }
          a href="/" { "Back to search" }
        }
    }
}
