use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};
use maud::{html, Markup, Render, DOCTYPE};

use super::head::HtmlHead;

pub trait Page {
    fn get_name(&self) -> String;
    fn get_description(&self) -> Option<String> {
        None
    }
    fn draw_body(&self) -> Markup;
}

pub struct RenderPage<T: Page>(pub T);

impl<T: Page> RenderPage<T> {
    pub fn with_status(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(self.render().into_string())
    }
}

impl<T: Page> Render for RenderPage<T> {
    fn render(&self) -> Markup {
        let page = &self.0;
        let title = page.get_name();
        let description = page.get_description();
        let head = HtmlHead {
            title: &title,
            description: description.as_deref(),
        };
        html! {
          (DOCTYPE)
          html lang="en" {
            (head)
            body {
              (page.draw_body())
            }
          }
        }
    }
}
