use maud::{html, PreEscaped, Render};

const STYLE: &str = "
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
.search-form { display: flex; gap: 0.5rem; margin: 1.5rem 0; }
.search-box { flex: 1; padding: 0.4rem; }
.result { margin-bottom: 1.2rem; }
.result .snippet { margin: 0.2rem 0; color: #444; }
.info { padding: 0.6rem; background: #e8f0fe; }
.error { padding: 0.6rem; background: #fde8e8; color: #8a1c1c; }
";

pub(crate) struct HtmlHead<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
}

impl<'a> Render for HtmlHead<'a> {
    fn render(&self) -> maud::Markup {
        html! {
          head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (self.title) }
            @if let Some(description) = self.description {
                meta name="description" content=(description);
            }
            style { (PreEscaped(STYLE)) }
          }
        }
    }
}
