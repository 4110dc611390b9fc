use maud::{html, Markup, Render};

pub(crate) const CONSTRAINED_WIDTH_CLASSES: &str = "w-full max-w-5xl mx-auto px-4 mb-8";

/// Centered, width capped column around arbitrary markup.
///
/// The inner markup is emitted exactly as given.
pub struct ConstrainedWidth(pub Markup);

impl Render for ConstrainedWidth {
    fn render(&self) -> Markup {
        html! {
          div class=(CONSTRAINED_WIDTH_CLASSES) {
            (self.0)
          }
        }
    }
}

pub fn constrained(inner: Markup) -> Markup {
    ConstrainedWidth(inner).render()
}

#[cfg(test)]
mod tests {
    use maud::PreEscaped;

    use super::*;

    const OPEN: &str = r#"<div class="w-full max-w-5xl mx-auto px-4 mb-8">"#;

    #[test]
    fn wraps_children_in_a_single_div() {
        let inner = html! {
          h1 { "First" }
          p { "Second" }
          p { "Third" }
        };

        let rendered = constrained(inner).into_string();

        assert_eq!(
            rendered,
            format!("{OPEN}<h1>First</h1><p>Second</p><p>Third</p></div>")
        );
        assert_eq!(rendered.matches("<div").count(), 1);
    }

    #[test]
    fn empty_content_renders_an_empty_wrapper() {
        let rendered = constrained(html! {}).into_string();

        assert_eq!(rendered, format!("{OPEN}</div>"));
    }

    #[test]
    fn inner_markup_is_not_escaped_again() {
        let inner = PreEscaped("<span>&amp;</span>".to_string());

        let rendered = constrained(inner).into_string();

        assert_eq!(rendered, format!("{OPEN}<span>&amp;</span></div>"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let container = ConstrainedWidth(html! { p { "same" } });

        assert_eq!(
            container.render().into_string(),
            container.render().into_string()
        );
    }

    #[test]
    fn nested_containers_keep_their_order() {
        let inner = html! {
          (ConstrainedWidth(html! { "a" }))
          "b"
        };

        let rendered = constrained(inner).into_string();

        assert_eq!(rendered, format!("{OPEN}{OPEN}a</div>b</div>"));
    }
}
