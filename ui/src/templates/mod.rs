use maud::{html, Markup, DOCTYPE};

use crate::SiteConfig;

pub mod constrained_width;

use constrained_width::constrained;

pub fn head(config: &SiteConfig) -> Markup {
    html! {
      head {
        title { (config.site_title) }
        link rel="stylesheet" href=(config.stylesheet_href) {}

        meta name="viewport" content="width=device-width, initial-scale=1";
      }
    }
}

pub fn base(config: &SiteConfig, inner: &Markup) -> Markup {
    html! {
      (DOCTYPE)
      html {
        (head(config))

        body class="bg-background text-text font-sans" {
          (inner)
        }
      }
    }
}

pub fn base_constrained(config: &SiteConfig, inner: Markup) -> Markup {
    base(config, &constrained(inner))
}
