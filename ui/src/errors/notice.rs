use std::error::Error;

use maud::{html, Markup, Render};

use super::TitledError;

/// What an end user gets to see about a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub heading: String,
    pub body: Option<String>,
}

impl ErrorNotice {
    pub fn from_titled(err: &TitledError) -> Self {
        Self {
            heading: err.title().to_string(),
            body: Some(err.user_message().unwrap_or(err.message()).to_string()),
        }
    }

    /// Uses the first `TitledError` in the source chain, otherwise falls back
    /// to the top level message.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let mut current = Some(err);
        while let Some(e) = current {
            if let Some(titled) = e.downcast_ref::<TitledError>() {
                return Self::from_titled(titled);
            }
            current = e.source();
        }

        Self {
            heading: err.to_string(),
            body: None,
        }
    }

    pub fn from_report(report: &miette::Report) -> Self {
        report
            .chain()
            .find_map(|e| e.downcast_ref::<TitledError>())
            .map_or_else(
                || Self {
                    heading: report.to_string(),
                    body: None,
                },
                Self::from_titled,
            )
    }
}

impl Render for ErrorNotice {
    fn render(&self) -> Markup {
        html! {
          div role="alert" class="border border-red-400 rounded px-8 py-4 my-8" {
            h2 class="text-2xl font-semibold mb-2" { (self.heading) }

            @if let Some(body) = &self.body {
              p class="leading-loose" { (body) }
            }
          }
        }
    }
}
