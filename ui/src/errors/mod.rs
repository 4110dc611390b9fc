use std::fmt::{Debug, Display};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use maud::{html, Markup};
use miette::{Diagnostic, NarratableReportHandler, ReportHandler};
use thiserror::Error;

use crate::templates::base_constrained;
use crate::SiteConfig;

mod notice;
mod titled;

pub use notice::ErrorNotice;
pub use titled::TitledError;

/// Catch-all error for handlers. Renders as an HTML error page.
#[derive(Diagnostic, Error)]
pub struct PageError(pub(crate) miette::Report, pub(crate) StatusCode);

impl PageError {
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.1 = status;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.1
    }

    pub fn report(&self) -> &miette::Report {
        &self.0
    }

    pub fn notice(&self) -> ErrorNotice {
        ErrorNotice::from_report(&self.0)
    }

    pub fn page(&self, config: &SiteConfig) -> Markup {
        base_constrained(config, html! { (self.notice()) })
    }
}

impl Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handler = NarratableReportHandler::new();

        f.write_fmt(format_args!("PageError: Status Code: {}\n", self.1))?;

        handler.debug(self.0.as_ref(), f)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self, "PageError");

        let config = SiteConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = ?err, "Falling back to the default site config");
            SiteConfig::default()
        });

        (self.1, self.page(&config)).into_response()
    }
}

impl From<miette::Report> for PageError {
    fn from(err: miette::Report) -> Self {
        PageError(err, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<TitledError> for PageError {
    fn from(err: TitledError) -> Self {
        PageError(miette::Report::new(err), StatusCode::INTERNAL_SERVER_ERROR)
    }
}
