use std::env::{self, VarError};

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::instrument;

const DEFAULT_SITE_TITLE: &str = "Site";
const DEFAULT_STYLESHEET_HREF: &str = "/styles/tailwind.css";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_title: String,
    pub stylesheet_href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_string(),
        }
    }
}

impl SiteConfig {
    #[instrument(name = "SiteConfig::from_env")]
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            site_title: var_or("SITE_TITLE", DEFAULT_SITE_TITLE)?,
            stylesheet_href: var_or("SITE_STYLESHEET", DEFAULT_STYLESHEET_HREF)?,
        })
    }
}

/// Unset falls back to `default`, a set but non-unicode value is an error.
fn var_or(key: &str, default: &str) -> Result<String> {
    from_lookup(key, env::var(key), default)
}

fn from_lookup(key: &str, value: Result<String, VarError>, default: &str) -> Result<String> {
    match value {
        Err(VarError::NotPresent) => Ok(default.to_string()),
        other => other
            .into_diagnostic()
            .wrap_err_with(|| format!("Couldn't read {key} from the environment")),
    }
}
