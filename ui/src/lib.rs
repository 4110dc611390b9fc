pub mod config;
pub mod errors;
pub mod templates;

pub use config::SiteConfig;
pub use errors::{ErrorNotice, PageError, TitledError};
pub use templates::constrained_width::ConstrainedWidth;
