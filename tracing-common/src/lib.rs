use miette::{Context, IntoDiagnostic, Result};
use tracing_subscriber::{prelude::*, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

pub fn default_directives(crate_name: &str) -> String {
    format!("warn,{crate_name}=trace")
}

pub fn env_filter(rust_log: &str) -> Result<EnvFilter> {
    EnvFilter::builder()
        .parse(rust_log)
        .into_diagnostic()
        .wrap_err_with(|| miette::miette!("Couldn't create env filter from {}", rust_log))
}

/// Installs the global subscriber. Output goes to stderr so binaries can keep
/// stdout for their own output.
pub fn setup_tracing(crate_name: &str) -> Result<()> {
    let rust_log =
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_directives(crate_name));

    let env_filter = env_filter(&rust_log)?;

    let heirarchical = HierarchicalLayer::default()
        .with_writer(std::io::stderr)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_thread_names(true)
        .with_thread_ids(true)
        .with_verbose_exit(true)
        .with_verbose_entry(true)
        .with_targets(true);

    Registry::default()
        .with(heirarchical)
        .with(env_filter)
        .try_init()
        .into_diagnostic()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_trace_the_named_crate() {
        assert_eq!(default_directives("ui"), "warn,ui=trace");
    }

    #[test]
    fn env_filter_accepts_default_directives() {
        let filter = env_filter(&default_directives("preview")).unwrap();

        assert!(filter.to_string().contains("preview=trace"));
    }

    #[test]
    fn setup_tracing_only_installs_once() {
        setup_tracing("tracing_common").unwrap();

        assert!(setup_tracing("tracing_common").is_err());
    }
}
