use clap::{Parser, Subcommand};
use maud::{html, Markup};
use miette::Result;
use tracing::instrument;
use ui::templates::base_constrained;
use ui::{ErrorNotice, SiteConfig, TitledError};

#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// Print an empty constrained page
    #[default]
    Empty,
    /// Print a page with one paragraph per argument
    Page { content: Vec<String> },
    /// Print the page a `TitledError` would be shown with
    Error {
        #[arg(long)]
        message: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        user_message: Option<String>,
    },
}

impl Command {
    #[instrument(skip_all)]
    fn render(self, config: &SiteConfig) -> Markup {
        match self {
            Command::Empty => base_constrained(config, html! {}),
            Command::Page { content } => base_constrained(
                config,
                html! {
                  @for paragraph in &content {
                    p { (paragraph) }
                  }
                },
            ),
            Command::Error {
                message,
                title,
                user_message,
            } => {
                let err = match user_message {
                    Some(user_message) => {
                        TitledError::with_user_message(message, title, user_message)
                    }
                    None => TitledError::new(message, title),
                };
                let report = miette::Report::from(err);
                tracing::warn!(error = %report, "Rendering error preview");

                base_constrained(config, html! { (ErrorNotice::from_report(&report)) })
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_common::setup_tracing("preview")?;

    let cli = CliArgs::parse();
    let config = SiteConfig::from_env()?;
    let command = cli.command.unwrap_or_default();

    println!("{}", command.render(&config).into_string());

    Ok(())
}
