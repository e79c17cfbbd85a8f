// Rust guideline compliant 2026-10-13

//! Ticketview CLI Application
//!
//! Command-line viewer for helpdesk tickets.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use ticketview_cli::terminal::{print_warning, stdin_is_interactive};
use ticketview_cli::{
    commands, create_formatter, logging, prompt_subdomain, resolve_base_url, should_use_color,
    OutputFormatter, PromptCredentials,
};
use ticketview_client::HelpdeskClient;
use ticketview_core::{Config, ConfigCredentials, CredentialSource, Credentials, Error};

#[derive(Parser, Debug)]
#[command(
    name = "tv",
    version,
    about = "Ticketview: browse helpdesk tickets from the terminal",
    long_about = "Ticketview fetches support requests from a helpdesk REST API and lets you page through them interactively. Credentials come from ticketview.toml, TICKETVIEW_* environment variables, a .env file, or an interactive prompt.",
    after_help = "Examples:\n  TICKETVIEW_SUBDOMAIN=acme TICKETVIEW_EMAIL=agent@acme.test TICKETVIEW_TOKEN=... tv\n  tv --prompt\n  tv show 42\n  tv list --page 2 --format table\n"
)]
struct Cli {
    /// Output format for non-interactive commands
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Prompt for subdomain and credentials instead of reading them from config
    #[arg(long, global = true)]
    prompt: bool,

    /// Tickets per page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Table,
    Json,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Browse tickets interactively (default)
    Menu,

    /// Show a single ticket
    Show {
        /// Ticket ID
        id: String,
    },

    /// Print one page of all tickets
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) | None => "plain",
    };
    let formatter = create_formatter(format, use_color);

    if let Err(err) = run(cli, formatter.as_ref(), use_color) {
        let message = commands::render_error(formatter.as_ref(), &err);
        if format == "json" {
            println!("{}", message);
        } else {
            eprintln!("{}", message);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, formatter: &dyn OutputFormatter, use_color: bool) -> Result<()> {
    let _ = dotenvy::dotenv();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.validate()?;

    let _guard = logging::init(&config.log_level, cli.log_file.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let credentials = acquire_credentials(&mut config, cli.prompt, use_color)?;
    let client = HelpdeskClient::new(&config, credentials)?;
    tracing::info!(base_url = %client.base_url(), "client ready");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::execute(&client, config.page_size)?,
        Commands::Show { id } => commands::show::execute(&client, &id, formatter)?,
        Commands::List { page } => {
            commands::list::execute(&client, page, config.page_size, formatter)?
        }
    }

    Ok(())
}

/// Picks a credential strategy and resolves credentials.
///
/// Configured credentials are used unless `--prompt` is given. If they are
/// missing and stdin is a terminal, the user is prompted instead. A missing
/// helpdesk host is prompted for in the same way.
fn acquire_credentials(config: &mut Config, prompt: bool, use_color: bool) -> Result<Credentials> {
    if !prompt {
        let configured = ConfigCredentials::new(config).credentials();
        match configured {
            Ok(credentials) => {
                resolve_base_url(
                    config,
                    stdin_is_interactive(),
                    io::stdin().lock(),
                    io::stderr().lock(),
                )?;
                return Ok(credentials);
            }
            Err(Error::MissingCredentials(reason)) if stdin_is_interactive() => {
                print_warning(&format!("{}; prompting instead", reason), use_color);
            }
            Err(err) => return Err(err.into()),
        }
    }

    prompt_credentials(config)
}

fn prompt_credentials(config: &mut Config) -> Result<Credentials> {
    let stdin = io::stdin();
    let stderr = io::stderr();

    prompt_subdomain(config, stdin.lock(), stderr.lock())?;
    let source = PromptCredentials::new(stdin.lock(), stderr.lock(), config);
    Ok(source.credentials()?)
}

