//! Pantry CLI - terminal storefront for the pickles and powders shop.
//!
//! Commands:
//! - `pantry cart` - Show and edit the cart
//! - `pantry variants` - Pick weight variants of a product
//! - `pantry catalog` - Browse products by category
//! - `pantry theme` - Show or switch the colour theme
//! - `pantry checkout` - Validate the order and hand it off
//! - `pantry config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CatalogArgs, CheckoutArgs, ConfigArgs, ThemeArgs, VariantsArgs};

/// Pantry CLI - Browse, fill and check out the storefront cart
#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Storage file path, overriding the config
    #[arg(long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show and edit the cart
    Cart(CartArgs),

    /// Choose quantities for the weight variants of a product
    Variants(VariantsArgs),

    /// List products, optionally for one category
    Catalog(CatalogArgs),

    /// Show or change the colour theme
    Theme(ThemeArgs),

    /// Place the order through the messaging handoff
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose > 0, cli.json);
    let ctx = match context::Context::load(cli.config.as_deref(), cli.data.as_deref(), output) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::Output::new(false, cli.json).error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Variants(args) => commands::variants::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Theme(args) => commands::theme::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
