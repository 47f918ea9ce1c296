//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod theme;
pub mod variants;

use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default).
    Show,
    /// Add a product, merging with what is already in the cart.
    Add {
        /// Product name.
        product: String,
        /// Weight variant, for products sold by weight.
        #[arg(short, long)]
        weight: Option<String>,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Overwrite a line's quantity; 0 or less removes it.
    Set {
        /// Product name.
        product: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Weight variant of the line.
        #[arg(short, long)]
        weight: Option<String>,
    },
    /// Remove a line.
    Remove {
        /// Product name.
        product: String,
        /// Weight variant of the line.
        #[arg(short, long)]
        weight: Option<String>,
    },
    /// Step a single-unit product up by one.
    Inc {
        /// Product name.
        product: String,
    },
    /// Step a single-unit product down by one.
    Dec {
        /// Product name.
        product: String,
    },
    /// Type a quantity for a single-unit product.
    Input {
        /// Product name.
        product: String,
        /// Quantity typed.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the variants command.
#[derive(Args)]
pub struct VariantsArgs {
    /// Product name.
    pub product: String,

    /// Intended quantities as `<weight>=<quantity>`, e.g. `250gm=2`.
    #[arg(required = true)]
    pub quantities: Vec<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category to show: chapathi, pickle, powder or all.
    #[arg(default_value = "all")]
    pub category: String,
}

/// Arguments for the theme command.
#[derive(Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Show the current theme (default).
    Show,
    /// Switch between dark and light.
    Toggle,
    /// Set the theme.
    Set {
        /// `dark` or `light`.
        theme: String,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Delivery address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// Delivery slot, or `custom`.
    #[arg(long, default_value = "")]
    pub timing: String,

    /// Preferred time when `--timing custom`.
    #[arg(long, default_value = "")]
    pub custom_time: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
