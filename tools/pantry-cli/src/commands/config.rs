//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, PantryConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output.kv("data_file", &ctx.data_file().display().to_string());
    match ctx.config.storage.catalog {
        Some(ref catalog) => ctx.output.kv("catalog", &catalog.display().to_string()),
        None => ctx.output.kv("catalog", "(bundled)"),
    }

    ctx.output.info("");
    ctx.output.info("[cart]");
    ctx.output.kv("storage_key", &ctx.config.cart.storage_key);
    ctx.output.kv("max_quantity", &ctx.config.cart.max_quantity.to_string());
    for rule in &ctx.config.cart.minimum_orders {
        ctx.output.list_item(&format!(
            "minimum {} for {}",
            rule.quantity, rule.product_type
        ));
    }

    ctx.output.info("");
    ctx.output.info("[theme]");
    ctx.output.kv("storage_key", &ctx.config.theme.storage_key);
    ctx.output.kv("default_theme", ctx.config.theme.default_theme.as_str());

    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("shop_name", &ctx.config.checkout.shop_name);
    ctx.output.kv("tagline", &ctx.config.checkout.tagline);
    ctx.output.kv("whatsapp_number", &ctx.config.checkout.whatsapp_number);
    ctx.output.kv(
        "confirm_within_minutes",
        &ctx.config.checkout.confirm_within_minutes.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let name = if ctx.output.is_json() {
        CONFIG_NAMES[2]
    } else {
        CONFIG_NAMES[0]
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        PantryConfig::default().save(&config_path)?;
        ctx.output
            .json(&serde_json::json!({ "created": config_path.display().to_string() }));
        return Ok(());
    }

    fs::write(
        &config_path,
        generate_default_config(&ctx.config.checkout.shop_name),
    )?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.check();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
