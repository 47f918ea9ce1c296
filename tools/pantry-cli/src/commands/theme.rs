//! Theme preference.

use anyhow::Result;
use pantry_commerce::theme::Theme;

use super::{ThemeArgs, ThemeCommand};
use crate::context::Context;

/// Run the theme command.
pub fn run(args: ThemeArgs, ctx: &Context) -> Result<()> {
    let store = ctx.theme()?;

    let theme = match args.command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => store.current(),
        ThemeCommand::Toggle => store.toggle()?,
        ThemeCommand::Set { theme } => {
            let theme: Theme = theme.parse()?;
            store.set(theme)?;
            theme
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "theme": theme }));
    } else {
        ctx.output.kv("Theme", theme.as_str());
        ctx.output
            .kv("Toggle", &format!("{} {}", theme.toggle_icon(), theme.toggle_label()));
    }

    Ok(())
}
