use anyhow::{bail, Result};
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::ui::context::UiContext;

/// Ask before a bulk destructive action. `--yes` and `--json` skip the prompt;
/// without a terminal to ask on, the action is refused.
pub fn confirm(ui: &UiContext, yes: bool, prompt: &str) -> Result<bool> {
    if yes || ui.json {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        bail!("{} Re-run with --yes to confirm.", prompt);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Aborted.");
    }
    Ok(confirmed)
}
