use std::process::ExitCode;

use anyhow::Result;

use yams::presentation::ThemeAction;
use yams::{PreferencesUseCase, Theme};

use crate::ui::context::UiContext;

pub fn cmd_theme(
    preferences: &PreferencesUseCase,
    action: Option<ThemeAction>,
    ui: &UiContext,
) -> Result<ExitCode> {
    let theme = match action {
        None => preferences.theme(),
        Some(ThemeAction::Light) => preferences.set_theme(Theme::Light)?,
        Some(ThemeAction::Dark) => preferences.set_theme(Theme::Dark)?,
        Some(ThemeAction::Toggle) => preferences.toggle_theme()?,
    };

    if ui.json {
        crate::ui::json::emit(&serde_json::json!({
            "event": "theme",
            "theme": theme,
        }))?;
    } else {
        println!("Theme: {}", theme);
    }
    Ok(ExitCode::SUCCESS)
}
