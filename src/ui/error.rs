use crossterm::style::Stylize;

use yams::YamsError;

use crate::ui::terminal::detect_capabilities;

fn hint(err: &YamsError) -> Option<&'static str> {
    match err {
        YamsError::UnknownBoard { .. } => Some("Run 'yams show' to list boards by position and name."),
        YamsError::UnknownCategory { .. } | YamsError::NotFixedScore { .. } => {
            Some("Run 'yams categories' to list category ids.")
        }
        YamsError::SlotCrossed { .. } => Some("Uncross it with 'yams cross <board> <category>'."),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if supports_unicode { "✗" } else { "[ERROR]" };
    let head = if supports_color {
        format!("{}", icon.red().bold())
    } else {
        icon.to_string()
    };

    let mut out = format!("{} {}\n", head, err);
    if let Some(hint) = err.downcast_ref::<YamsError>().and_then(hint) {
        out.push_str("  ");
        out.push_str(hint);
        out.push('\n');
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(&output);
        return;
    }

    eprint!("{}", format_error(err));
}
