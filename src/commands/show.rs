use std::process::ExitCode;

use anyhow::Result;

use yams::presentation::output::{category_views, SessionView};
use yams::{BoardGroup, ScorecardUseCase};

use crate::ui::context::UiContext;
use crate::ui::views::categories::render_categories;
use crate::ui::views::scorecard::ScorecardView;

pub fn cmd_show(scorecard: &ScorecardUseCase, ui: &UiContext) -> Result<ExitCode> {
    if ui.json {
        let view = SessionView::new(
            scorecard.mode(),
            scorecard.boards(),
            scorecard.session_total(),
        );
        crate::ui::json::emit(&view)?;
        return Ok(ExitCode::SUCCESS);
    }

    let palette = ui.palette();
    print!(
        "{}",
        ScorecardView::new(
            scorecard.mode(),
            scorecard.boards(),
            scorecard.session_total()
        )
        .render(palette.as_ref(), ui.icons())
    );
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_mode(
    scorecard: &mut ScorecardUseCase,
    mode: Option<BoardGroup>,
    ui: &UiContext,
) -> Result<ExitCode> {
    if let Some(mode) = mode {
        scorecard.switch_mode(mode);
    }

    if ui.json {
        crate::ui::json::emit(&serde_json::json!({
            "event": "mode",
            "mode": scorecard.mode(),
            "boards": scorecard.boards().len(),
        }))?;
    } else {
        println!(
            "Mode: {} ({} boards)",
            scorecard.mode(),
            scorecard.boards().len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_categories(ui: &UiContext) -> Result<ExitCode> {
    let views = category_views();
    if ui.json {
        crate::ui::json::emit(&views)?;
    } else {
        let palette = ui.palette();
        print!("{}", render_categories(&views, palette.as_ref()));
    }
    Ok(ExitCode::SUCCESS)
}
