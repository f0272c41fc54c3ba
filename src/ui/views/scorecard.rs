use unicode_width::UnicodeWidthStr;

use yams::domain::services::board_totals;
use yams::domain::value_objects::{lower_section, upper_section, Category};
use yams::{Board, BoardGroup, BonusStatus, CellState, Totals};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{Icons, Palette};

const MIN_COLUMN: usize = 6;

fn pad_left(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), text)
}

fn pad_right(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(w)))
}

/// Bonus standing as shown under the grid.
pub fn bonus_text(totals: &Totals) -> ColoredText {
    let status = totals.bonus_status;
    let label = match status {
        BonusStatus::OnTrack { advance }
        | BonusStatus::AtRisk { advance }
        | BonusStatus::Lost { advance } => format!("{} ({:+})", status.label(), advance),
        _ => status.label().to_string(),
    };
    match status {
        BonusStatus::OnTrack { .. } | BonusStatus::Earned => ColoredText::success(label),
        BonusStatus::AtRisk { .. } => ColoredText::warning(label),
        BonusStatus::Lost { .. } | BonusStatus::Missed => ColoredText::error(label),
        BonusStatus::Pending => ColoredText::dim(label),
    }
}

/// Score grid of the active group: one row per category, one column per board.
pub struct ScorecardView<'a> {
    mode: BoardGroup,
    boards: &'a [Board],
    session_total: u32,
}

impl<'a> ScorecardView<'a> {
    pub fn new(mode: BoardGroup, boards: &'a [Board], session_total: u32) -> Self {
        Self {
            mode,
            boards,
            session_total,
        }
    }

    pub fn render(&self, palette: Option<&Palette>, icons: Icons) -> String {
        let mut out = String::new();
        out.push_str(
            &ColoredText::info(format!("Mode: {}", self.mode))
                .bold()
                .render(palette),
        );
        out.push('\n');

        if self.boards.is_empty() {
            out.push_str(&ColoredText::dim("No boards. Add one with 'yams add'.").render(palette));
            out.push('\n');
            return out;
        }

        let totals: Vec<Totals> = self.boards.iter().map(board_totals).collect();

        let label_width = upper_section()
            .iter()
            .chain(lower_section())
            .map(|c| UnicodeWidthStr::width(c.label))
            .chain(["Upper total", "Grand total"].iter().map(|s| s.len()))
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .boards
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let heading = format!("{}.{}", i + 1, b.name());
                UnicodeWidthStr::width(heading.as_str()).max(MIN_COLUMN)
            })
            .collect();
        let rule_width = label_width + widths.iter().map(|w| w + 2).sum::<usize>();
        let rule = ColoredText::dim(icons.separator.repeat(rule_width)).render(palette);

        let mut header = pad_right("", label_width);
        for (i, (board, width)) in self.boards.iter().zip(&widths).enumerate() {
            header.push_str("  ");
            let heading = format!("{}.{}", i + 1, board.name());
            header.push_str(&ColoredText::plain(pad_left(&heading, *width)).bold().render(palette));
        }
        out.push_str(&header);
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        let category_row = |out: &mut String, category: &Category| {
            out.push_str(&pad_right(category.label, label_width));
            for (board, width) in self.boards.iter().zip(&widths) {
                out.push_str("  ");
                let cell = match board.cell(category.id) {
                    CellState::Open => ColoredText::dim(pad_left(icons.open, *width)),
                    CellState::Scored(v) => ColoredText::plain(pad_left(&v.to_string(), *width)),
                    CellState::Crossed => ColoredText::error(pad_left(icons.crossed, *width)),
                };
                out.push_str(&cell.render(palette));
            }
            out.push('\n');
        };
        let sum_row = |out: &mut String, label: &str, value: &dyn Fn(&Totals) -> String| {
            out.push_str(&ColoredText::plain(pad_right(label, label_width)).bold().render(palette));
            for (t, width) in totals.iter().zip(&widths) {
                out.push_str("  ");
                out.push_str(&pad_left(&value(t), *width));
            }
            out.push('\n');
        };

        for category in upper_section() {
            category_row(&mut out, category);
        }
        out.push_str(&rule);
        out.push('\n');
        sum_row(&mut out, "Upper", &|t| t.upper_sum.to_string());
        sum_row(&mut out, "Bonus", &|t| t.bonus.to_string());
        sum_row(&mut out, "Upper total", &|t| t.upper_total.to_string());
        out.push_str(&rule);
        out.push('\n');
        for category in lower_section() {
            category_row(&mut out, category);
        }
        out.push_str(&rule);
        out.push('\n');
        sum_row(&mut out, "Lower", &|t| t.lower_sum.to_string());
        sum_row(&mut out, "Grand total", &|t| t.grand_total.to_string());

        out.push('\n');
        for (board, t) in self.boards.iter().zip(&totals) {
            out.push_str(&format!(
                "{} bonus: {}\n",
                board.name(),
                bonus_text(t).render(palette)
            ));
        }

        if self.boards.len() > 1 {
            out.push_str(
                &ColoredText::plain(format!("Session total: {}", self.session_total))
                    .bold()
                    .render(palette),
            );
            out.push('\n');
        }

        out
    }
}
