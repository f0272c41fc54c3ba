use unicode_width::UnicodeWidthStr;

use yams::presentation::output::CategoryView;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Palette;

pub fn render_categories(categories: &[CategoryView], palette: Option<&Palette>) -> String {
    let id_width = categories
        .iter()
        .map(|c| c.id.as_str().len())
        .max()
        .unwrap_or(0);
    let label_width = categories
        .iter()
        .map(|c| UnicodeWidthStr::width(c.label))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let mut section = "";
    for c in categories {
        if c.section != section {
            section = c.section;
            out.push_str(&ColoredText::info(section).bold().render(palette));
            out.push('\n');
        }
        let label_pad = label_width.saturating_sub(UnicodeWidthStr::width(c.label));
        out.push_str(&format!(
            "  {:<id_width$}  {}{}  {}\n",
            c.id.as_str(),
            c.label,
            " ".repeat(label_pad),
            ColoredText::dim(c.hint).render(palette),
        ));
    }
    out
}
