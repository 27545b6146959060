use crate::render::decode::is_placeholder;
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::tree::Row;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Style for a rendered text, picked from its shape
pub(crate) fn value_style(text: &str, expandable: bool) -> Style {
    if is_placeholder(text) {
        // Placeholders stand out so they are never read as data
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::ITALIC)
    } else if text.starts_with('"') {
        Style::default().fg(DEFAULT_THEME.string)
    } else if text.starts_with(|c: char| c.is_ascii_digit() || c == '-') || text == "NULL" {
        Style::default().fg(DEFAULT_THEME.number)
    } else if expandable {
        Style::default().fg(DEFAULT_THEME.composite)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Format a row with styled spans
pub(crate) fn format_row_styled<H>(row: &Row<H>) -> Vec<Span<'static>> {
    let marker = match (row.is_expandable(), row.expanded) {
        (true, true) => "▾ ",
        (true, false) => "▸ ",
        (false, _) => "  ",
    };
    let text = row.rendered.text();

    vec![
        Span::raw("  ".repeat(row.depth)),
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(row.label.clone(), Style::default().fg(DEFAULT_THEME.label)),
        Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(text.to_string(), value_style(text, row.is_expandable())),
    ]
}
