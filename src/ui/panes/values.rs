//! Values pane: the expandable tree of rendered roots
//!
//! Each visible row shows its indentation, an expansion marker, the label and
//! the rendered text. The selected row is highlighted and kept on screen.

use super::formatting::format_row_styled;
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::tree::Row;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the values pane
#[derive(Debug, Default)]
pub struct ValuesScrollState {
    pub offset: usize,
}

/// Data needed to render the values pane
pub struct ValuesRenderData<'a, H> {
    pub rows: &'a [Row<H>],
    pub selected: usize,
}

/// Render the values pane
pub fn render_values_pane<H>(
    frame: &mut Frame,
    area: Rect,
    data: ValuesRenderData<H>,
    scroll_state: &mut ValuesScrollState,
) {
    let border_style = Style::default()
        .fg(DEFAULT_THEME.border_focused)
        .add_modifier(Modifier::BOLD);

    let block = Block::default()
        .title(" Values ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let total_items = data.rows.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Keep the selection inside the window
    if data.selected < scroll_state.offset {
        scroll_state.offset = data.selected;
    } else if data.selected >= scroll_state.offset + visible_height {
        scroll_state.offset = data.selected + 1 - visible_height;
    }
    scroll_state.offset = scroll_state
        .offset
        .min(total_items.saturating_sub(visible_height));

    let items: Vec<ListItem> = if data.rows.is_empty() {
        vec![ListItem::new("(no values)").style(Style::default().fg(DEFAULT_THEME.comment))]
    } else {
        data.rows
            .iter()
            .enumerate()
            .skip(scroll_state.offset)
            .take(visible_height)
            .map(|(i, row)| {
                let item = ListItem::new(Line::from(format_row_styled(row)));
                if i == data.selected {
                    item.style(
                        Style::default()
                            .bg(DEFAULT_THEME.current_line_bg)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    item
                }
            })
            .collect()
    };

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
