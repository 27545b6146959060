//! Plain-text rendering of a value tree, for `--dump`

use super::tree::{Row, ValueTree};
use crate::accessor::ValueAccessor;
use crate::render::Engine;

const INDENT: &str = "  ";

/// One line per row: indentation, an expansion marker, the label and the text
pub fn format_row<H>(row: &Row<H>) -> String {
    let marker = match (row.is_expandable(), row.expanded) {
        (true, true) => "- ",
        (true, false) => "+ ",
        (false, _) => "  ",
    };
    format!(
        "{}{}{} = {}",
        INDENT.repeat(row.depth),
        marker,
        row.label,
        row.rendered.text()
    )
}

/// Render `roots`, open them `levels` deep and lay the result out as text
pub fn dump<A>(engine: &Engine<'_, A>, roots: &[(String, A::Handle)], levels: usize) -> String
where
    A: ValueAccessor,
{
    let mut tree = ValueTree::new(engine, roots);
    tree.expand_levels(engine, levels);

    let mut out = String::new();
    for row in tree.rows() {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}
