//! Arena-backed persistent tree
//!
//! The tree is a backing `Vec` of node slots plus a root index. The printer
//! lists every slot of the backing array, not just the nodes reachable from
//! the root, so stale or orphaned slots left behind by arena reuse show up in
//! the inspector too.

use super::Printed;
use crate::accessor::ValueAccessor;
use crate::constants::TRUNCATED;
use crate::layout::{TREE_NODES, TREE_ROOT};
use crate::render::engine::Printer;
use crate::render::{Child, RenderResult};

/// `Tree` with children `len`, `root`, then one per backing slot
pub(super) fn tree<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let nodes = p.path(value, TREE_NODES)?;
    let (len, data) = p.elements(&nodes)?;
    let root = p.field_text(value, TREE_ROOT);

    let shown = len.min(p.config().max_sequence_len);
    let mut children = Vec::with_capacity(shown + 3);
    children.push(Child::text("len", len.to_string()));
    children.push(Child::text("root", root));
    let mut truncated = false;
    for i in 0..shown {
        if p.exhausted() {
            children.push(Child::text("...", TRUNCATED));
            truncated = true;
            break;
        }
        children.push(p.element_child(i.to_string(), &data, i));
    }
    if len > shown && !truncated {
        children.push(Child::text("...", format!("<{} more>", len - shown)));
    }

    Ok(RenderResult::Composite {
        text: "Tree".to_string(),
        children,
    })
}
