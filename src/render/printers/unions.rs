//! Two-armed domain enums
//!
//! Each printer reads the discriminant first and only then touches the payload
//! of the active arm. An inactive arm is never read, so a missing payload
//! cannot be confused with unreadable memory.

use super::Printed;
use crate::accessor::ValueAccessor;
use crate::layout::TUPLE_0;
use crate::render::engine::Printer;
use crate::render::errors::RenderError;
use crate::render::RenderResult;

/// `SignatureItem::Item(info)` or `SignatureItem::Folder(folder)`; a folder
/// shows its name
pub(super) fn signature_item<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let variant = p.variant(value)?;
    let payload = match variant.as_str() {
        "Item" => p.path(value, &["Item", TUPLE_0])?,
        "Folder" => p.path(value, &["Folder", TUPLE_0, "name"])?,
        _ => {
            return Err(RenderError::UnknownVariant {
                ty: "SignatureItem",
                variant,
            })
        }
    };
    Ok(RenderResult::Leaf(p.text(&payload)))
}

/// `Rewrite::Rewrite0(r)` or `Rewrite::RewriteN(RewriteN(rc))`, delegating
/// text and children to the payload
pub(super) fn rewrite<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let variant = p.variant(value)?;
    let payload = match variant.as_str() {
        "Rewrite0" => p.path(value, &["Rewrite0", TUPLE_0])?,
        "RewriteN" => p.path(value, &["RewriteN", TUPLE_0, TUPLE_0])?,
        _ => {
            return Err(RenderError::UnknownVariant {
                ty: "Rewrite",
                variant,
            })
        }
    };
    Ok(p.render(&payload))
}

/// `Diagram::Diagram0(generator)` or `Diagram::DiagramN(DiagramN(rc))`,
/// delegating text and children to the payload
pub(super) fn diagram<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let variant = p.variant(value)?;
    let payload = match variant.as_str() {
        "Diagram0" => p.path(value, &["Diagram0", TUPLE_0])?,
        "DiagramN" => p.path(value, &["DiagramN", TUPLE_0, TUPLE_0])?,
        _ => {
            return Err(RenderError::UnknownVariant {
                ty: "Diagram",
                variant,
            })
        }
    };
    Ok(p.render(&payload))
}

/// `SliceIndex::Boundary(boundary)` or `SliceIndex::Interior(height)`
pub(super) fn slice_index<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let variant = p.variant(value)?;
    let payload = match variant.as_str() {
        "Boundary" => p.path(value, &["Boundary", TUPLE_0])?,
        "Interior" => p.path(value, &["Interior", TUPLE_0])?,
        _ => {
            return Err(RenderError::UnknownVariant {
                ty: "SliceIndex",
                variant,
            })
        }
    };
    Ok(RenderResult::Leaf(p.text(&payload)))
}

/// `Height::Singular(i)` as `s{i}`, `Height::Regular(i)` as `r{i}`
pub(super) fn height<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let variant = p.variant(value)?;
    let prefix = match variant.as_str() {
        "Singular" => "s",
        "Regular" => "r",
        _ => {
            return Err(RenderError::UnknownVariant {
                ty: "Height",
                variant,
            })
        }
    };
    let index = p.path(value, &[variant.as_str(), TUPLE_0])?;
    Ok(RenderResult::Leaf(format!("{}{}", prefix, p.text(&index))))
}
