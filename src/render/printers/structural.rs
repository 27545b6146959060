//! Domain structs
//!
//! The rewrite and diagram internals are structural nodes: a fixed short tag
//! for text and a fixed list of named children for the console to expand.
//! The remaining printers here produce one-line records.

use super::Printed;
use crate::accessor::ValueAccessor;
use crate::layout::{TUPLE_0, TUPLE_1};
use crate::render::decode::{last_segment, orientation_symbol};
use crate::render::engine::Printer;
use crate::render::errors::RenderError;
use crate::render::RenderResult;

const BOUNDARY_PREFIX: &str = "homotopy_core::common::Boundary::";

/// Sign enumeration as `+`, `-` or `0`
pub(super) fn orientation<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let qualified = p.accessor().variant_name(value)?;
    Ok(RenderResult::Leaf(orientation_symbol(&qualified).to_string()))
}

/// `Source` or `Target`
pub(super) fn boundary<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let qualified = p.accessor().variant_name(value)?;
    let short = qualified
        .strip_prefix(BOUNDARY_PREFIX)
        .unwrap_or_else(|| last_segment(&qualified));
    Ok(RenderResult::Leaf(short.to_string()))
}

/// `(id:dimension:orientation)`
pub(super) fn generator<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let id = p.field_text(value, "id");
    let dimension = p.field_text(value, "dimension");
    let orientation = p.field_text(value, "orientation");
    Ok(RenderResult::Leaf(format!(
        "({}:{}:{})",
        id, dimension, orientation
    )))
}

/// `name, generator` with an `O` marker when oriented and an `I` marker when
/// invertible; the generator's diagram is available as a child
pub(super) fn generator_info<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let name = p.field_text(value, "name");
    let generator = p.field_text(value, "generator");

    let mut text = format!("{}, {}", name, generator);
    push_flag(&mut text, p.bool_field(value, "oriented"), 'O');
    push_flag(&mut text, p.bool_field(value, "invertible"), 'I');

    Ok(RenderResult::Composite {
        text,
        children: vec![p.child("diagram", value, "diagram")],
    })
}

/// An unreadable flag shows its placeholder where the marker would be
fn push_flag(text: &mut String, flag: Result<bool, RenderError>, marker: char) {
    match flag {
        Ok(true) => text.push(marker),
        Ok(false) => {}
        Err(err) => text.push_str(&err.placeholder()),
    }
}

/// `Label(path)`
pub(super) fn label<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let inner = p.field_text(value, TUPLE_0);
    Ok(RenderResult::Leaf(format!("Label({})", inner)))
}

/// `(boundary,depth)`
pub(super) fn boundary_path<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let boundary = p.field_text(value, TUPLE_0);
    let depth = p.field_text(value, TUPLE_1);
    Ok(RenderResult::Leaf(format!("({},{})", boundary, depth)))
}

/// Wrapper types shown as their only field
pub(super) fn passthrough<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
    field: &str,
) -> Printed<A::Handle> {
    let inner = p.field(value, field)?;
    Ok(RenderResult::Leaf(p.text(&inner)))
}

pub(super) fn cospan<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    Ok(RenderResult::Composite {
        text: "Cospan".to_string(),
        children: vec![
            p.child("fwd", value, "forward"),
            p.child("bwd", value, "backward"),
        ],
    })
}

/// `Rewrite0(Option<(Generator, Generator)>)`; the identity rewrite has no
/// children
pub(super) fn rewrite0<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let inner = p.field(value, TUPLE_0)?;
    let variant = p.variant(&inner)?;
    match variant.as_str() {
        "Some" => {
            let pair = p.path(&inner, &["Some", TUPLE_0])?;
            Ok(RenderResult::Composite {
                text: "R0".to_string(),
                children: vec![p.child("src", &pair, TUPLE_0), p.child("tgt", &pair, TUPLE_1)],
            })
        }
        "None" => Ok(RenderResult::Leaf("R0".to_string())),
        _ => Err(RenderError::UnknownVariant {
            ty: "Rewrite0",
            variant,
        }),
    }
}

pub(super) fn rewrite_internal<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    Ok(RenderResult::Composite {
        text: "RInt".to_string(),
        children: vec![
            p.child("dim", value, "dimension"),
            p.child("cones", value, "cones"),
        ],
    })
}

pub(super) fn cone<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    Ok(RenderResult::Composite {
        text: "Cone".to_string(),
        children: vec![
            p.child("idx", value, "index"),
            p.child("int", value, "internal"),
        ],
    })
}

pub(super) fn cone_internal<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    Ok(RenderResult::Composite {
        text: "ConeInt".to_string(),
        children: vec![
            p.child("src", value, "source"),
            p.child("tgt", value, "target"),
            p.child("slices", value, "slices"),
        ],
    })
}

pub(super) fn diagram_internal<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    Ok(RenderResult::Composite {
        text: "DiagInt".to_string(),
        children: vec![
            p.child("src", value, "source"),
            p.child("cospans", value, "cospans"),
        ],
    })
}
