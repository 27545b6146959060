//! Printers for standard-library shapes

use super::Printed;
use crate::accessor::{AccessError, ValueAccessor};
use crate::constants::{NONE, TRUNCATED};
use crate::layout::{
    HCONSED_DATA, HCONSED_PTR, RC_PTR, RC_VALUE, STRING_VEC, TUPLE_0, VEC_DATA, VEC_LEN,
};
use crate::render::decode::{decode_bytes, format_scalar, quote};
use crate::render::engine::Printer;
use crate::render::errors::RenderError;
use crate::render::RenderResult;

/// `String`: the bytes of its buffer, quoted
pub(super) fn string<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let vec = p.field(value, STRING_VEC)?;
    let len = p.usize_field(&vec, VEC_LEN)?;
    if len == 0 {
        return Ok(RenderResult::Leaf(quote("")));
    }
    if len > p.config().max_string_len {
        return Err(RenderError::BadLength { len });
    }

    let accessor = p.accessor();
    let data = p.path(&vec, VEC_DATA)?;
    if accessor.is_null(&data)? {
        return Err(RenderError::Unreadable(AccessError::NullPointer));
    }

    let mut bytes = Vec::with_capacity(len);
    for i in 0..len {
        let scalar = accessor.scalar(&accessor.index(&data, i)?)?;
        let byte = scalar.as_byte().ok_or(RenderError::UnexpectedScalar {
            expected: "byte",
            found: scalar,
        })?;
        bytes.push(byte);
    }

    Ok(RenderResult::Leaf(quote(&decode_bytes(&bytes))))
}

/// `Option<T>`: the wrapped value's text, or `None`
pub(super) fn option<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let variant = p.variant(value)?;
    match variant.as_str() {
        "Some" => {
            let payload = p.path(value, &["Some", TUPLE_0])?;
            Ok(RenderResult::Leaf(p.text(&payload)))
        }
        "None" => Ok(RenderResult::Leaf(NONE.to_string())),
        _ => Err(RenderError::UnknownVariant {
            ty: "Option",
            variant,
        }),
    }
}

/// `Vec<T>`: every element on one line, `[a,b,c]`. Listing stops at the
/// first element the visit budget no longer covers.
pub(super) fn vec<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let (len, data) = p.elements(value)?;
    let shown = len.min(p.config().max_sequence_len);

    let mut parts = Vec::with_capacity(shown + 1);
    let mut truncated = false;
    for i in 0..shown {
        if p.exhausted() {
            parts.push(TRUNCATED.to_string());
            truncated = true;
            break;
        }
        parts.push(p.element_text(&data, i));
    }
    if len > shown && !truncated {
        parts.push(format!("<{} more>", len - shown));
    }

    Ok(RenderResult::Leaf(format!("[{}]", parts.join(","))))
}

/// `Rc<T>`: transparent, renders the shared value
pub(super) fn rc<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let pointer = p.path(value, RC_PTR)?;
    let cell = p.accessor().deref(&pointer)?;
    let shared = p.field(&cell, RC_VALUE)?;
    Ok(p.render(&shared))
}

/// `HConsed<T>`: transparent, renders the interned value
pub(super) fn hconsed<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let pointer = p.path(value, HCONSED_PTR)?;
    let cell = p.accessor().deref(&pointer)?;
    let interned = p.field(&cell, HCONSED_DATA)?;
    Ok(p.render(&interned))
}

/// Primitive leaves
pub(super) fn scalar<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    let scalar = p.accessor().scalar(value)?;
    Ok(RenderResult::Leaf(format_scalar(scalar)))
}

/// Types no rule matched: the accessor's own rendering
pub(super) fn raw<A: ValueAccessor>(
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    Ok(RenderResult::Leaf(p.accessor().raw_text(value)?))
}
