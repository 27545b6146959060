//! Builders for standard-library layouts
//!
//! Each builder returns the header value (what a struct field of that type
//! would hold) and allocates any out-of-line storage in the image. Field names
//! follow [`crate::layout`], the same paths the printers read.

use super::value::Value;
use super::Image;
use crate::accessor::Address;
use crate::layout::tags;
use crate::registry::TypeTag;

/// `Vec<T>` whose buffer is allocated in the image
pub fn vec(image: &mut Image, elem: impl Into<TypeTag>, elements: Vec<Value>) -> Value {
    let len = elements.len();
    let address = image.allocate_array(elements);
    vec_header(elem, address, len)
}

/// `Vec<T>` header claiming `len` elements at `address`; nothing is allocated
pub fn vec_header(elem: impl Into<TypeTag>, address: Address, len: usize) -> Value {
    let elem = elem.into();
    let non_null = Value::record(
        TypeTag::generic(tags::NON_NULL, &[&elem]),
        vec![("pointer", Value::pointer(elem.clone(), address))],
    );
    let unique = Value::record(
        TypeTag::generic(tags::UNIQUE, &[&elem]),
        vec![("pointer", non_null)],
    );
    let raw = Value::record(
        TypeTag::generic(tags::RAW_VEC, &[&elem]),
        vec![("ptr", unique), ("cap", Value::usize(len))],
    );
    Value::record(
        TypeTag::generic(tags::VEC, &[&elem]),
        vec![("buf", raw), ("len", Value::usize(len))],
    )
}

/// `String` holding the bytes of `text`
pub fn string(image: &mut Image, text: &str) -> Value {
    let bytes = text.bytes().map(Value::u8).collect();
    Value::record(tags::STRING, vec![("vec", vec(image, "u8", bytes))])
}

/// `String` header claiming `len` bytes at `address`
pub fn string_header(address: Address, len: usize) -> Value {
    Value::record(tags::STRING, vec![("vec", vec_header("u8", address, len))])
}

/// `Option<T>`
pub fn option(param: impl Into<TypeTag>, value: Option<Value>) -> Value {
    let tag = TypeTag::generic(tags::OPTION, &[&param.into()]);
    match value {
        Some(value) => Value::variant(tag, "Some", vec![value]),
        None => Value::variant(tag, "None", vec![]),
    }
}

/// `(A, B)`
pub fn pair(first: Value, second: Value) -> Value {
    let tag = format!("({}, {})", first.tag(), second.tag());
    Value::tuple(tag, vec![first, second])
}

/// `Rc<T>` sharing a freshly allocated `value`
pub fn rc(image: &mut Image, value: Value) -> Value {
    let inner = value.tag();
    let box_tag = TypeTag::generic(tags::RC_BOX, &[&inner]);
    let address = image.allocate(Value::record(
        box_tag.clone(),
        vec![
            ("strong", Value::usize(1)),
            ("weak", Value::usize(1)),
            ("value", value),
        ],
    ));
    let non_null = Value::record(
        TypeTag::generic(tags::NON_NULL, &[&box_tag]),
        vec![("pointer", Value::pointer(box_tag, address))],
    );
    Value::record(TypeTag::generic(tags::RC, &[&inner]), vec![("ptr", non_null)])
}

/// `HConsed<T>` interning a freshly allocated `value`
pub fn hconsed(image: &mut Image, value: Value) -> Value {
    let inner = value.tag();
    let address = image.allocate(arc_inner(value));
    hconsed_header(inner, address)
}

/// `ArcInner<T>`, the heap cell an `HConsed<T>` points at
pub fn arc_inner(value: Value) -> Value {
    let tag = TypeTag::generic(tags::ARC_INNER, &[&value.tag()]);
    Value::record(
        tag,
        vec![
            ("strong", Value::usize(1)),
            ("weak", Value::usize(1)),
            ("data", value),
        ],
    )
}

/// `HConsed<T>` pointing at an existing `ArcInner<T>` cell
pub fn hconsed_header(inner: impl Into<TypeTag>, address: Address) -> Value {
    let inner = inner.into();
    let cell_tag = TypeTag::generic(tags::ARC_INNER, &[&inner]);
    let non_null = Value::record(
        TypeTag::generic(tags::NON_NULL, &[&cell_tag]),
        vec![("pointer", Value::pointer(cell_tag, address))],
    );
    let arc = Value::record(
        TypeTag::generic(tags::ARC, &[&inner]),
        vec![("ptr", non_null)],
    );
    Value::record(TypeTag::generic(tags::HCONSED, &[&inner]), vec![("elm", arc)])
}
