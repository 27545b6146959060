//! Builders for the proof-assistant types
//!
//! These lay out generators, diagrams, rewrites and trees the way the
//! inspected program stores them, so the printers can be exercised against
//! realistic values.

use super::layouts::{option, pair, rc, string, vec};
use super::value::Value;
use super::Image;
use crate::layout::tags;
use crate::registry::TypeTag;

/// `Orientation::Positive`, `Orientation::Negative` or `Orientation::Zero`
pub fn orientation(variant: &str) -> Value {
    Value::variant(tags::ORIENTATION, variant, vec![])
}

pub fn generator(id: usize, dimension: usize, orientation_variant: &str) -> Value {
    Value::record(
        tags::GENERATOR,
        vec![
            ("id", Value::usize(id)),
            ("dimension", Value::usize(dimension)),
            ("orientation", orientation(orientation_variant)),
        ],
    )
}

/// `Boundary::Source` or `Boundary::Target`
pub fn boundary(variant: &str) -> Value {
    Value::variant(tags::BOUNDARY, variant, vec![])
}

pub fn singular_height(index: usize) -> Value {
    Value::variant(tags::HEIGHT, "Singular", vec![Value::usize(index)])
}

pub fn regular_height(index: usize) -> Value {
    Value::variant(tags::HEIGHT, "Regular", vec![Value::usize(index)])
}

pub fn boundary_slice(variant: &str) -> Value {
    Value::variant(tags::SLICE_INDEX, "Boundary", vec![boundary(variant)])
}

pub fn interior_slice(height: Value) -> Value {
    Value::variant(tags::SLICE_INDEX, "Interior", vec![height])
}

pub fn boundary_path(boundary_variant: &str, depth: usize) -> Value {
    Value::tuple(
        tags::BOUNDARY_PATH,
        vec![boundary(boundary_variant), Value::usize(depth)],
    )
}

pub fn label(inner: Value) -> Value {
    Value::tuple(tags::LABEL, vec![inner])
}

pub fn diagram0(generator: Value) -> Value {
    Value::variant(tags::DIAGRAM, "Diagram0", vec![generator])
}

/// `Diagram::DiagramN` with its internals shared behind an `Rc`
pub fn diagram_n(image: &mut Image, source: Value, cospans: Vec<Value>) -> Value {
    let internal = Value::record(
        tags::DIAGRAM_INTERNAL,
        vec![
            ("source", source),
            ("cospans", vec(image, tags::COSPAN, cospans)),
        ],
    );
    let shared = rc(image, internal);
    Value::variant(
        tags::DIAGRAM,
        "DiagramN",
        vec![Value::tuple(tags::DIAGRAM_N, vec![shared])],
    )
}

pub fn cospan(forward: Value, backward: Value) -> Value {
    Value::record(
        tags::COSPAN,
        vec![("forward", forward), ("backward", backward)],
    )
}

/// `Rewrite0`: `None` for the identity, otherwise a source and target generator
pub fn rewrite0(ends: Option<(Value, Value)>) -> Value {
    let pair_tag = format!("({0}, {0})", tags::GENERATOR);
    let inner = option(pair_tag, ends.map(|(source, target)| pair(source, target)));
    Value::tuple(tags::REWRITE0, vec![inner])
}

/// `Rewrite::Rewrite0`
pub fn rewrite_from0(rewrite: Value) -> Value {
    Value::variant(tags::REWRITE, "Rewrite0", vec![rewrite])
}

/// `Rewrite::RewriteN` with its internals shared behind an `Rc`
pub fn rewrite_n(image: &mut Image, dimension: usize, cones: Vec<Value>) -> Value {
    let internal = Value::record(
        tags::REWRITE_INTERNAL,
        vec![
            ("dimension", Value::usize(dimension)),
            ("cones", vec(image, tags::CONE, cones)),
        ],
    );
    let shared = rc(image, internal);
    Value::variant(
        tags::REWRITE,
        "RewriteN",
        vec![Value::tuple(tags::REWRITE_N, vec![shared])],
    )
}

/// `Cone` with its internals shared behind an `Rc`
pub fn cone(
    image: &mut Image,
    index: usize,
    source: Vec<Value>,
    target: Value,
    slices: Vec<Value>,
) -> Value {
    let internal = Value::record(
        tags::CONE_INTERNAL,
        vec![
            ("source", vec(image, tags::COSPAN, source)),
            ("target", target),
            ("slices", vec(image, tags::REWRITE, slices)),
        ],
    );
    Value::record(
        tags::CONE,
        vec![
            ("index", Value::usize(index)),
            ("internal", rc(image, internal)),
        ],
    )
}

pub fn generator_info(
    image: &mut Image,
    name: &str,
    generator: Value,
    diagram: Value,
    oriented: bool,
    invertible: bool,
) -> Value {
    Value::record(
        tags::GENERATOR_INFO,
        vec![
            ("generator", generator),
            ("name", string(image, name)),
            ("oriented", Value::bool(oriented)),
            ("invertible", Value::bool(invertible)),
            ("diagram", diagram),
        ],
    )
}

/// `SignatureItem::Item`
pub fn signature_item(info: Value) -> Value {
    Value::variant(tags::SIGNATURE_ITEM, "Item", vec![info])
}

/// `SignatureItem::Folder`
pub fn signature_folder(image: &mut Image, name: &str, open: bool) -> Value {
    let folder = Value::record(
        tags::FOLDER_INFO,
        vec![("name", string(image, name)), ("open", Value::bool(open))],
    );
    Value::variant(tags::SIGNATURE_ITEM, "Folder", vec![folder])
}

pub fn node(index: usize) -> Value {
    Value::tuple(tags::NODE, vec![Value::usize(index)])
}

/// `NodeData<T>` slot of a tree arena
pub fn node_data(image: &mut Image, data: Value, parent: Option<usize>, children: &[usize]) -> Value {
    let tag = TypeTag::generic(tags::NODE_DATA, &[&data.tag()]);
    let children = children.iter().map(|&i| node(i)).collect();
    Value::record(
        tag,
        vec![
            ("data", data),
            ("parent", option(tags::NODE, parent.map(node))),
            ("children", vec(image, tags::NODE, children)),
        ],
    )
}

/// `Tree<T>` over an arena of `NodeData<T>` slots
pub fn tree(image: &mut Image, data: impl Into<TypeTag>, slots: Vec<Value>, root: usize) -> Value {
    let data = data.into();
    let slot_tag = TypeTag::generic(tags::NODE_DATA, &[&data]);
    let raw = vec(image, slot_tag.clone(), slots);
    let nodes = Value::record(
        TypeTag::generic(tags::IDX_VEC, &[&TypeTag::from(tags::NODE), &slot_tag]),
        vec![("raw", raw)],
    );
    Value::record(
        TypeTag::generic(tags::TREE, &[&data]),
        vec![("nodes", nodes), ("root", node(root))],
    )
}
