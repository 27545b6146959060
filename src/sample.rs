//! Demo session for the inspector
//!
//! Builds a memory image holding one value of every shape the printers know
//! about, plus a few broken ones: a freed cell, a string pointing into
//! unmapped memory, a self-referential interned value and a type no rule
//! matches.

use crate::accessor::AccessError;
use crate::image::domain::{
    boundary_path, boundary_slice, cone, cospan, diagram0, diagram_n, generator, generator_info,
    interior_slice, label, node_data, orientation, regular_height, rewrite0, rewrite_from0,
    rewrite_n, signature_folder, signature_item, singular_height, tree,
};
use crate::image::layouts::{arc_inner, hconsed, hconsed_header, option, string, string_header, vec};
use crate::image::value::Value;
use crate::image::{Image, ImageHandle};
use crate::layout::tags;

/// Address no cell is ever allocated at
const UNMAPPED: u64 = 0xdead_0000;

/// A memory image plus the named values a console would show at the top level
pub struct Session {
    pub image: Image,
    pub roots: Vec<(String, ImageHandle)>,
}

impl Session {
    fn new() -> Self {
        Session {
            image: Image::new(),
            roots: Vec::new(),
        }
    }

    /// Store `value` in its own cell and list it under `name`
    fn root(&mut self, name: &str, value: Value) -> ImageHandle {
        let handle = ImageHandle::at(self.image.allocate(value));
        self.roots.push((name.to_string(), handle.clone()));
        handle
    }
}

pub fn sample_session() -> Result<Session, AccessError> {
    let mut s = Session::new();

    let greeting = string(&mut s.image, "hello, world");
    s.root("greeting", greeting);
    let ids = vec(
        &mut s.image,
        "usize",
        vec![Value::usize(1), Value::usize(2), Value::usize(3)],
    );
    s.root("ids", ids);
    s.root("maybe", option("usize", Some(Value::usize(7))));
    s.root("nothing", option("usize", None));

    // A signature with a point, a second point and an arrow between them
    let x = generator(0, 0, "Positive");
    let y = generator(1, 0, "Positive");
    let f = generator(2, 1, "Positive");

    let x_info = generator_info(&mut s.image, "x", x.clone(), diagram0(x.clone()), true, false);
    s.root("x", signature_item(x_info));
    let folder = signature_folder(&mut s.image, "points", true);
    s.root("folder", folder);

    let arrow = cospan(
        rewrite_from0(rewrite0(Some((x.clone(), f.clone())))),
        rewrite_from0(rewrite0(Some((y, f.clone())))),
    );
    let f_diagram = diagram_n(&mut s.image, diagram0(x), vec![arrow.clone()]);
    let f_info = generator_info(&mut s.image, "f", f, f_diagram, true, true);
    s.root("f", f_info);

    // A rewrite with a single cone collapsing the arrow onto itself
    let identity = rewrite_from0(rewrite0(None));
    let collapse = cone(
        &mut s.image,
        0,
        vec![arrow.clone()],
        arrow,
        vec![identity.clone(), identity],
    );
    let homotopy = rewrite_n(&mut s.image, 1, vec![collapse]);
    s.root("homotopy", homotopy);

    s.root("orientation", orientation("Negative"));
    s.root("height", regular_height(3));
    s.root("slice", interior_slice(singular_height(2)));
    s.root("boundary", boundary_slice("Source"));
    let path = boundary_path("Target", 1);
    let interned = hconsed(&mut s.image, path);
    s.root("label", label(interned));

    // Slot 3 is orphaned: nothing points at it, it still shows up
    let slots = vec![
        node_data(&mut s.image, Value::usize(10), None, &[1, 2]),
        node_data(&mut s.image, Value::usize(11), Some(0), &[]),
        node_data(&mut s.image, Value::usize(12), Some(0), &[]),
        node_data(&mut s.image, Value::usize(99), None, &[]),
    ];
    let arena = tree(&mut s.image, "usize", slots, 0);
    s.root("tree", arena);

    let stale = string(&mut s.image, "gone");
    let stale = s.root("stale", stale);
    s.image.free(stale.address())?;
    s.root("dangling", string_header(UNMAPPED, 4));

    let cell = s.image.reserve(tags::ARC_INNER);
    let header = hconsed_header("homotopy_core::Knot", cell);
    s.image.store(cell, arc_inner(header.clone()))?;
    s.root("cycle", header);

    s.root(
        "mystery",
        Value::record(
            "homotopy_core::Mystery",
            vec![("depth", Value::usize(4)), ("flag", Value::bool(true))],
        ),
    );

    Ok(s)
}
