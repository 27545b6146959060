// Tests for unreadable memory, malformed values and render budgets

use std::time::{Duration, Instant};

use valscope::accessor::AccessError;
use valscope::constants::{DEFAULT_MAX_VISITS, TRUNCATED};
use valscope::image::domain::{boundary_path, diagram0, generator, label, node_data, tree};
use valscope::image::layouts::{
    arc_inner, hconsed, hconsed_header, string, string_header, vec, vec_header,
};
use valscope::image::value::Value;
use valscope::image::{CellState, Image, ImageHandle, SLOT_SIZE};
use valscope::layout::tags;
use valscope::render::{Engine, RenderConfig};

const UNMAPPED: u64 = 0xdead_0000;

fn store(image: &mut Image, value: Value) -> ImageHandle {
    ImageHandle::at(image.allocate(value))
}

fn text_of(image: &Image, handle: &ImageHandle) -> String {
    Engine::new(image).render(handle).into_text()
}

fn text_with(image: &Image, config: RenderConfig, handle: &ImageHandle) -> String {
    Engine::new(image)
        .with_config(config)
        .render(handle)
        .into_text()
}

#[test]
fn test_string_with_unmapped_buffer() {
    let mut image = Image::new();
    let handle = store(&mut image, string_header(UNMAPPED, 4));
    assert_eq!(text_of(&image, &handle), "<unreadable>");
}

#[test]
fn test_string_with_null_buffer() {
    let mut image = Image::new();
    let handle = store(&mut image, string_header(0, 4));
    assert_eq!(text_of(&image, &handle), "<unreadable>");
}

#[test]
fn test_string_with_freed_buffer() {
    let mut image = Image::new();
    let base = image.allocate_array(vec![Value::u8(b'h'), Value::u8(b'i')]);
    let handle = store(&mut image, string_header(base, 2));
    assert_eq!(text_of(&image, &handle), "\"hi\"");

    image.free(base).expect("free buffer");
    assert_eq!(text_of(&image, &handle), "<unreadable>");
}

#[test]
fn test_string_with_implausible_length() {
    let mut image = Image::new();
    let handle = store(&mut image, string_header(UNMAPPED, 1_000_000));
    assert_eq!(text_of(&image, &handle), "<bad length 1000000>");

    let config = RenderConfig::default().with_max_string_len(4);
    let short = string(&mut image, "hello");
    let short = store(&mut image, short);
    assert_eq!(text_with(&image, config, &short), "<bad length 5>");
}

#[test]
fn test_freed_root_cell() {
    let mut image = Image::new();
    let value = string(&mut image, "gone");
    let handle = store(&mut image, value);
    image.free(handle.address()).expect("free root");

    assert_eq!(image.cell_state(handle.address()), Some(CellState::Tombstone));
    assert_eq!(text_of(&image, &handle), "<unreadable>");
}

#[test]
fn test_double_free_is_reported() {
    let mut image = Image::new();
    let address = image.allocate(Value::usize(1));
    assert!(image.free(address).is_ok());
    assert_eq!(image.free(address), Err(AccessError::Freed { address }));
    assert_eq!(
        image.free(UNMAPPED),
        Err(AccessError::Unmapped { address: UNMAPPED })
    );
}

#[test]
fn test_uninitialized_cell() {
    let mut image = Image::new();
    let address = image.reserve(tags::STRING);
    let handle = ImageHandle::at(address);
    assert_eq!(text_of(&image, &handle), "<unreadable>");
}

#[test]
fn test_missing_field_is_malformed_not_unreadable() {
    let mut image = Image::new();
    let handle = store(
        &mut image,
        Value::record(
            tags::GENERATOR,
            vec![("id", Value::usize(1)), ("dimension", Value::usize(2))],
        ),
    );
    let text = text_of(&image, &handle);
    assert!(text.starts_with("(1:2:<malformed:"), "got {}", text);
    assert!(text.contains("orientation"), "got {}", text);
}

#[test]
fn test_unreadable_flag_keeps_the_rest_of_generator_info() {
    let mut image = Image::new();
    let x = generator(0, 0, "Positive");
    let name = string(&mut image, "x");
    let handle = store(
        &mut image,
        Value::record(
            tags::GENERATOR_INFO,
            vec![
                ("generator", x.clone()),
                ("name", name),
                ("oriented", Value::uninitialized("bool")),
                ("invertible", Value::bool(true)),
                ("diagram", diagram0(x)),
            ],
        ),
    );

    let engine = Engine::new(&image);
    let result = engine.render(&handle);
    assert_eq!(result.text(), "\"x\", (0:0:+)<unreadable>I");
    assert_eq!(result.children().len(), 1);
    assert_eq!(result.children()[0].label, "diagram");
    assert_eq!(engine.render_child(&result.children()[0]).text(), "(0:0:+)");
}

#[test]
fn test_failure_spoils_only_its_own_slot() {
    let mut image = Image::new();
    let good = string(&mut image, "a");
    let base = image.allocate_array(vec![Value::u8(b'b')]);
    let bad = string_header(base, 1);
    image.free(base).expect("free buffer");
    let value = vec(&mut image, tags::STRING, vec![good, bad]);
    let handle = store(&mut image, value);

    assert_eq!(text_of(&image, &handle), "[\"a\",<unreadable>]");
}

#[test]
fn test_vec_with_unmapped_buffer() {
    let mut image = Image::new();
    let handle = store(&mut image, vec_header("usize", UNMAPPED, 2));
    assert_eq!(text_of(&image, &handle), "[<unreadable>,<unreadable>]");
}

#[test]
fn test_self_referential_chain_truncates() {
    let mut image = Image::new();
    let cell = image.reserve(tags::ARC_INNER);
    let header = hconsed_header("homotopy_core::Knot", cell);
    image
        .store(cell, arc_inner(header.clone()))
        .expect("store cycle");
    let handle = store(&mut image, header);

    let started = Instant::now();
    assert_eq!(text_of(&image, &handle), "<truncated>");
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_depth_budget_smaller_than_natural_depth() {
    let mut image = Image::new();
    let interned = hconsed(&mut image, boundary_path("Target", 1));
    let handle = store(&mut image, label(interned));

    assert_eq!(text_of(&image, &handle), "Label((Target,1))");
    let shallow = RenderConfig::default().with_max_depth(3);
    assert_eq!(
        text_with(&image, shallow, &handle),
        "Label((<truncated>,<truncated>))"
    );
}

#[test]
fn test_visit_budget() {
    let mut image = Image::new();
    let elements = (1..=5).map(Value::usize).collect();
    let value = vec(&mut image, "usize", elements);
    let handle = store(&mut image, value);

    let config = RenderConfig::default().with_max_visits(3);
    assert_eq!(
        text_with(&image, config, &handle),
        "[1,2,<truncated>]"
    );
}

/// A buffer of `len` vectors that all point back at the buffer itself
fn knotted_vec(image: &mut Image, len: usize) -> ImageHandle {
    let base = image.allocate_array((0..len).map(|_| Value::usize(0)).collect());
    let knot = vec_header("Knot", base, len);
    for i in 0..len {
        image
            .store(base + i as u64 * SLOT_SIZE, knot.clone())
            .expect("store knot");
    }
    store(image, knot)
}

#[test]
fn test_exhausted_vec_stops_listing() {
    let mut image = Image::new();
    let handle = knotted_vec(&mut image, 2);

    let config = RenderConfig::default().with_max_visits(3);
    assert_eq!(
        text_with(&image, config, &handle),
        "[[[<truncated>],<truncated>],<truncated>]"
    );
}

#[test]
fn test_self_referential_vec_output_is_bounded() {
    let mut image = Image::new();
    let handle = knotted_vec(&mut image, 200);

    let started = Instant::now();
    let text = text_of(&image, &handle);
    assert!(started.elapsed() < Duration::from_secs(1));

    // One marker per truncated call plus at most one per listed vector
    let markers = text.matches(TRUNCATED).count();
    assert!(markers <= 2 * DEFAULT_MAX_VISITS, "{} markers", markers);
    assert!(
        text.len() < 2 * DEFAULT_MAX_VISITS * (TRUNCATED.len() + 3),
        "{} bytes",
        text.len()
    );
}

#[test]
fn test_each_expansion_gets_a_fresh_budget() {
    let mut image = Image::new();
    let slots = vec![node_data(&mut image, generator(0, 0, "Positive"), None, &[])];
    let value = tree(&mut image, tags::GENERATOR, slots, 0);
    let handle = store(&mut image, value);

    // Enough for the tree and its root index, one short for a whole generator
    let engine = Engine::new(&image).with_config(RenderConfig::default().with_max_visits(4));
    let result = engine.render(&handle);
    assert_eq!(result.text(), "Tree");

    let slot = engine.render_child(&result.children()[2]);
    assert_eq!(slot.text(), "(0:0:<truncated>)");
    let again = engine.render_child(&result.children()[2]);
    assert_eq!(again, slot);
}

#[test]
fn test_exhausted_tree_stops_listing_slots() {
    let mut image = Image::new();
    let slots = (0..3)
        .map(|i| node_data(&mut image, Value::usize(i), None, &[]))
        .collect();
    let value = tree(&mut image, "usize", slots, 0);
    let handle = store(&mut image, value);

    let engine = Engine::new(&image).with_config(RenderConfig::default().with_max_visits(1));
    let result = engine.render(&handle);
    let labels: Vec<&str> = result.children().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["len", "root", "..."]);
    assert_eq!(engine.render_child(&result.children()[1]).text(), TRUNCATED);
    assert_eq!(engine.render_child(&result.children()[2]).text(), TRUNCATED);
}
