// Tests for the pattern table and type matching

use valscope::image::layouts::string;
use valscope::image::{Image, ImageHandle};
use valscope::layout::tags;
use valscope::registry::{pretty_printers, Pattern, PatternRule, Registry, RendererKind, TypeTag};
use valscope::render::Engine;

fn kind_of(tag: &str) -> RendererKind {
    Registry::builtin().lookup(&TypeTag::from(tag))
}

#[test]
fn test_exact_tags() {
    let cases = [
        (tags::STRING, RendererKind::String),
        (tags::SIGNATURE_ITEM, RendererKind::SignatureItem),
        (tags::ORIENTATION, RendererKind::Orientation),
        (tags::GENERATOR_INFO, RendererKind::GeneratorInfo),
        (tags::GENERATOR, RendererKind::Generator),
        (tags::COSPAN, RendererKind::Cospan),
        (tags::REWRITE, RendererKind::Rewrite),
        (tags::REWRITE0, RendererKind::Rewrite0),
        (tags::REWRITE_INTERNAL, RendererKind::RewriteInternal),
        (tags::CONE, RendererKind::Cone),
        (tags::CONE_INTERNAL, RendererKind::ConeInternal),
        (tags::DIAGRAM, RendererKind::Diagram),
        (tags::DIAGRAM_INTERNAL, RendererKind::DiagramInternal),
        (tags::LABEL, RendererKind::Label),
        (tags::SLICE_INDEX, RendererKind::SliceIndex),
        (tags::HEIGHT, RendererKind::Height),
        (tags::BOUNDARY, RendererKind::Boundary),
        (tags::BOUNDARY_PATH, RendererKind::BoundaryPath),
        (tags::NODE, RendererKind::Node),
        ("usize", RendererKind::Scalar),
        ("bool", RendererKind::Scalar),
        ("i64", RendererKind::Scalar),
    ];
    for (tag, expected) in cases {
        assert_eq!(kind_of(tag), expected, "tag {}", tag);
    }
}

#[test]
fn test_generic_tags_match_any_parameters() {
    let cases = [
        (tags::OPTION, RendererKind::Option),
        (tags::VEC, RendererKind::Vec),
        (tags::HCONSED, RendererKind::HConsed),
        (tags::RC, RendererKind::Rc),
        (tags::NODE_DATA, RendererKind::NodeData),
        (tags::TREE, RendererKind::Tree),
    ];
    let params = [
        "u8",
        "alloc::string::String",
        "homotopy_core::rewrite::Cospan",
        "(homotopy_core::common::Generator, homotopy_core::common::Generator)",
        "alloc::vec::Vec<core::option::Option<usize>>",
    ];
    for (base, expected) in cases {
        for param in params {
            let tag = format!("{}<{}>", base, param);
            assert_eq!(kind_of(&tag), expected, "tag {}", tag);
        }
    }
}

#[test]
fn test_generic_patterns_need_parameters() {
    // A bare path is not an instantiation of the generic type
    assert_eq!(kind_of(tags::VEC), RendererKind::Unknown);
    assert_eq!(kind_of(tags::OPTION), RendererKind::Unknown);
    // Nor is a longer path that merely starts the same way
    assert_eq!(kind_of("alloc::vec::VecDeque<u8>"), RendererKind::Unknown);
}

#[test]
fn test_unknown_tags_fall_back() {
    for tag in [
        "",
        "homotopy_core::Mystery",
        "alloc::string::String2",
        "*const u8",
        "std::collections::HashMap<u8, u8>",
    ] {
        assert_eq!(kind_of(tag), RendererKind::Unknown, "tag {:?}", tag);
    }
}

#[test]
fn test_every_registered_rule_matches_itself() {
    let registry = Registry::builtin();
    assert_eq!(registry.rules(), pretty_printers());
    for rule in registry.rules() {
        let tag = match rule.pattern {
            Pattern::Exact(name) => name.to_string(),
            Pattern::Generic(path) => format!("{}<u8>", path),
        };
        assert_eq!(
            registry.lookup(&TypeTag::from(tag.as_str())),
            rule.kind,
            "rule {}",
            rule.name
        );
    }
}

#[test]
fn test_rule_names_are_unique() {
    let rules = pretty_printers();
    for (i, rule) in rules.iter().enumerate() {
        assert!(
            rules[i + 1..].iter().all(|other| other.name != rule.name),
            "duplicate rule {}",
            rule.name
        );
    }
}

static SHADOWED: [PatternRule; 2] = [
    PatternRule {
        name: "OpaqueString",
        pattern: Pattern::Exact(tags::STRING),
        kind: RendererKind::Unknown,
    },
    PatternRule {
        name: "String",
        pattern: Pattern::Exact(tags::STRING),
        kind: RendererKind::String,
    },
];

#[test]
fn test_first_match_wins() {
    let registry = Registry::from_rules(&SHADOWED);
    assert_eq!(
        registry.lookup(&TypeTag::from(tags::STRING)),
        RendererKind::Unknown
    );
}

#[test]
fn test_engine_uses_custom_registry() {
    let mut image = Image::new();
    let value = string(&mut image, "hi");
    let handle = ImageHandle::at(image.allocate(value));

    let engine = Engine::new(&image).with_registry(Registry::from_rules(&SHADOWED));
    assert_eq!(
        engine.render(&handle).text(),
        "alloc::string::String { vec: alloc::vec::Vec<u8> {..} }"
    );
    assert_eq!(Engine::new(&image).render(&handle).text(), "\"hi\"");
}
