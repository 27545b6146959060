//! Printer registry and type matcher
//!
//! The registry is a fixed, ordered table of [`PatternRule`]s. A type tag is
//! matched against each rule in turn and the first accepting rule decides the
//! [`RendererKind`]. Tags no rule accepts map to [`RendererKind::Unknown`], so
//! lookup never fails.
//!
//! The table is a `static` slice: it exists for the whole process and has no
//! mutation API. A host installs it once through [`pretty_printers`] before any
//! rendering request.

pub mod pattern;

pub use pattern::{Pattern, TypeTag};

use crate::layout::tags;

/// Closed set of value shapes the engine knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererKind {
    String,
    Option,
    Vec,
    SignatureItem,
    Orientation,
    GeneratorInfo,
    Generator,
    Cospan,
    Rewrite,
    Rewrite0,
    RewriteInternal,
    Cone,
    ConeInternal,
    Diagram,
    DiagramInternal,
    Label,
    SliceIndex,
    Height,
    Boundary,
    BoundaryPath,
    HConsed,
    Rc,
    Node,
    NodeData,
    Tree,
    Scalar,
    Unknown,
}

/// A pattern paired with the renderer it selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub name: &'static str,
    pub pattern: Pattern,
    pub kind: RendererKind,
}

const fn exact(name: &'static str, tag: &'static str, kind: RendererKind) -> PatternRule {
    PatternRule {
        name,
        pattern: Pattern::Exact(tag),
        kind,
    }
}

const fn generic(name: &'static str, path: &'static str, kind: RendererKind) -> PatternRule {
    PatternRule {
        name,
        pattern: Pattern::Generic(path),
        kind,
    }
}

static BUILTIN_RULES: &[PatternRule] = &[
    exact("String", tags::STRING, RendererKind::String),
    generic("Option", tags::OPTION, RendererKind::Option),
    generic("Vec", tags::VEC, RendererKind::Vec),
    exact("SignatureItem", tags::SIGNATURE_ITEM, RendererKind::SignatureItem),
    exact("Orientation", tags::ORIENTATION, RendererKind::Orientation),
    exact("GeneratorInfo", tags::GENERATOR_INFO, RendererKind::GeneratorInfo),
    exact("Generator", tags::GENERATOR, RendererKind::Generator),
    exact("Cospan", tags::COSPAN, RendererKind::Cospan),
    exact("Rewrite", tags::REWRITE, RendererKind::Rewrite),
    exact("Rewrite0", tags::REWRITE0, RendererKind::Rewrite0),
    exact("RewriteInternal", tags::REWRITE_INTERNAL, RendererKind::RewriteInternal),
    exact("Cone", tags::CONE, RendererKind::Cone),
    exact("ConeInternal", tags::CONE_INTERNAL, RendererKind::ConeInternal),
    exact("Diagram", tags::DIAGRAM, RendererKind::Diagram),
    exact("DiagramInternal", tags::DIAGRAM_INTERNAL, RendererKind::DiagramInternal),
    exact("Label", tags::LABEL, RendererKind::Label),
    exact("SliceIndex", tags::SLICE_INDEX, RendererKind::SliceIndex),
    exact("Height", tags::HEIGHT, RendererKind::Height),
    exact("Boundary", tags::BOUNDARY, RendererKind::Boundary),
    exact("BoundaryPath", tags::BOUNDARY_PATH, RendererKind::BoundaryPath),
    generic("HConsed", tags::HCONSED, RendererKind::HConsed),
    generic("Rc", tags::RC, RendererKind::Rc),
    exact("Node", tags::NODE, RendererKind::Node),
    generic("NodeData", tags::NODE_DATA, RendererKind::NodeData),
    generic("Tree", tags::TREE, RendererKind::Tree),
    // Primitive leaves
    exact("bool", "bool", RendererKind::Scalar),
    exact("char", "char", RendererKind::Scalar),
    exact("u8", "u8", RendererKind::Scalar),
    exact("u16", "u16", RendererKind::Scalar),
    exact("u32", "u32", RendererKind::Scalar),
    exact("u64", "u64", RendererKind::Scalar),
    exact("usize", "usize", RendererKind::Scalar),
    exact("i8", "i8", RendererKind::Scalar),
    exact("i16", "i16", RendererKind::Scalar),
    exact("i32", "i32", RendererKind::Scalar),
    exact("i64", "i64", RendererKind::Scalar),
    exact("isize", "isize", RendererKind::Scalar),
];

/// The complete, ordered rule table for this domain
pub fn pretty_printers() -> &'static [PatternRule] {
    BUILTIN_RULES
}

/// Ordered rule table with first-match lookup
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    rules: &'static [PatternRule],
}

impl Registry {
    /// Registry over the builtin rule table
    pub fn builtin() -> Self {
        Registry {
            rules: BUILTIN_RULES,
        }
    }

    /// Registry over a caller-provided table, consulted in order
    pub fn from_rules(rules: &'static [PatternRule]) -> Self {
        Registry { rules }
    }

    pub fn rules(&self) -> &'static [PatternRule] {
        self.rules
    }

    /// Select the renderer for a tag. Falls back to [`RendererKind::Unknown`].
    pub fn lookup(&self, tag: &TypeTag) -> RendererKind {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(tag))
            .map(|rule| rule.kind)
            .unwrap_or(RendererKind::Unknown)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
