//! Recursive rendering engine
//!
//! - [`engine`]: request entry points, budget tracking and error containment
//! - [`printers`]: one printer per [`RendererKind`](crate::registry::RendererKind)
//! - [`decode`]: scalar formatting and string decoding
//! - [`config`]: per-request limits
//! - [`errors`]: failures printers report to the engine
//!
//! # Results
//!
//! A render produces either a one-line [`RenderResult::Leaf`] or a
//! [`RenderResult::Composite`] carrying its own text plus ordered, named
//! children. Children hold handles, not text: the host renders a child only
//! when the user expands it.

pub mod config;
pub mod decode;
pub mod engine;
pub mod errors;
pub mod printers;

pub use config::RenderConfig;
pub use engine::Engine;
pub use errors::RenderError;

/// Value of a named child
#[derive(Debug, Clone, PartialEq)]
pub enum ChildValue<H> {
    /// A value to render when the child is expanded
    Value(H),
    /// A pseudo-child whose text is already known
    Text(String),
}

/// Named child of a composite rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Child<H> {
    pub label: String,
    pub value: ChildValue<H>,
}

impl<H> Child<H> {
    pub fn value(label: impl Into<String>, handle: H) -> Self {
        Child {
            label: label.into(),
            value: ChildValue::Value(handle),
        }
    }

    pub fn text(label: impl Into<String>, text: impl Into<String>) -> Self {
        Child {
            label: label.into(),
            value: ChildValue::Text(text.into()),
        }
    }
}

/// Outcome of rendering one value
#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult<H> {
    Leaf(String),
    Composite { text: String, children: Vec<Child<H>> },
}

impl<H> RenderResult<H> {
    pub fn text(&self) -> &str {
        match self {
            RenderResult::Leaf(text) => text,
            RenderResult::Composite { text, .. } => text,
        }
    }

    /// Children in display order (empty for a leaf)
    pub fn children(&self) -> &[Child<H>] {
        match self {
            RenderResult::Leaf(_) => &[],
            RenderResult::Composite { children, .. } => children,
        }
    }

    pub fn is_expandable(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn into_text(self) -> String {
        match self {
            RenderResult::Leaf(text) => text,
            RenderResult::Composite { text, .. } => text,
        }
    }
}
