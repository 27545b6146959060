//! # Introduction
//!
//! valscope is the value-introspection layer of a debugger console. Given an
//! opaque handle to a value in an inspected process, it picks a printer for
//! the value's runtime type and produces a one-line text plus, for composite
//! values, an ordered list of named children the console expands on demand.
//!
//! ## Rendering pipeline
//!
//! ```text
//! Handle → Type tag → Registry → Printer → RenderResult → Console
//! ```
//!
//! 1. [`accessor`]: the [`accessor::ValueAccessor`] trait, the only way the
//!    printers read memory, and the [`accessor::AccessError`] failures it reports.
//! 2. [`registry`]: the ordered pattern table mapping type tags to a
//!    [`registry::RendererKind`]; first match wins, unknown types fall through.
//! 3. [`render`]: the engine, one printer per kind, and per-request depth and
//!    visit budgets. Failures become `<...>` placeholders in place.
//! 4. [`layout`]: type names and field paths of the inspected program.
//! 5. [`image`]: an in-memory process image implementing the accessor, used by
//!    the tests and the demo.
//! 6. [`sample`]: the demo session shown by the `valscope` binary.
//! 7. [`ui`]: ratatui-based inspector; not part of the stable library API.
//!
//! ## Supported shapes
//!
//! Standard library: `String`, `Option<T>`, `Vec<T>`, `Rc<T>`, primitives.
//! Proof assistant: generators, signature items, diagrams, rewrites, cones,
//! cospans, labels, heights, slice indices, boundaries, `HConsed<T>` and
//! arena-backed trees.

pub mod accessor;
pub mod constants;
pub mod image;
pub mod layout;
pub mod registry;
pub mod render;
pub mod sample;
pub mod ui;
