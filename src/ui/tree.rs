//! Expandable tree of rendered values
//!
//! The tree is kept flattened: one [`Row`] per visible line, in display order,
//! with a depth for indentation. Expanding a row renders its children through
//! [`Engine::render_child`] and splices them in right below it; collapsing
//! removes every deeper row that follows. Nothing below a collapsed row is
//! rendered, so a large structure costs only what the user actually opens.

use crate::accessor::ValueAccessor;
use crate::render::{Child, Engine, RenderResult};
use tracing::debug;

/// One visible line of the tree
#[derive(Debug, Clone)]
pub struct Row<H> {
    pub depth: usize,
    pub label: String,
    pub rendered: RenderResult<H>,
    pub expanded: bool,
}

impl<H> Row<H> {
    pub fn is_expandable(&self) -> bool {
        self.rendered.is_expandable()
    }
}

/// Flattened view over a set of named roots
#[derive(Debug, Clone)]
pub struct ValueTree<H> {
    rows: Vec<Row<H>>,
}

impl<H: Clone> ValueTree<H> {
    /// Render every root, all collapsed
    pub fn new<A>(engine: &Engine<'_, A>, roots: &[(String, H)]) -> Self
    where
        A: ValueAccessor<Handle = H>,
    {
        let rows = roots
            .iter()
            .map(|(label, handle)| Row {
                depth: 0,
                label: label.clone(),
                rendered: engine.render(handle),
                expanded: false,
            })
            .collect();
        ValueTree { rows }
    }

    pub fn rows(&self) -> &[Row<H>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the children of row `index` and show them below it.
    /// Returns false if the row is missing, a leaf, or already open.
    pub fn expand<A>(&mut self, engine: &Engine<'_, A>, index: usize) -> bool
    where
        A: ValueAccessor<Handle = H>,
    {
        let Some(row) = self.rows.get(index) else {
            return false;
        };
        if row.expanded || !row.is_expandable() {
            return false;
        }

        let depth = row.depth + 1;
        let children: Vec<Row<H>> = row
            .rendered
            .children()
            .iter()
            .map(|child: &Child<H>| Row {
                depth,
                label: child.label.clone(),
                rendered: engine.render_child(child),
                expanded: false,
            })
            .collect();
        debug!(label = %row.label, children = children.len(), "expand");

        self.rows[index].expanded = true;
        let at = index + 1;
        self.rows.splice(at..at, children);
        true
    }

    /// Hide everything below row `index`.
    /// Returns false if the row is missing or not open.
    pub fn collapse(&mut self, index: usize) -> bool {
        let Some(row) = self.rows.get(index) else {
            return false;
        };
        if !row.expanded {
            return false;
        }

        let depth = row.depth;
        let end = self.rows[index + 1..]
            .iter()
            .position(|r| r.depth <= depth)
            .map_or(self.rows.len(), |offset| index + 1 + offset);
        self.rows.drain(index + 1..end);
        self.rows[index].expanded = false;
        true
    }

    /// Open every row down to `levels` below the roots
    pub fn expand_levels<A>(&mut self, engine: &Engine<'_, A>, levels: usize)
    where
        A: ValueAccessor<Handle = H>,
    {
        // Children are spliced in right after their parent, so a single
        // forward pass reaches them in the same sweep.
        let mut index = 0;
        while index < self.rows.len() {
            if self.rows[index].depth < levels {
                self.expand(engine, index);
            }
            index += 1;
        }
    }

    /// Index of the row's parent, if it has one
    pub fn parent(&self, index: usize) -> Option<usize> {
        let depth = self.rows.get(index)?.depth;
        if depth == 0 {
            return None;
        }
        self.rows[..index].iter().rposition(|r| r.depth < depth)
    }
}
