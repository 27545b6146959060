//! Render requests, budgets and error containment
//!
//! [`Engine`] is the host-facing entry point. Each request (a top-level render
//! or the expansion of one child) gets its own [`Printer`], which carries the
//! depth and visit budget for that request on the stack. Printers call back
//! into the [`Printer`] for every nested value they need as text, so the budget
//! applies across the whole chain of indirections.
//!
//! # Error containment
//!
//! Printers return `Result<RenderResult, RenderError>`. The [`Printer`] turns an
//! error into a placeholder right where the value would have appeared, so one
//! bad pointer spoils only its own slot in the output.

use super::config::RenderConfig;
use super::decode::last_segment;
use super::errors::RenderError;
use super::printers;
use super::{Child, ChildValue, RenderResult};
use crate::accessor::ValueAccessor;
use crate::constants::TRUNCATED;
use crate::registry::{Registry, TypeTag};
use tracing::{debug, trace, warn};

/// Renders values read through a [`ValueAccessor`]
pub struct Engine<'a, A: ValueAccessor> {
    accessor: &'a A,
    registry: Registry,
    config: RenderConfig,
}

impl<'a, A: ValueAccessor> Engine<'a, A> {
    /// Engine over the builtin registry with default limits
    pub fn new(accessor: &'a A) -> Self {
        Engine {
            accessor,
            registry: Registry::builtin(),
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a value, resolving its type through the accessor
    pub fn render(&self, value: &A::Handle) -> RenderResult<A::Handle> {
        Printer::new(self).render(value)
    }

    /// Render a value whose type the host already resolved
    pub fn render_as(&self, tag: &TypeTag, value: &A::Handle) -> RenderResult<A::Handle> {
        Printer::new(self).render_as(tag, value)
    }

    /// Expand one child of an earlier composite rendering
    pub fn render_child(&self, child: &Child<A::Handle>) -> RenderResult<A::Handle> {
        match &child.value {
            ChildValue::Value(handle) => self.render(handle),
            ChildValue::Text(text) => RenderResult::Leaf(text.clone()),
        }
    }
}

/// State of a single render request
pub struct Printer<'e, 'a, A: ValueAccessor> {
    engine: &'e Engine<'a, A>,
    depth: usize,
    visits: usize,
}

impl<'e, 'a, A: ValueAccessor> Printer<'e, 'a, A> {
    fn new(engine: &'e Engine<'a, A>) -> Self {
        Printer {
            engine,
            depth: 0,
            visits: 0,
        }
    }

    pub fn accessor(&self) -> &'a A {
        self.engine.accessor
    }

    pub fn config(&self) -> &RenderConfig {
        &self.engine.config
    }

    /// True once the request has spent its visits. Loops over siblings stop
    /// here instead of asking for more truncated renders.
    pub fn exhausted(&self) -> bool {
        self.visits >= self.engine.config.max_visits
    }

    /// Charge one visit, truncated or not. False when the request is out of
    /// depth or visits.
    fn charge(&mut self, tag: Option<&TypeTag>) -> bool {
        let within = self.depth < self.engine.config.max_depth && !self.exhausted();
        self.visits = self.visits.saturating_add(1);
        if !within {
            warn!(
                ?tag,
                depth = self.depth,
                visits = self.visits,
                "render budget exhausted"
            );
        }
        within
    }

    /// Render a nested value, charging it to this request's budget
    pub fn render(&mut self, value: &A::Handle) -> RenderResult<A::Handle> {
        if !self.charge(None) {
            return RenderResult::Leaf(TRUNCATED.to_string());
        }
        match self.accessor().type_tag(value) {
            Ok(tag) => self.dispatch(&tag, value),
            Err(err) => {
                warn!(?value, %err, "cannot resolve type of value");
                RenderResult::Leaf(RenderError::from(err).placeholder())
            }
        }
    }

    pub fn render_as(&mut self, tag: &TypeTag, value: &A::Handle) -> RenderResult<A::Handle> {
        if !self.charge(Some(tag)) {
            return RenderResult::Leaf(TRUNCATED.to_string());
        }
        self.dispatch(tag, value)
    }

    fn dispatch(&mut self, tag: &TypeTag, value: &A::Handle) -> RenderResult<A::Handle> {
        let kind = self.engine.registry.lookup(tag);
        trace!(%tag, ?kind, depth = self.depth, "dispatch");

        self.depth += 1;
        let result = printers::print(kind, self, value);
        self.depth -= 1;

        result.unwrap_or_else(|err| {
            match &err {
                RenderError::Unreadable(_) => warn!(%tag, ?value, %err, "unreadable value"),
                _ => debug!(%tag, ?value, %err, "value rendered as placeholder"),
            }
            RenderResult::Leaf(err.placeholder())
        })
    }

    /// Text of a nested value
    pub fn text(&mut self, value: &A::Handle) -> String {
        self.render(value).into_text()
    }

    /// Text of a named field, or the placeholder for why it could not be read
    pub fn field_text(&mut self, value: &A::Handle, name: &str) -> String {
        match self.field(value, name) {
            Ok(field) => self.text(&field),
            Err(err) => err.placeholder(),
        }
    }

    pub fn field(&self, value: &A::Handle, name: &str) -> Result<A::Handle, RenderError> {
        Ok(self.accessor().field(value, name)?)
    }

    /// Follow a chain of field names
    pub fn path(&self, value: &A::Handle, names: &[&str]) -> Result<A::Handle, RenderError> {
        let mut current = value.clone();
        for name in names {
            current = self.accessor().field(&current, name)?;
        }
        Ok(current)
    }

    pub fn usize_field(&self, value: &A::Handle, name: &str) -> Result<usize, RenderError> {
        let scalar = self.accessor().scalar(&self.field(value, name)?)?;
        scalar.as_usize().ok_or(RenderError::UnexpectedScalar {
            expected: "usize",
            found: scalar,
        })
    }

    pub fn bool_field(&self, value: &A::Handle, name: &str) -> Result<bool, RenderError> {
        let scalar = self.accessor().scalar(&self.field(value, name)?)?;
        scalar.as_bool().ok_or(RenderError::UnexpectedScalar {
            expected: "bool",
            found: scalar,
        })
    }

    /// Short name of an enum's active variant (the discriminant)
    pub fn variant(&self, value: &A::Handle) -> Result<String, RenderError> {
        let qualified = self.accessor().variant_name(value)?;
        Ok(last_segment(&qualified).to_string())
    }

    /// Length and data pointer of a `Vec`
    pub fn elements(&self, vec: &A::Handle) -> Result<(usize, A::Handle), RenderError> {
        let len = self.usize_field(vec, crate::layout::VEC_LEN)?;
        let data = self.path(vec, crate::layout::VEC_DATA)?;
        Ok((len, data))
    }

    /// Child pointing at a named field. A field that cannot be resolved becomes
    /// a text child holding the placeholder, so its siblings still appear.
    pub fn child(&self, label: &str, value: &A::Handle, name: &str) -> Child<A::Handle> {
        match self.accessor().field(value, name) {
            Ok(field) => Child::value(label, field),
            Err(err) => Child::text(label, RenderError::from(err).placeholder()),
        }
    }

    /// Child pointing at an element behind a data pointer
    pub fn element_child(&self, label: String, data: &A::Handle, index: usize) -> Child<A::Handle> {
        match self.accessor().index(data, index) {
            Ok(element) => Child::value(label, element),
            Err(err) => Child::text(label, RenderError::from(err).placeholder()),
        }
    }

    /// Text of the element behind a data pointer
    pub fn element_text(&mut self, data: &A::Handle, index: usize) -> String {
        match self.accessor().index(data, index) {
            Ok(element) => self.text(&element),
            Err(err) => RenderError::from(err).placeholder(),
        }
    }
}
