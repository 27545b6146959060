//! One printer per [`RendererKind`]
//!
//! - [`stdlib`]: strings, options, vectors, reference-counted and hash-consed
//!   pointers, primitive scalars and the raw fallback
//! - [`unions`]: two-armed domain enums, dispatched on their discriminant
//! - [`structural`]: domain structs shown as short tags with named children,
//!   plus the small one-line records
//! - [`tree`]: the arena-backed persistent tree
//!
//! Every printer has the same shape: it takes the request's [`Printer`] and the
//! value, reads what it needs through the accessor, and returns a
//! [`RenderResult`] or the [`RenderError`] that stopped it.

mod stdlib;
mod structural;
mod tree;
mod unions;

use super::engine::Printer;
use super::errors::RenderError;
use super::RenderResult;
use crate::accessor::ValueAccessor;
use crate::registry::RendererKind;

pub(crate) type Printed<H> = Result<RenderResult<H>, RenderError>;

/// Run the printer selected for `kind`
pub(crate) fn print<A: ValueAccessor>(
    kind: RendererKind,
    p: &mut Printer<'_, '_, A>,
    value: &A::Handle,
) -> Printed<A::Handle> {
    match kind {
        RendererKind::String => stdlib::string(p, value),
        RendererKind::Option => stdlib::option(p, value),
        RendererKind::Vec => stdlib::vec(p, value),
        RendererKind::Rc => stdlib::rc(p, value),
        RendererKind::HConsed => stdlib::hconsed(p, value),
        RendererKind::Scalar => stdlib::scalar(p, value),
        RendererKind::Unknown => stdlib::raw(p, value),

        RendererKind::SignatureItem => unions::signature_item(p, value),
        RendererKind::Rewrite => unions::rewrite(p, value),
        RendererKind::Diagram => unions::diagram(p, value),
        RendererKind::SliceIndex => unions::slice_index(p, value),
        RendererKind::Height => unions::height(p, value),

        RendererKind::Orientation => structural::orientation(p, value),
        RendererKind::Boundary => structural::boundary(p, value),
        RendererKind::Generator => structural::generator(p, value),
        RendererKind::GeneratorInfo => structural::generator_info(p, value),
        RendererKind::Label => structural::label(p, value),
        RendererKind::BoundaryPath => structural::boundary_path(p, value),
        RendererKind::Node => structural::passthrough(p, value, crate::layout::TUPLE_0),
        RendererKind::NodeData => structural::passthrough(p, value, "data"),
        RendererKind::Cospan => structural::cospan(p, value),
        RendererKind::Rewrite0 => structural::rewrite0(p, value),
        RendererKind::RewriteInternal => structural::rewrite_internal(p, value),
        RendererKind::Cone => structural::cone(p, value),
        RendererKind::ConeInternal => structural::cone_internal(p, value),
        RendererKind::DiagramInternal => structural::diagram_internal(p, value),

        RendererKind::Tree => tree::tree(p, value),
    }
}
