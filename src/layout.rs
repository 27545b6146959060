//! Type names and field layouts of the inspected program
//!
//! Both the printers (which read these layouts) and the memory image builders
//! (which lay values out for tests and the demo session) take their names from
//! here, so the two sides cannot drift apart.

/// Fully qualified type names as the host reports them
pub mod tags {
    pub const STRING: &str = "alloc::string::String";
    pub const OPTION: &str = "core::option::Option";
    pub const VEC: &str = "alloc::vec::Vec";
    pub const RC: &str = "alloc::rc::Rc";
    pub const HCONSED: &str = "hashconsing::HConsed";

    pub const SIGNATURE_ITEM: &str = "homotopy_model::proof::signature::SignatureItem";
    pub const GENERATOR_INFO: &str = "homotopy_model::proof::generators::GeneratorInfo";
    pub const FOLDER_INFO: &str = "homotopy_model::proof::signature::FolderInfo";

    pub const ORIENTATION: &str = "homotopy_core::common::Orientation";
    pub const GENERATOR: &str = "homotopy_core::common::Generator";
    pub const SLICE_INDEX: &str = "homotopy_core::common::SliceIndex";
    pub const HEIGHT: &str = "homotopy_core::common::Height";
    pub const BOUNDARY: &str = "homotopy_core::common::Boundary";
    pub const BOUNDARY_PATH: &str = "homotopy_core::attach::BoundaryPath";

    pub const COSPAN: &str = "homotopy_core::rewrite::Cospan";
    pub const REWRITE: &str = "homotopy_core::rewrite::Rewrite";
    pub const REWRITE0: &str = "homotopy_core::rewrite::Rewrite0";
    pub const REWRITE_N: &str = "homotopy_core::rewrite::RewriteN";
    pub const REWRITE_INTERNAL: &str = "homotopy_core::rewrite::RewriteInternal";
    pub const CONE: &str = "homotopy_core::rewrite::Cone";
    pub const CONE_INTERNAL: &str = "homotopy_core::rewrite::ConeInternal";
    pub const LABEL: &str = "homotopy_core::rewrite::Label";

    pub const DIAGRAM: &str = "homotopy_core::diagram::Diagram";
    pub const DIAGRAM_N: &str = "homotopy_core::diagram::DiagramN";
    pub const DIAGRAM_INTERNAL: &str = "homotopy_core::diagram::DiagramInternal";

    pub const NODE: &str = "homotopy_common::tree::Node";
    pub const NODE_DATA: &str = "homotopy_common::tree::NodeData";
    pub const TREE: &str = "homotopy_common::tree::Tree";
    pub const IDX_VEC: &str = "homotopy_common::idx::IdxVec";

    pub const NON_NULL: &str = "core::ptr::non_null::NonNull";
    pub const UNIQUE: &str = "core::ptr::unique::Unique";
    pub const RAW_VEC: &str = "alloc::raw_vec::RawVec";
    pub const RC_BOX: &str = "alloc::rc::RcBox";
    pub const ARC: &str = "alloc::sync::Arc";
    pub const ARC_INNER: &str = "alloc::sync::ArcInner";
}

/// `Vec<T>`: `{ buf: RawVec { ptr: Unique { pointer: NonNull { pointer: *const T } } }, len }`
pub const VEC_LEN: &str = "len";
pub const VEC_DATA: &[&str] = &["buf", "ptr", "pointer", "pointer"];

/// `String`: `{ vec: Vec<u8> }`
pub const STRING_VEC: &str = "vec";

/// `Rc<T>`: `{ ptr: NonNull { pointer: *const RcBox { strong, weak, value } } }`
pub const RC_PTR: &[&str] = &["ptr", "pointer"];
pub const RC_VALUE: &str = "value";

/// `HConsed<T>`: `{ elm: Arc { ptr: NonNull { pointer: *const ArcInner { strong, weak, data } } } }`
pub const HCONSED_PTR: &[&str] = &["elm", "ptr", "pointer"];
pub const HCONSED_DATA: &str = "data";

/// `Tree<T>`: `{ nodes: IdxVec { raw: Vec<NodeData<T>> }, root: Node }`
pub const TREE_NODES: &[&str] = &["nodes", "raw"];
pub const TREE_ROOT: &str = "root";

/// Payload of a tuple variant or tuple struct
pub const TUPLE_0: &str = "__0";
pub const TUPLE_1: &str = "__1";
