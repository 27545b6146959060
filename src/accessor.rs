//! Narrow interface to the inspected process
//!
//! The rendering core never touches memory directly. Everything it knows about a
//! value comes through a [`ValueAccessor`]: the value's runtime type, its named
//! fields, pointer indirections, indexed elements behind a raw pointer, scalar
//! contents, and the active variant of an enum.
//!
//! Reads can fail. [`AccessError`] separates failures of the memory itself
//! (unmapped, freed, uninitialized, null) from shape mismatches (no such field,
//! not a pointer). Printers rely on that split to report unreadable memory
//! differently from a value whose layout was not what they expected.

use crate::registry::TypeTag;
use std::fmt;
use thiserror::Error;

/// Memory address in the inspected process
pub type Address = u64;

/// A primitive value read out of the inspected process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Bool(bool),
    Char(char),
    Unsigned(u64),
    Signed(i64),
    Pointer(Address),
}

impl Scalar {
    /// Interpret the scalar as a length or index
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Scalar::Unsigned(n) => usize::try_from(*n).ok(),
            Scalar::Signed(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Interpret the scalar as a flag (non-zero integers count as true)
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            Scalar::Unsigned(n) => Some(*n != 0),
            Scalar::Signed(n) => Some(*n != 0),
            _ => None,
        }
    }

    /// Interpret the scalar as a byte, used when decoding string buffers
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Scalar::Unsigned(n) => u8::try_from(*n).ok(),
            Scalar::Signed(n) => u8::try_from(*n).ok(),
            Scalar::Char(c) => u8::try_from(u32::from(*c)).ok(),
            _ => None,
        }
    }
}

/// Errors reported by a [`ValueAccessor`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("address 0x{address:x} is not mapped")]
    Unmapped { address: Address },

    #[error("address 0x{address:x} has been freed")]
    Freed { address: Address },

    #[error("read of uninitialized memory at 0x{address:x}")]
    Uninitialized { address: Address },

    #[error("null pointer")]
    NullPointer,

    #[error("value of type {ty} has no field '{field}'")]
    NoSuchField { ty: String, field: String },

    #[error("value of type {ty} is not a pointer")]
    NotAPointer { ty: String },

    #[error("value of type {ty} is not a scalar")]
    NotAScalar { ty: String },

    #[error("value of type {ty} is not an enum")]
    NotAnEnum { ty: String },
}

impl AccessError {
    /// True when the memory itself could not be read, as opposed to the value
    /// having an unexpected shape
    pub fn is_unreadable(&self) -> bool {
        matches!(
            self,
            AccessError::Unmapped { .. }
                | AccessError::Freed { .. }
                | AccessError::Uninitialized { .. }
                | AccessError::NullPointer
        )
    }
}

/// Capability to read values out of the inspected process.
///
/// Handles are cheap, session-scoped references. They are produced by the host
/// or by the accessor itself and are never owned by the rendering core beyond a
/// single request.
pub trait ValueAccessor {
    type Handle: Clone + fmt::Debug;

    /// Concrete runtime type of a value
    fn type_tag(&self, value: &Self::Handle) -> Result<TypeTag, AccessError>;

    /// Named field of a struct, or the payload of an enum's active variant when
    /// `name` is that variant's name
    fn field(&self, value: &Self::Handle, name: &str) -> Result<Self::Handle, AccessError>;

    /// Follow a pointer to its pointee
    fn deref(&self, pointer: &Self::Handle) -> Result<Self::Handle, AccessError>;

    /// Element `index` of the buffer a raw pointer points at
    fn index(&self, pointer: &Self::Handle, index: usize) -> Result<Self::Handle, AccessError>;

    /// Primitive contents of a value
    fn scalar(&self, value: &Self::Handle) -> Result<Scalar, AccessError>;

    /// Fully qualified name of an enum's active variant
    /// (e.g. `homotopy_core::common::Orientation::Positive`)
    fn variant_name(&self, value: &Self::Handle) -> Result<String, AccessError>;

    /// Whether a pointer value is null
    fn is_null(&self, pointer: &Self::Handle) -> Result<bool, AccessError>;

    /// The accessor's own default textual form of a value, used for types no
    /// printer recognizes
    fn raw_text(&self, value: &Self::Handle) -> Result<String, AccessError>;
}
