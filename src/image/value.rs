//! Values stored in a memory image
//!
//! A [`Value`] mirrors how a debugger sees a Rust value: structs and tuples
//! with ordered named fields (`__0`, `__1`, ... for tuple positions), enums
//! with one active variant whose payload fields are reachable through the
//! variant's name, raw pointers, and primitive scalars.
//!
//! # Initialization Tracking
//!
//! The `Uninitialized` variant marks memory that was reserved but never
//! written. Any read of it fails, the way reading a partially constructed
//! object in a paused process would.

use crate::accessor::{Address, Scalar};
use crate::registry::TypeTag;

/// A value as laid out in the image
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar {
        tag: TypeTag,
        scalar: Scalar,
    },
    Pointer {
        pointee: TypeTag,
        address: Address,
    },
    Struct {
        tag: TypeTag,
        fields: Vec<(String, Value)>,
    },
    Enum {
        tag: TypeTag,
        variant: String,
        fields: Vec<(String, Value)>,
    },
    Uninitialized {
        tag: TypeTag,
    },
}

impl Value {
    pub fn bool(b: bool) -> Self {
        Value::Scalar {
            tag: "bool".into(),
            scalar: Scalar::Bool(b),
        }
    }

    pub fn u8(n: u8) -> Self {
        Value::Scalar {
            tag: "u8".into(),
            scalar: Scalar::Unsigned(u64::from(n)),
        }
    }

    pub fn usize(n: usize) -> Self {
        Value::Scalar {
            tag: "usize".into(),
            scalar: Scalar::Unsigned(n as u64),
        }
    }

    pub fn isize(n: isize) -> Self {
        Value::Scalar {
            tag: "isize".into(),
            scalar: Scalar::Signed(n as i64),
        }
    }

    pub fn pointer(pointee: impl Into<TypeTag>, address: Address) -> Self {
        Value::Pointer {
            pointee: pointee.into(),
            address,
        }
    }

    /// Struct with named fields, in declaration order
    pub fn record(tag: impl Into<TypeTag>, fields: Vec<(&str, Value)>) -> Self {
        Value::Struct {
            tag: tag.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// Tuple or tuple struct: fields are named `__0`, `__1`, ...
    pub fn tuple(tag: impl Into<TypeTag>, elements: Vec<Value>) -> Self {
        Value::Struct {
            tag: tag.into(),
            fields: positional(elements),
        }
    }

    /// Enum with `variant` active and a positional payload
    pub fn variant(tag: impl Into<TypeTag>, variant: &str, payload: Vec<Value>) -> Self {
        Value::Enum {
            tag: tag.into(),
            variant: variant.to_string(),
            fields: positional(payload),
        }
    }

    pub fn uninitialized(tag: impl Into<TypeTag>) -> Self {
        Value::Uninitialized { tag: tag.into() }
    }

    /// Runtime type of the value
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Scalar { tag, .. }
            | Value::Struct { tag, .. }
            | Value::Enum { tag, .. }
            | Value::Uninitialized { tag } => tag.clone(),
            Value::Pointer { pointee, .. } => TypeTag::new(format!("*const {}", pointee)),
        }
    }
}

fn positional(elements: Vec<Value>) -> Vec<(String, Value)> {
    elements
        .into_iter()
        .enumerate()
        .map(|(i, value)| (format!("__{}", i), value))
        .collect()
}
