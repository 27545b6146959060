//! In-memory image of an inspected process
//!
//! [`Image`] stands in for the memory of a paused or core-dumped process. It
//! stores typed [`Value`]s in cells at virtual addresses and implements
//! [`ValueAccessor`] over them, so the rendering engine can be driven without
//! a live debugger.
//!
//! - [`value`]: the value representation stored in each cell
//! - [`layouts`]: builders for standard-library layouts (`String`, `Vec`, ...)
//! - [`domain`]: builders for the proof-assistant types the printers target
//!
//! # Failure modes
//!
//! Freed cells are kept as tombstones. Reading one fails with
//! [`AccessError::Freed`], an address that was never allocated fails with
//! [`AccessError::Unmapped`], and a reserved but unwritten cell
//! fails with [`AccessError::Uninitialized`]. Handles are re-resolved on every
//! read, so a handle taken before a cell was freed observes the free.

pub mod domain;
pub mod layouts;
pub mod value;

use crate::accessor::{AccessError, Address, Scalar, ValueAccessor};
use crate::registry::TypeTag;
use crate::render::decode::format_scalar;
use rustc_hash::FxHashMap;
use value::Value;

/// First address handed out by an image
pub const IMAGE_BASE: Address = 0x1000_0000;

/// Distance between consecutive elements of an array
pub const SLOT_SIZE: Address = 8;

/// Well-aligned, never-mapped address used as the buffer of empty vectors
pub const DANGLING: Address = SLOT_SIZE;

/// State of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Live,
    Tombstone, // Freed but kept so stale pointers can be diagnosed
}

#[derive(Debug, Clone)]
struct Cell {
    value: Value,
    state: CellState,
}

/// Reference to a value: a cell address plus a path of field names into it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    address: Address,
    path: Vec<String>,
}

impl ImageHandle {
    /// Handle to the whole value stored at `address`
    pub fn at(address: Address) -> Self {
        ImageHandle {
            address,
            path: Vec::new(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn join(&self, name: &str) -> Self {
        let mut path = self.path.clone();
        path.push(name.to_string());
        ImageHandle {
            address: self.address,
            path,
        }
    }
}

/// A value reached by resolving a handle
#[derive(Clone, Copy)]
enum Resolved<'a> {
    Value(&'a Value),
    /// Payload of an enum's active variant
    Arm {
        tag: &'a TypeTag,
        variant: &'a str,
        fields: &'a [(String, Value)],
    },
}

impl Resolved<'_> {
    fn tag(&self) -> TypeTag {
        match self {
            Resolved::Value(value) => value.tag(),
            Resolved::Arm { tag, variant, .. } => TypeTag::new(format!("{}::{}", tag, variant)),
        }
    }
}

fn find_field<'a>(fields: &'a [(String, Value)], name: &str) -> Option<&'a Value> {
    fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
}

/// Memory image with typed cells
#[derive(Debug, Clone)]
pub struct Image {
    cells: FxHashMap<Address, Cell>,
    next_address: Address,
}

impl Image {
    pub fn new() -> Self {
        Image {
            cells: FxHashMap::default(),
            next_address: IMAGE_BASE,
        }
    }

    /// Store a value in a fresh cell
    pub fn allocate(&mut self, value: Value) -> Address {
        let addr = self.next_address;
        self.next_address += SLOT_SIZE;
        self.cells.insert(
            addr,
            Cell {
                value,
                state: CellState::Live,
            },
        );
        addr
    }

    /// Store values in consecutive cells and return the first address.
    /// An empty array gets the dangling address, which is never mapped.
    pub fn allocate_array(&mut self, values: Vec<Value>) -> Address {
        if values.is_empty() {
            return DANGLING;
        }
        let base = self.next_address;
        for value in values {
            self.allocate(value);
        }
        base
    }

    /// Reserve a cell that reads as uninitialized until [`Image::store`]
    pub fn reserve(&mut self, tag: impl Into<TypeTag>) -> Address {
        self.allocate(Value::uninitialized(tag))
    }

    /// Overwrite the value in a live cell
    pub fn store(&mut self, address: Address, value: Value) -> Result<(), AccessError> {
        match self.cells.get_mut(&address) {
            Some(cell) if cell.state == CellState::Live => {
                cell.value = value;
                Ok(())
            }
            Some(_) => Err(AccessError::Freed { address }),
            None => Err(AccessError::Unmapped { address }),
        }
    }

    /// Free a cell (mark as tombstone)
    pub fn free(&mut self, address: Address) -> Result<(), AccessError> {
        match self.cells.get_mut(&address) {
            Some(cell) if cell.state == CellState::Live => {
                cell.state = CellState::Tombstone;
                Ok(())
            }
            Some(_) => Err(AccessError::Freed { address }),
            None => Err(AccessError::Unmapped { address }),
        }
    }

    /// State of the cell at `address`, if one was ever allocated there
    pub fn cell_state(&self, address: Address) -> Option<CellState> {
        self.cells.get(&address).map(|cell| cell.state)
    }

    /// Number of live cells
    pub fn live_cells(&self) -> usize {
        self.cells
            .values()
            .filter(|cell| cell.state == CellState::Live)
            .count()
    }

    fn cell(&self, address: Address) -> Result<&Cell, AccessError> {
        match self.cells.get(&address) {
            Some(cell) if cell.state == CellState::Live => Ok(cell),
            Some(_) => Err(AccessError::Freed { address }),
            None => Err(AccessError::Unmapped { address }),
        }
    }

    fn resolve(&self, handle: &ImageHandle) -> Result<Resolved<'_>, AccessError> {
        let mut current = Resolved::Value(&self.cell(handle.address)?.value);
        for name in &handle.path {
            current = Self::step(current, name, handle.address)?;
        }
        Ok(current)
    }

    fn step<'a>(
        current: Resolved<'a>,
        name: &str,
        address: Address,
    ) -> Result<Resolved<'a>, AccessError> {
        let missing = |current: &Resolved<'_>| AccessError::NoSuchField {
            ty: current.tag().to_string(),
            field: name.to_string(),
        };
        match current {
            Resolved::Value(Value::Struct { fields, .. }) => find_field(fields, name)
                .map(Resolved::Value)
                .ok_or_else(|| missing(&current)),
            Resolved::Value(Value::Enum {
                tag,
                variant,
                fields,
            }) if variant == name => Ok(Resolved::Arm {
                tag,
                variant,
                fields,
            }),
            Resolved::Value(Value::Uninitialized { .. }) => {
                Err(AccessError::Uninitialized { address })
            }
            Resolved::Arm { fields, .. } => find_field(fields, name)
                .map(Resolved::Value)
                .ok_or_else(|| missing(&current)),
            _ => Err(missing(&current)),
        }
    }

    /// Address held by a pointer value
    fn pointer_target(&self, pointer: &ImageHandle) -> Result<Address, AccessError> {
        match self.resolve(pointer)? {
            Resolved::Value(Value::Pointer { address: 0, .. }) => Err(AccessError::NullPointer),
            Resolved::Value(Value::Pointer { address, .. }) => Ok(*address),
            Resolved::Value(Value::Uninitialized { .. }) => Err(AccessError::Uninitialized {
                address: pointer.address,
            }),
            other => Err(AccessError::NotAPointer {
                ty: other.tag().to_string(),
            }),
        }
    }

    fn format_shallow(value: &Value) -> String {
        match value {
            Value::Scalar { scalar, .. } => format_scalar(*scalar),
            Value::Pointer { address, .. } => format_scalar(Scalar::Pointer(*address)),
            Value::Struct { tag, .. } => format!("{} {{..}}", tag),
            Value::Enum { tag, variant, .. } => format!("{}::{}", tag.base_path(), variant),
            Value::Uninitialized { .. } => "<uninit>".to_string(),
        }
    }

    fn format_fields(name: &str, fields: &[(String, Value)]) -> String {
        if fields.is_empty() {
            return name.to_string();
        }
        let positional = fields.iter().all(|(n, _)| n.starts_with("__"));
        let parts: Vec<String> = fields
            .iter()
            .map(|(n, v)| {
                if positional {
                    Self::format_shallow(v)
                } else {
                    format!("{}: {}", n, Self::format_shallow(v))
                }
            })
            .collect();
        if positional {
            format!("{}({})", name, parts.join(", "))
        } else {
            format!("{} {{ {} }}", name, parts.join(", "))
        }
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueAccessor for Image {
    type Handle = ImageHandle;

    fn type_tag(&self, value: &ImageHandle) -> Result<TypeTag, AccessError> {
        Ok(self.resolve(value)?.tag())
    }

    fn field(&self, value: &ImageHandle, name: &str) -> Result<ImageHandle, AccessError> {
        let resolved = self.resolve(value)?;
        Self::step(resolved, name, value.address)?;
        Ok(value.join(name))
    }

    fn deref(&self, pointer: &ImageHandle) -> Result<ImageHandle, AccessError> {
        let target = self.pointer_target(pointer)?;
        self.cell(target)?;
        Ok(ImageHandle::at(target))
    }

    fn index(&self, pointer: &ImageHandle, index: usize) -> Result<ImageHandle, AccessError> {
        let base = self.pointer_target(pointer)?;
        let target = (index as Address)
            .checked_mul(SLOT_SIZE)
            .and_then(|offset| base.checked_add(offset))
            .ok_or(AccessError::Unmapped { address: base })?;
        self.cell(target)?;
        Ok(ImageHandle::at(target))
    }

    fn scalar(&self, value: &ImageHandle) -> Result<Scalar, AccessError> {
        match self.resolve(value)? {
            Resolved::Value(Value::Scalar { scalar, .. }) => Ok(*scalar),
            Resolved::Value(Value::Pointer { address, .. }) => Ok(Scalar::Pointer(*address)),
            Resolved::Value(Value::Uninitialized { .. }) => Err(AccessError::Uninitialized {
                address: value.address,
            }),
            other => Err(AccessError::NotAScalar {
                ty: other.tag().to_string(),
            }),
        }
    }

    fn variant_name(&self, value: &ImageHandle) -> Result<String, AccessError> {
        match self.resolve(value)? {
            Resolved::Value(Value::Enum { tag, variant, .. }) => {
                Ok(format!("{}::{}", tag.base_path(), variant))
            }
            Resolved::Value(Value::Uninitialized { .. }) => Err(AccessError::Uninitialized {
                address: value.address,
            }),
            other => Err(AccessError::NotAnEnum {
                ty: other.tag().to_string(),
            }),
        }
    }

    fn is_null(&self, pointer: &ImageHandle) -> Result<bool, AccessError> {
        match self.pointer_target(pointer) {
            Ok(_) => Ok(false),
            Err(AccessError::NullPointer) => Ok(true),
            Err(err) => Err(err),
        }
    }

    fn raw_text(&self, value: &ImageHandle) -> Result<String, AccessError> {
        match self.resolve(value)? {
            Resolved::Value(Value::Struct { tag, fields }) => {
                Ok(Self::format_fields(tag.as_str(), fields))
            }
            Resolved::Value(Value::Enum {
                tag,
                variant,
                fields,
            }) => Ok(Self::format_fields(
                &format!("{}::{}", tag.base_path(), variant),
                fields,
            )),
            Resolved::Value(Value::Uninitialized { .. }) => Err(AccessError::Uninitialized {
                address: value.address,
            }),
            Resolved::Value(other) => Ok(Self::format_shallow(other)),
            Resolved::Arm {
                tag,
                variant,
                fields,
            } => Ok(Self::format_fields(
                &format!("{}::{}", tag.base_path(), variant),
                fields,
            )),
        }
    }
}
