//! Render error types
//!
//! A [`RenderError`] never reaches the host. The engine turns each one into a
//! short placeholder in angle brackets at the point where the failing value
//! would have been printed, so siblings and parents still render.

use crate::accessor::{AccessError, Scalar};
use crate::constants::UNREADABLE;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Memory behind the value could not be read
    #[error("unreadable memory: {0}")]
    Unreadable(AccessError),

    /// The value does not have the layout its type promises
    #[error("malformed value: {0}")]
    Malformed(AccessError),

    /// An enum discriminant the printer does not know
    #[error("unknown variant '{variant}' of {ty}")]
    UnknownVariant { ty: &'static str, variant: String },

    /// A length field too large to be genuine
    #[error("implausible length {len}")]
    BadLength { len: usize },

    /// A scalar of the wrong kind where a length, flag or byte was expected
    #[error("expected {expected}, found {found:?}")]
    UnexpectedScalar { expected: &'static str, found: Scalar },
}

impl RenderError {
    /// Placeholder text shown in place of the value
    pub fn placeholder(&self) -> String {
        match self {
            RenderError::Unreadable(_) => UNREADABLE.to_string(),
            RenderError::Malformed(err) => format!("<malformed: {}>", err),
            RenderError::UnknownVariant { variant, .. } => {
                format!("<unknown variant {}>", variant)
            }
            RenderError::BadLength { len } => format!("<bad length {}>", len),
            RenderError::UnexpectedScalar { .. } => format!("<malformed: {}>", self),
        }
    }
}

impl From<AccessError> for RenderError {
    fn from(err: AccessError) -> Self {
        if err.is_unreadable() {
            RenderError::Unreadable(err)
        } else {
            RenderError::Malformed(err)
        }
    }
}
