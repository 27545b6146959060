//! Type tags and the patterns that match them

use std::fmt;

/// Identifier of a value's concrete runtime type, e.g. `alloc::vec::Vec<u8>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn new(name: impl Into<String>) -> Self {
        TypeTag(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path without its generic parameter list
    pub fn base_path(&self) -> &str {
        match self.0.find('<') {
            Some(pos) => &self.0[..pos],
            None => &self.0,
        }
    }

    /// A tag for a type parameterized by `params`
    pub fn generic(base: &str, params: &[&TypeTag]) -> Self {
        let params: Vec<&str> = params.iter().map(|p| p.as_str()).collect();
        TypeTag(format!("{}<{}>", base, params.join(", ")))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        TypeTag::new(name)
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        TypeTag(name)
    }
}

/// A pattern a [`TypeTag`] is tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The whole tag must equal the string
    Exact(&'static str),
    /// `path<...>` with any parameter list
    Generic(&'static str),
}

impl Pattern {
    pub fn matches(&self, tag: &TypeTag) -> bool {
        let name = tag.as_str();
        match self {
            Pattern::Exact(exact) => name == *exact,
            Pattern::Generic(path) => name
                .strip_prefix(path)
                .and_then(|rest| rest.strip_prefix('<'))
                .is_some_and(|rest| rest.ends_with('>')),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(exact) => write!(f, "^{}$", exact),
            Pattern::Generic(path) => write!(f, "^{}<.*>$", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pattern() {
        let pattern = Pattern::Exact("alloc::string::String");
        assert!(pattern.matches(&"alloc::string::String".into()));
        assert!(!pattern.matches(&"alloc::string::StringBuilder".into()));
        assert!(!pattern.matches(&"my::alloc::string::String".into()));
    }

    #[test]
    fn test_generic_pattern() {
        let pattern = Pattern::Generic("alloc::vec::Vec");
        assert!(pattern.matches(&"alloc::vec::Vec<u8>".into()));
        assert!(pattern.matches(&"alloc::vec::Vec<alloc::vec::Vec<u8>>".into()));
        assert!(pattern.matches(&"alloc::vec::Vec<(usize, u8), alloc::alloc::Global>".into()));
        assert!(!pattern.matches(&"alloc::vec::Vec".into()));
        assert!(!pattern.matches(&"alloc::vec::VecDeque<u8>".into()));
        assert!(!pattern.matches(&"alloc::vec::Vec<u8>::Iter".into()));
    }

    #[test]
    fn test_base_path() {
        let tag = TypeTag::from("core::option::Option<alloc::vec::Vec<u8>>");
        assert_eq!(tag.base_path(), "core::option::Option");
        assert_eq!(TypeTag::from("u8").base_path(), "u8");
    }

    #[test]
    fn test_generic_tag() {
        let elem = TypeTag::from("u8");
        let tag = TypeTag::generic("alloc::vec::Vec", &[&elem]);
        assert_eq!(tag.as_str(), "alloc::vec::Vec<u8>");
    }

    #[test]
    fn test_pattern_display() {
        assert_eq!(Pattern::Generic("alloc::vec::Vec").to_string(), "^alloc::vec::Vec<.*>$");
        assert_eq!(Pattern::Exact("u8").to_string(), "^u8$");
    }
}
