//! Scalar formatting and string decoding helpers

use crate::accessor::Scalar;

/// Format a primitive value
pub fn format_scalar(scalar: Scalar) -> String {
    match scalar {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Char(c) => {
            if c.is_ascii_graphic() || c == ' ' {
                format!("'{}'", c)
            } else {
                format!("'{}'", c.escape_default())
            }
        }
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Pointer(addr) => {
            if addr == 0 {
                "NULL".to_string()
            } else {
                format!("0x{:08x}", addr)
            }
        }
    }
}

/// Decode a buffer of single-byte character codes
pub fn decode_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Wrap decoded text in double quotes
pub fn quote(text: &str) -> String {
    let mut s = String::with_capacity(text.len() + 2);
    s.push('"');
    s.push_str(text);
    s.push('"');
    s
}

/// Last `::` segment of a qualified path
pub fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Short display form of a qualified variant name: the namespace is dropped and
/// the sign variants become single characters
pub fn orientation_symbol(variant: &str) -> &str {
    match last_segment(variant) {
        "Positive" => "+",
        "Negative" => "-",
        "Zero" => "0",
        other => other,
    }
}

/// Whether rendered text is a diagnostic placeholder rather than data
pub fn is_placeholder(text: &str) -> bool {
    text.starts_with('<') && text.ends_with('>')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(Scalar::Unsigned(42)), "42");
        assert_eq!(format_scalar(Scalar::Signed(-3)), "-3");
        assert_eq!(format_scalar(Scalar::Bool(true)), "true");
        assert_eq!(format_scalar(Scalar::Char('x')), "'x'");
        assert_eq!(format_scalar(Scalar::Char('\n')), "'\\n'");
        assert_eq!(format_scalar(Scalar::Pointer(0)), "NULL");
        assert_eq!(format_scalar(Scalar::Pointer(0x1000_0000)), "0x10000000");
    }

    #[test]
    fn test_decode_bytes() {
        assert_eq!(decode_bytes(b"hello"), "hello");
        assert_eq!(decode_bytes(&[]), "");
        assert_eq!(decode_bytes(&[0xe9]), "\u{e9}");
    }

    #[test]
    fn test_orientation_symbol() {
        assert_eq!(orientation_symbol("homotopy_core::common::Orientation::Positive"), "+");
        assert_eq!(orientation_symbol("homotopy_core::common::Orientation::Negative"), "-");
        assert_eq!(orientation_symbol("homotopy_core::common::Orientation::Zero"), "0");
        assert_eq!(orientation_symbol("homotopy_core::common::Orientation::Sideways"), "Sideways");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder("<unreadable>"));
        assert!(!is_placeholder("\"<unreadable>\""));
        assert!(!is_placeholder("[1,2]"));
    }
}
