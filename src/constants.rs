// Constants for the rendering engine

/// Default limit on nested renderings within a single request.
/// Interned values and persistent trees can form long or, in corrupted
/// memory, cyclic chains of indirections.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default limit on the number of values rendered within a single request
pub const DEFAULT_MAX_VISITS: usize = 10_000;

/// Longest string buffer decoded before the length is treated as corrupt
pub const DEFAULT_MAX_STRING_LEN: usize = 64 * 1024;

/// Elements of a sequence (or slots of a tree) shown before eliding the rest
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 200;

/// Placeholder for values whose memory could not be read
pub const UNREADABLE: &str = "<unreadable>";

/// Placeholder for renderings cut off by the depth or visit budget
pub const TRUNCATED: &str = "<truncated>";

/// Text of an absent optional value
pub const NONE: &str = "None";
