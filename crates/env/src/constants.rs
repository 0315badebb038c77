//! Centralized constants for typed environment access.
//!
//! Values shared between the accessors, the file loader and their tests live
//! here to avoid duplicated literals.

// =============================================================================
// Diagnostics
// =============================================================================

/// Tag that starts every diagnostic message emitted by this crate.
pub const LOG_PREFIX: &str = "[env]:";

// =============================================================================
// Coercion
// =============================================================================

/// Separator used by the slice accessors when the caller passes an empty one.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Literals accepted as `true`, compared case-insensitively.
pub const TRUE_LITERALS: &[&str] = &["true", "t", "1"];

/// Literals accepted as `false`, compared case-insensitively.
pub const FALSE_LITERALS: &[&str] = &["false", "f", "0"];
