//! Strict-mode policy.
//!
//! Responsibilities:
//! - Hold the process-wide strict flag and its one-way enable switch.
//! - Describe the per-accessor policy (`Strictness`) that decides whether a
//!   missing or malformed variable is an error or a zero value.
//!
//! Invariants:
//! - The process flag is never cleared once set; there is no disable API.
//! - `Strictness::FollowProcess` reads the flag on every call, so enabling
//!   strict mode is observed by existing accessors.

use std::sync::atomic::{AtomicBool, Ordering};

static STRICT_MODE: AtomicBool = AtomicBool::new(false);

/// Make every accessor that follows the process policy strict.
///
/// Idempotent. Intended to be called once at startup; there is no way to
/// turn strict mode back off for the lifetime of the process.
pub fn enable_strict_mode() {
    STRICT_MODE.store(true, Ordering::Release);
}

/// Whether [`enable_strict_mode`] has been called in this process.
pub fn strict_mode_enabled() -> bool {
    STRICT_MODE.load(Ordering::Acquire)
}

/// Policy applied by an accessor when a variable is missing or malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Use the process-wide flag, resolved at call time.
    #[default]
    FollowProcess,
    /// Missing or malformed variables are errors.
    Strict,
    /// Missing or malformed variables resolve to the type's zero value.
    Lenient,
}

impl Strictness {
    pub fn is_strict(self) -> bool {
        match self {
            Strictness::FollowProcess => strict_mode_enabled(),
            Strictness::Strict => true,
            Strictness::Lenient => false,
        }
    }
}
