//! Environment stores the accessors read from.
//!
//! | Store | Backing | `Send + Sync` |
//! |-------|---------|---------------|
//! | [`SystemEnv`] | process environment | Yes |
//! | [`InMemoryEnv`]* | `RwLock<HashMap>` | Yes |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;
