//! Typed access to environment variables.
//!
//! This crate reads variables from an environment store and coerces them to
//! strings, integers, booleans and delimited lists. Each accessor applies a
//! [`Strictness`] policy: strict accessors report missing or malformed
//! variables as [`EnvError`]s, lenient ones fall back to the type's zero
//! value. The `_or` variants never fail and return the caller's default.
//!
//! [`load_env_file`] overlays a `.env` file onto the process environment and
//! should run at startup, before accessors are used from several threads.
//!
//! ```no_run
//! use typed_env::{enable_strict_mode, get_int, get_string_or, load_env_file};
//!
//! load_env_file(".env");
//! enable_strict_mode();
//!
//! let port = get_int("PORT")?;
//! let region = get_string_or("REGION", "eu-west-1");
//! # Ok::<(), typed_env::EnvError>(())
//! ```

mod accessor;
pub mod constants;
mod error;
mod loader;
mod mode;
pub mod store;

pub use accessor::{
    Env, get_bool, get_bool_or, get_int, get_int_or, get_slice, get_slice_or, get_string,
    get_string_or,
};
pub use error::{EnvError, LoadError};
pub use loader::{load_env_file, try_load_env_file};
pub use mode::{Strictness, enable_strict_mode, strict_mode_enabled};
#[cfg(any(test, feature = "test-support"))]
pub use store::InMemoryEnv;
pub use store::{ReadEnv, SystemEnv};
