//! Typed accessors over an environment store.
//!
//! Responsibilities:
//! - Look a variable up and coerce it to a string, integer, boolean or list.
//! - Apply the accessor's [`Strictness`] to missing and malformed values.
//! - Provide `_or` variants that fall back to a caller-supplied default.
//!
//! Does NOT handle:
//! - Loading `.env` files (see `loader.rs`).
//! - Caching. Every call re-reads the store, so external changes are seen on
//!   the next call.
//!
//! Invariants:
//! - A strict accessor reports `MissingVariable` only when the variable is
//!   absent. A variable set to `""` is present.
//! - Lenient accessors and every `_or` variant never return an error.
//! - The `_or` variants run the same lookup and parse as their strict
//!   counterpart and turn every failure into the default, so strict mode is
//!   only observable through the non-default accessors.

mod coerce;
mod process;

use std::str::FromStr;

use crate::constants::LOG_PREFIX;
use crate::error::EnvError;
use crate::mode::Strictness;
use crate::store::{ReadEnv, SystemEnv};

pub use process::{
    get_bool, get_bool_or, get_int, get_int_or, get_slice, get_slice_or, get_string,
    get_string_or,
};

/// Typed accessor bound to an environment store and a strictness policy.
///
/// ```
/// use typed_env::{Env, SystemEnv};
///
/// let env = Env::lenient(SystemEnv);
/// assert_eq!(env.get_int("TYPED_ENV_DOC_UNSET_PORT").unwrap(), 0);
/// assert_eq!(env.get_int_or("TYPED_ENV_DOC_UNSET_PORT", 8080), 8080);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<S = SystemEnv> {
    store: S,
    strictness: Strictness,
}

impl Env<SystemEnv> {
    /// Accessor over the process environment that follows the process-wide
    /// strict flag.
    pub const fn system() -> Self {
        Env {
            store: SystemEnv,
            strictness: Strictness::FollowProcess,
        }
    }
}

impl<S: ReadEnv> Env<S> {
    /// Accessor over `store` that follows the process-wide strict flag.
    pub fn new(store: S) -> Self {
        Env {
            store,
            strictness: Strictness::FollowProcess,
        }
    }

    pub fn strict(store: S) -> Self {
        Self::new(store).with_strictness(Strictness::Strict)
    }

    pub fn lenient(store: S) -> Self {
        Self::new(store).with_strictness(Strictness::Lenient)
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether `name` is present in the store, even if set to `""`.
    pub fn is_set(&self, name: &str) -> bool {
        self.store.lookup(name).is_some()
    }

    /// Raw value of `name`.
    ///
    /// # Errors
    ///
    /// Under strict policy, returns [`EnvError::MissingVariable`] if `name` is
    /// absent. Under lenient policy an absent variable reads as `""`.
    pub fn get_string(&self, name: &str) -> Result<String, EnvError> {
        self.resolve(self.lookup(name), String::new())
    }

    pub fn get_string_or(&self, name: &str, default: impl Into<String>) -> String {
        self.lookup(name).unwrap_or_else(|_| default.into())
    }

    /// Value of `name` parsed as a base-10 integer.
    ///
    /// # Errors
    ///
    /// Under strict policy, returns [`EnvError::MissingVariable`] if `name` is
    /// absent and [`EnvError::InvalidInt`] if it does not parse. Under lenient
    /// policy both cases read as `0`.
    pub fn get_int(&self, name: &str) -> Result<i64, EnvError> {
        self.resolve(self.int(name), 0)
    }

    pub fn get_int_or(&self, name: &str, default: i64) -> i64 {
        self.int(name).unwrap_or(default)
    }

    /// Value of `name` parsed as a boolean literal (`true`/`t`/`1`,
    /// `false`/`f`/`0`, any case).
    ///
    /// # Errors
    ///
    /// Under strict policy, returns [`EnvError::MissingVariable`] if `name` is
    /// absent and [`EnvError::InvalidBool`] if it is not a boolean literal.
    /// Under lenient policy both cases read as `false`.
    pub fn get_bool(&self, name: &str) -> Result<bool, EnvError> {
        self.resolve(self.bool(name), false)
    }

    pub fn get_bool_or(&self, name: &str, default: bool) -> bool {
        self.bool(name).unwrap_or(default)
    }

    /// Value of `name` split on `separator` (`","` when empty).
    ///
    /// An empty value yields an empty list. Empty segments produced by the
    /// split are kept.
    ///
    /// # Errors
    ///
    /// Under strict policy, returns [`EnvError::MissingVariable`] if `name` is
    /// absent. Under lenient policy an absent variable reads as an empty list.
    pub fn get_slice(&self, name: &str, separator: &str) -> Result<Vec<String>, EnvError> {
        self.resolve(self.slice(name, separator), Vec::new())
    }

    pub fn get_slice_or(&self, name: &str, separator: &str, default: Vec<String>) -> Vec<String> {
        self.slice(name, separator).unwrap_or(default)
    }

    /// Value of `name` parsed with [`FromStr`].
    ///
    /// # Errors
    ///
    /// Under strict policy, returns [`EnvError::MissingVariable`] if `name` is
    /// absent and [`EnvError::InvalidValue`] if it does not parse. Under
    /// lenient policy both cases read as `T::default()`.
    pub fn get_parsed<T: FromStr + Default>(&self, name: &str) -> Result<T, EnvError> {
        self.resolve(self.parsed(name), T::default())
    }

    pub fn get_parsed_or<T: FromStr>(&self, name: &str, default: T) -> T {
        self.parsed(name).unwrap_or(default)
    }

    fn lookup(&self, name: &str) -> Result<String, EnvError> {
        self.store
            .lookup(name)
            .ok_or_else(|| EnvError::MissingVariable {
                name: name.to_string(),
            })
    }

    fn int(&self, name: &str) -> Result<i64, EnvError> {
        self.lookup(name).and_then(|raw| coerce::parse_int(name, &raw))
    }

    fn bool(&self, name: &str) -> Result<bool, EnvError> {
        self.lookup(name).and_then(|raw| coerce::parse_bool(name, &raw))
    }

    fn slice(&self, name: &str, separator: &str) -> Result<Vec<String>, EnvError> {
        self.lookup(name).map(|raw| coerce::split(&raw, separator))
    }

    fn parsed<T: FromStr>(&self, name: &str) -> Result<T, EnvError> {
        self.lookup(name).and_then(|raw| coerce::parse_value(name, &raw))
    }

    /// Applies the strictness policy to a lookup result.
    fn resolve<T>(&self, result: Result<T, EnvError>, zero: T) -> Result<T, EnvError> {
        match result {
            Ok(value) => Ok(value),
            Err(err) if self.strictness.is_strict() => {
                tracing::warn!(name = err.name(), error = %err, "{LOG_PREFIX} {err}");
                Err(err)
            }
            Err(err) => {
                tracing::debug!(
                    name = err.name(),
                    error = %err,
                    "{LOG_PREFIX} using zero value"
                );
                Ok(zero)
            }
        }
    }
}

#[cfg(test)]
mod tests;
