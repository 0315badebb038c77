//! Conversions from a raw variable value to the requested type.
//!
//! These never consult the strictness policy; they report every failure and
//! leave the strict/lenient decision to the accessor.

use std::str::FromStr;

use crate::constants::{DEFAULT_SEPARATOR, FALSE_LITERALS, TRUE_LITERALS};
use crate::error::EnvError;

/// Base-10 integer with an optional sign. Surrounding whitespace is rejected.
pub(crate) fn parse_int(name: &str, raw: &str) -> Result<i64, EnvError> {
    raw.parse().map_err(|_| EnvError::InvalidInt {
        name: name.to_string(),
        raw: raw.to_string(),
    })
}

pub(crate) fn parse_bool(name: &str, raw: &str) -> Result<bool, EnvError> {
    if TRUE_LITERALS.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        Ok(true)
    } else if FALSE_LITERALS.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        Ok(false)
    } else {
        Err(EnvError::InvalidBool {
            name: name.to_string(),
            raw: raw.to_string(),
        })
    }
}

pub(crate) fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, EnvError> {
    raw.parse().map_err(|_| EnvError::InvalidValue {
        name: name.to_string(),
        raw: raw.to_string(),
        expected: std::any::type_name::<T>(),
    })
}

/// Splits `raw` on `separator`, keeping empty segments.
///
/// An empty `raw` yields no elements and an empty `separator` falls back to
/// [`DEFAULT_SEPARATOR`].
pub(crate) fn split(raw: &str, separator: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let separator = if separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        separator
    };
    raw.split(separator).map(str::to_string).collect()
}
