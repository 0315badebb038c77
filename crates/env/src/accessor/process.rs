//! Free functions over the process environment.
//!
//! Each call builds an [`Env::system`] accessor, so the process-wide strict
//! flag is read on every call.

use super::Env;
use crate::error::EnvError;

pub fn get_string(name: &str) -> Result<String, EnvError> {
    Env::system().get_string(name)
}

pub fn get_string_or(name: &str, default: impl Into<String>) -> String {
    Env::system().get_string_or(name, default)
}

pub fn get_int(name: &str) -> Result<i64, EnvError> {
    Env::system().get_int(name)
}

pub fn get_int_or(name: &str, default: i64) -> i64 {
    Env::system().get_int_or(name, default)
}

pub fn get_bool(name: &str) -> Result<bool, EnvError> {
    Env::system().get_bool(name)
}

pub fn get_bool_or(name: &str, default: bool) -> bool {
    Env::system().get_bool_or(name, default)
}

pub fn get_slice(name: &str, separator: &str) -> Result<Vec<String>, EnvError> {
    Env::system().get_slice(name, separator)
}

pub fn get_slice_or(name: &str, separator: &str, default: Vec<String>) -> Vec<String> {
    Env::system().get_slice_or(name, separator, default)
}
