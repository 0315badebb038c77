//! Tests for the typed accessors.
//!
//! Responsibilities:
//! - Test strict and lenient policies against absent, empty and malformed values.
//! - Test that the `_or` variants never fail and ignore the policy.
//! - Test the diagnostics emitted on failure paths.
//!
//! Invariants:
//! - Tests use `InMemoryEnv` with an explicit strictness, so the process
//!   environment and the process-wide strict flag are never touched.

use super::Env;
use crate::mode::Strictness;
use crate::store::InMemoryEnv;


/// Store with one variable of each interesting shape.
pub fn fixture_store() -> InMemoryEnv {
    InMemoryEnv::from_iter([
        ("NAME", "test"),
        ("PORT", "42"),
        ("NEGATIVE", "-3"),
        ("ENABLED", "true"),
        ("DISABLED", "false"),
        ("HOSTS", "hello,world"),
        ("LETTERS", "a,b,c"),
        ("EMPTY", ""),
        ("GARBAGE", "not-a-number"),
    ])
}

pub fn strict_env() -> Env<InMemoryEnv> {
    Env::strict(fixture_store())
}

pub fn lenient_env() -> Env<InMemoryEnv> {
    Env::lenient(fixture_store())
}

#[test]
fn test_constructors_set_strictness() {
    assert_eq!(strict_env().strictness(), Strictness::Strict);
    assert_eq!(lenient_env().strictness(), Strictness::Lenient);
    assert_eq!(
        Env::new(InMemoryEnv::new()).strictness(),
        Strictness::FollowProcess
    );
    assert_eq!(Env::system().strictness(), Strictness::FollowProcess);
}

#[test]
fn test_is_set_counts_empty_values() {
    let env = lenient_env();
    assert!(env.is_set("EMPTY"));
    assert!(env.is_set("NAME"));
    assert!(!env.is_set("MISSING"));
}

#[test]
fn test_reads_are_not_cached() {
    let env = strict_env();
    assert_eq!(env.get_int("PORT").unwrap(), 42);

    env.store().set("PORT", "43");
    assert_eq!(env.get_int("PORT").unwrap(), 43);

    env.store().remove("PORT");
    assert!(env.get_int("PORT").is_err());
}

#[test]
fn test_shared_accessor_across_threads() {
    let env = strict_env();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| env.get_slice("HOSTS", ",").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec!["hello", "world"]);
        }
    });
}
