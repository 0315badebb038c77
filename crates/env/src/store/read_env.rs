/// Key lookup over an environment store.
///
/// Implementations only look keys up; they never enumerate or delete.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site when
/// an accessor is shared across threads.
pub trait ReadEnv {
    /// Returns the value of `key`, or `None` when the key is absent.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
