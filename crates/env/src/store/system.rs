use super::ReadEnv;

/// Zero-sized type that delegates to the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    /// Non-UTF-8 values are converted lossily; they are present, not absent.
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}
