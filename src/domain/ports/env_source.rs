//! EnvSource port - read-only access to environment variables
//!
//! Configuration loading reads the environment only through this trait, so the
//! process environment, a `.env` file or a test map can stand behind it.

use std::collections::HashMap;

pub trait EnvSource {
    /// Value of `key`, or `None` if it is not set.
    ///
    /// A variable set to the empty string is still `Some("")`.
    fn var(&self, key: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
