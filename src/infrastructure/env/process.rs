//! Process environment and layering

use crate::domain::ports::EnvSource;

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// Looks a key up in `primary`, then in `fallback`.
#[derive(Debug, Clone, Default)]
pub struct LayeredEnv<P, F> {
    primary: P,
    fallback: F,
}

impl<P: EnvSource, F: EnvSource> LayeredEnv<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: EnvSource, F: EnvSource> EnvSource for LayeredEnv<P, F> {
    fn var(&self, key: &str) -> Option<String> {
        self.primary.var(key).or_else(|| self.fallback.var(key))
    }
}
