use std::collections::HashMap;

/// A mutable key-value view of an environment variable table.
///
/// The bootstrap only ever adds variables, it never replaces them. That
/// discipline is captured by [`EnvStore::set_if_absent`]: values already
/// present in the store, whether inherited from the surrounding process or
/// written by an earlier call, always win.
pub trait EnvStore {
    /// Get the value of `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Check if `key` is present.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value` unless it is already present.
    ///
    /// Returns `true` if the value was written.
    fn set_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.contains(key) {
            false
        } else {
            self.set(key, value);
            true
        }
    }
}

/// The environment table of the running process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

/// An in-memory store, for tests and dry runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
