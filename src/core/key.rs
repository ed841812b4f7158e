//! Identity keys for registered containers.

use std::fmt;

/// Key a container is registered and looked up under.
///
/// Semantics:
/// - Keys are caller-supplied and expected to be globally unique.
/// - The registry does not enforce uniqueness; registering a second container
///   under an existing key silently replaces the first entry.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IdentityKey {
    namespace: String,
    name: String,
}

impl IdentityKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}
