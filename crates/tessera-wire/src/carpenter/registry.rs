// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Registry of synthesized remote types.

use crate::carpenter::CarpentryError;
use crate::dynamic::RemoteType;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Append-only mapping from type name to synthesized runtime type.
///
/// One registry covers one synthesis session. Lookups for names not
/// present return `None` ("not yet built"), not an error, since a
/// session may be mid-flight when driven step by step.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, Arc<RemoteType>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a synthesized type under its own name.
    ///
    /// Keys are unique for the lifetime of the session; a second
    /// registration under the same name is a [`CarpentryError::NameClash`].
    pub fn register(&mut self, ty: Arc<RemoteType>) -> Result<(), CarpentryError> {
        match self.types.entry(ty.name().to_string()) {
            Entry::Occupied(_) => Err(CarpentryError::NameClash(ty.name().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(ty);
                Ok(())
            }
        }
    }

    /// Look up a synthesized type by name.
    pub fn lookup(&self, name: &str) -> Option<&Arc<RemoteType>> {
        self.types.get(name)
    }

    /// Check whether a name has been built.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over registered type names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::{RecordField, SemanticType};
    use crate::schema::PrimitiveKind;

    fn party() -> Arc<RemoteType> {
        Arc::new(RemoteType::new(
            "Party",
            vec![RecordField::new(
                "key",
                SemanticType::Primitive(PrimitiveKind::Bytes),
            )],
        ))
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("Party").is_none());

        registry.register(party()).expect("register");
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Party"));
        assert_eq!(
            registry.lookup("Party").map(|t| t.name()),
            Some("Party")
        );
    }

    #[test]
    fn test_duplicate_registration_clashes() {
        let mut registry = TypeRegistry::new();
        registry.register(party()).expect("first");

        let err = registry.register(party()).unwrap_err();
        assert!(matches!(err, CarpentryError::NameClash(name) if name == "Party"));
        assert_eq!(registry.len(), 1);
    }
}
