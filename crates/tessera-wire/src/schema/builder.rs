// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Fluent builder API for TypeNotation.

use crate::schema::{FieldNotation, PrimitiveKind, TypeNotation, TypeRef};

/// Builder for creating TypeNotation instances.
#[derive(Debug)]
pub struct NotationBuilder {
    name: String,
    fields: Vec<FieldNotation>,
    supertype: Option<TypeRef>,
}

impl NotationBuilder {
    /// Create a new builder for a composite record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            supertype: None,
        }
    }

    /// Add a primitive field.
    pub fn field(mut self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        self.fields.push(FieldNotation::primitive(name, kind));
        self
    }

    /// Add a field referencing another composite by name.
    pub fn named_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields
            .push(FieldNotation::new(name, TypeRef::named(type_name)));
        self
    }

    /// Add a string field.
    pub fn string_field(self, name: impl Into<String>) -> Self {
        self.field(name, PrimitiveKind::String)
    }

    /// Set the supertype by composite name.
    pub fn supertype(mut self, type_name: impl Into<String>) -> Self {
        self.supertype = Some(TypeRef::named(type_name));
        self
    }

    /// Build the TypeNotation.
    pub fn build(self) -> TypeNotation {
        let mut notation = TypeNotation::new(self.name, self.fields);
        notation.supertype = self.supertype;
        notation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_primitives() {
        let notation = NotationBuilder::new("Amount")
            .field("quantity", PrimitiveKind::U64)
            .string_field("currency")
            .build();

        assert_eq!(notation.name, "Amount");
        assert_eq!(notation.fields.len(), 2);
        assert!(notation.supertype.is_none());
    }

    #[test]
    fn test_builder_named_and_supertype() {
        let notation = NotationBuilder::new("SignedTransfer")
            .named_field("amount", "Amount")
            .field("nonce", PrimitiveKind::U64)
            .supertype("Transfer")
            .build();

        assert_eq!(notation.supertype, Some(TypeRef::named("Transfer")));
        assert_eq!(
            notation.field("amount").map(|f| &f.ty),
            Some(&TypeRef::named("Amount"))
        );
    }
}
