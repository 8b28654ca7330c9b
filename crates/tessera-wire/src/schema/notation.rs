// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Type notations: shape descriptions for composite records carried in
//! wire envelopes.
//!
//! A [`TypeNotation`] describes one composite record the receiving node
//! may never have seen: its name, its ordered fields, and an optional
//! supertype. Field types are [`TypeRef`]s, either a primitive (always
//! resolvable) or a named reference to another composite that may itself
//! still be pending synthesis.

/// Primitive wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
    String,
    Bytes,
}

impl PrimitiveKind {
    /// Wire-level name of the primitive.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }
}

/// Reference to a field or supertype's type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    /// A primitive, resolvable without synthesis.
    Primitive(PrimitiveKind),
    /// A composite referenced by name; may not be built yet.
    Named(String),
}

impl TypeRef {
    /// Create a named reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Check if this reference is a primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Get the referenced composite name, if any.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Primitive(_) => None,
        }
    }
}

/// A named field of a composite record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldNotation {
    /// Field name.
    pub name: String,
    /// Field type reference.
    pub ty: TypeRef,
}

impl FieldNotation {
    /// Create a new field notation.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Create a primitive field notation.
    pub fn primitive(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::new(name, TypeRef::Primitive(kind))
    }
}

/// Immutable shape description of one composite record to synthesize.
///
/// Names are unique within a synthesis session. Field order is the wire
/// order and is preserved through synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeNotation {
    /// Composite name, unique within a session.
    pub name: String,
    /// Ordered fields.
    pub fields: Vec<FieldNotation>,
    /// Optional supertype whose fields precede this record's own.
    pub supertype: Option<TypeRef>,
}

impl TypeNotation {
    /// Create a notation with no supertype.
    pub fn new(name: impl Into<String>, fields: Vec<FieldNotation>) -> Self {
        Self {
            name: name.into(),
            fields,
            supertype: None,
        }
    }

    /// Attach a supertype reference.
    pub fn with_supertype(mut self, supertype: TypeRef) -> Self {
        self.supertype = Some(supertype);
        self
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldNotation> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All named composite references in this notation, supertype first.
    ///
    /// Duplicates are preserved: a record with two fields of the same
    /// composite type yields that name twice, and dependency bookkeeping
    /// counts each occurrence separately.
    pub fn named_refs(&self) -> impl Iterator<Item = &str> {
        self.supertype
            .iter()
            .chain(self.fields.iter().map(|f| &f.ty))
            .filter_map(|r| r.as_named())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let notation = TypeNotation::new(
            "Amount",
            vec![
                FieldNotation::primitive("quantity", PrimitiveKind::U64),
                FieldNotation::primitive("currency", PrimitiveKind::String),
            ],
        );

        assert!(notation.field("quantity").is_some());
        assert!(notation.field("issuer").is_none());
        assert_eq!(notation.named_refs().count(), 0);
    }

    #[test]
    fn test_named_refs_preserve_duplicates() {
        let notation = TypeNotation::new(
            "Swap",
            vec![
                FieldNotation::new("give", TypeRef::named("Amount")),
                FieldNotation::new("take", TypeRef::named("Amount")),
                FieldNotation::primitive("deadline", PrimitiveKind::U64),
            ],
        );

        let refs: Vec<&str> = notation.named_refs().collect();
        assert_eq!(refs, vec!["Amount", "Amount"]);
    }

    #[test]
    fn test_supertype_ref_counted() {
        let notation = TypeNotation::new(
            "SignedTransfer",
            vec![FieldNotation::new("signature", TypeRef::named("Signature"))],
        )
        .with_supertype(TypeRef::named("Transfer"));

        let refs: Vec<&str> = notation.named_refs().collect();
        assert_eq!(refs, vec!["Transfer", "Signature"]);
    }
}
