// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Synthesized record types and their instances.
//!
//! A [`RemoteType`] is the runtime handle the carpenter produces for a
//! fully-resolved notation: an ordered field-name-to-type table plus a
//! factory for [`RecordInstance`] values. No code is generated; instances
//! are backed by a field-name-to-value map behind one polymorphic
//! accessor surface, so the deserializer can populate shapes it has no
//! compile-time knowledge of.

use crate::dynamic::FieldValue;
use crate::schema::PrimitiveKind;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Errors for record instance operations.
#[derive(Debug)]
pub enum RecordError {
    FieldNotFound(String),
    TypeMismatch { expected: String, got: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldNotFound(name) => write!(f, "Field not found: {}", name),
            Self::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Resolved type of one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticType {
    /// Primitive wire type.
    Primitive(PrimitiveKind),
    /// Nested synthesized record.
    Record(Arc<RemoteType>),
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.name()),
            Self::Record(ty) => f.write_str(ty.name()),
        }
    }
}

/// One entry of a synthesized record's field table.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    /// Field name.
    pub name: String,
    /// Resolved field type.
    pub ty: SemanticType,
}

impl RecordField {
    /// Create a new record field.
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Runtime handle for a synthesized composite record type.
///
/// The field table is flattened: supertype fields precede the record's
/// own, in wire order.
#[derive(Debug, PartialEq)]
pub struct RemoteType {
    name: String,
    fields: Vec<RecordField>,
}

impl RemoteType {
    /// Create a handle from a flattened field table.
    pub fn new(name: impl Into<String>, fields: Vec<RecordField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flattened field table, wire order.
    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&RecordField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a field's position in the wire order.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// Default value for a semantic type.
fn default_value(ty: &SemanticType) -> FieldValue {
    match ty {
        SemanticType::Primitive(p) => default_primitive(*p),
        SemanticType::Record(inner) => FieldValue::Record(Box::new(RecordInstance::new(inner))),
    }
}

/// Default value for a primitive.
fn default_primitive(kind: PrimitiveKind) -> FieldValue {
    match kind {
        PrimitiveKind::Bool => FieldValue::Bool(false),
        PrimitiveKind::U8 => FieldValue::U8(0),
        PrimitiveKind::U16 => FieldValue::U16(0),
        PrimitiveKind::U32 => FieldValue::U32(0),
        PrimitiveKind::U64 => FieldValue::U64(0),
        PrimitiveKind::I8 => FieldValue::I8(0),
        PrimitiveKind::I16 => FieldValue::I16(0),
        PrimitiveKind::I32 => FieldValue::I32(0),
        PrimitiveKind::I64 => FieldValue::I64(0),
        PrimitiveKind::F32 => FieldValue::F32(0.0),
        PrimitiveKind::F64 => FieldValue::F64(0.0),
        PrimitiveKind::Char => FieldValue::Char('\0'),
        PrimitiveKind::String => FieldValue::String(String::new()),
        PrimitiveKind::Bytes => FieldValue::Bytes(Vec::new()),
    }
}

/// A populated (or populating) instance of a synthesized record type.
#[derive(Debug, Clone)]
pub struct RecordInstance {
    ty: Arc<RemoteType>,
    values: HashMap<String, FieldValue>,
}

impl RecordInstance {
    /// Create an instance with default values for every field.
    pub fn new(ty: &Arc<RemoteType>) -> Self {
        let values = ty
            .fields()
            .iter()
            .map(|f| (f.name.clone(), default_value(&f.ty)))
            .collect();
        Self {
            ty: Arc::clone(ty),
            values,
        }
    }

    /// The type this instance was created from.
    pub fn remote_type(&self) -> &Arc<RemoteType> {
        &self.ty
    }

    /// Type name.
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Get a field value by name, converted to a concrete type.
    pub fn get<T: FromFieldValue>(&self, name: &str) -> Result<T, RecordError> {
        let value = self.get_raw(name)?;
        T::from_field(value)
    }

    /// Set a field value by name.
    pub fn set<T: IntoFieldValue>(&mut self, name: &str, value: T) -> Result<(), RecordError> {
        if self.ty.field(name).is_none() {
            return Err(RecordError::FieldNotFound(name.to_string()));
        }
        self.values.insert(name.to_string(), value.into_field());
        Ok(())
    }

    /// Get the raw field value by name.
    pub fn get_raw(&self, name: &str) -> Result<&FieldValue, RecordError> {
        if self.ty.field(name).is_none() {
            return Err(RecordError::FieldNotFound(name.to_string()));
        }
        self.values
            .get(name)
            .ok_or_else(|| RecordError::FieldNotFound(name.to_string()))
    }

    /// Iterate over fields in wire order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.ty
            .fields()
            .iter()
            .filter_map(|f| self.values.get(&f.name).map(|v| (f.name.as_str(), v)))
    }
}

impl PartialEq for RecordInstance {
    fn eq(&self, other: &Self) -> bool {
        self.ty.name() == other.ty.name() && self.values == other.values
    }
}

/// Trait for converting from FieldValue.
pub trait FromFieldValue: Sized {
    fn from_field(value: &FieldValue) -> Result<Self, RecordError>;
}

/// Trait for converting to FieldValue.
pub trait IntoFieldValue {
    fn into_field(self) -> FieldValue;
}

// Implement FromFieldValue for primitives
macro_rules! impl_from_field {
    ($ty:ty, $variant:ident, $name:expr) => {
        impl FromFieldValue for $ty {
            fn from_field(value: &FieldValue) -> Result<Self, RecordError> {
                match value {
                    FieldValue::$variant(v) => Ok(*v),
                    other => Err(RecordError::TypeMismatch {
                        expected: $name.to_string(),
                        got: format!("{:?}", other),
                    }),
                }
            }
        }
    };
}

impl_from_field!(bool, Bool, "bool");
impl_from_field!(u8, U8, "u8");
impl_from_field!(u16, U16, "u16");
impl_from_field!(u32, U32, "u32");
impl_from_field!(u64, U64, "u64");
impl_from_field!(i8, I8, "i8");
impl_from_field!(i16, I16, "i16");
impl_from_field!(i32, I32, "i32");
impl_from_field!(i64, I64, "i64");
impl_from_field!(f32, F32, "f32");
impl_from_field!(f64, F64, "f64");
impl_from_field!(char, Char, "char");

impl FromFieldValue for String {
    fn from_field(value: &FieldValue) -> Result<Self, RecordError> {
        match value {
            FieldValue::String(s) => Ok(s.clone()),
            other => Err(RecordError::TypeMismatch {
                expected: "string".to_string(),
                got: format!("{:?}", other),
            }),
        }
    }
}

impl FromFieldValue for Vec<u8> {
    fn from_field(value: &FieldValue) -> Result<Self, RecordError> {
        match value {
            FieldValue::Bytes(b) => Ok(b.clone()),
            other => Err(RecordError::TypeMismatch {
                expected: "bytes".to_string(),
                got: format!("{:?}", other),
            }),
        }
    }
}

impl FromFieldValue for RecordInstance {
    fn from_field(value: &FieldValue) -> Result<Self, RecordError> {
        match value {
            FieldValue::Record(r) => Ok(r.as_ref().clone()),
            other => Err(RecordError::TypeMismatch {
                expected: "record".to_string(),
                got: format!("{:?}", other),
            }),
        }
    }
}

// Implement IntoFieldValue for primitives
macro_rules! impl_into_field {
    ($ty:ty, $variant:ident) => {
        impl IntoFieldValue for $ty {
            fn into_field(self) -> FieldValue {
                FieldValue::$variant(self)
            }
        }
    };
}

impl_into_field!(bool, Bool);
impl_into_field!(u8, U8);
impl_into_field!(u16, U16);
impl_into_field!(u32, U32);
impl_into_field!(u64, U64);
impl_into_field!(i8, I8);
impl_into_field!(i16, I16);
impl_into_field!(i32, I32);
impl_into_field!(i64, I64);
impl_into_field!(f32, F32);
impl_into_field!(f64, F64);
impl_into_field!(char, Char);

impl IntoFieldValue for String {
    fn into_field(self) -> FieldValue {
        FieldValue::String(self)
    }
}

impl IntoFieldValue for &str {
    fn into_field(self) -> FieldValue {
        FieldValue::String(self.to_string())
    }
}

impl IntoFieldValue for Vec<u8> {
    fn into_field(self) -> FieldValue {
        FieldValue::Bytes(self)
    }
}

impl IntoFieldValue for RecordInstance {
    fn into_field(self) -> FieldValue {
        FieldValue::Record(Box::new(self))
    }
}

impl IntoFieldValue for FieldValue {
    fn into_field(self) -> FieldValue {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount_type() -> Arc<RemoteType> {
        Arc::new(RemoteType::new(
            "Amount",
            vec![
                RecordField::new("quantity", SemanticType::Primitive(PrimitiveKind::U64)),
                RecordField::new("currency", SemanticType::Primitive(PrimitiveKind::String)),
            ],
        ))
    }

    #[test]
    fn test_instantiate_defaults() {
        let ty = amount_type();
        let instance = RecordInstance::new(&ty);

        assert_eq!(instance.type_name(), "Amount");
        assert_eq!(instance.get::<u64>("quantity").unwrap(), 0);
        assert_eq!(instance.get::<String>("currency").unwrap(), "");
    }

    #[test]
    fn test_set_and_get() {
        let ty = amount_type();
        let mut instance = RecordInstance::new(&ty);

        instance.set("quantity", 1500u64).expect("set quantity");
        instance.set("currency", "GBP").expect("set currency");

        assert_eq!(instance.get::<u64>("quantity").unwrap(), 1500);
        assert_eq!(instance.get::<String>("currency").unwrap(), "GBP");
        assert!(instance.set("issuer", 1u8).is_err());
        assert!(instance.get::<u64>("issuer").is_err());
    }

    #[test]
    fn test_type_mismatch() {
        let ty = amount_type();
        let mut instance = RecordInstance::new(&ty);
        instance.set("quantity", 7u64).expect("set");

        let err = instance.get::<String>("quantity").unwrap_err();
        assert!(matches!(err, RecordError::TypeMismatch { .. }));
    }

    #[test]
    fn test_nested_record_default() {
        let amount = amount_type();
        let transfer = Arc::new(RemoteType::new(
            "Transfer",
            vec![
                RecordField::new("amount", SemanticType::Record(amount)),
                RecordField::new("memo", SemanticType::Primitive(PrimitiveKind::String)),
            ],
        ));

        let instance = RecordInstance::new(&transfer);
        let nested = instance
            .get_raw("amount")
            .expect("amount field")
            .as_record()
            .expect("nested record");
        assert_eq!(nested.type_name(), "Amount");
        assert_eq!(nested.get::<u64>("quantity").unwrap(), 0);
    }

    #[test]
    fn test_field_iteration_wire_order() {
        let ty = amount_type();
        let instance = RecordInstance::new(&ty);

        let names: Vec<&str> = instance.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["quantity", "currency"]);
    }
}
