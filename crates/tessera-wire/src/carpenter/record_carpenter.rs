// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Carpentry: materializing one resolved notation as a runtime type.

use crate::carpenter::{CarpentryError, TypeRegistry};
use crate::dynamic::{RecordField, RemoteType, SemanticType};
use crate::schema::{TypeNotation, TypeRef};
use std::sync::Arc;

/// Identifiers that may not name a synthesized type or field.
pub const RESERVED_IDENTIFIERS: &[&str] = &["type", "class", "record", "null"];

/// Backend that turns a fully-resolved notation into a runtime type.
///
/// Invoked by the synthesis driver once every named reference in the
/// notation is present in the registry. Implementations must be pure,
/// in-process computations; a failure aborts the whole session.
pub trait Carpenter {
    /// Materialize `notation` against the already-built types in
    /// `registry`.
    fn build(
        &self,
        notation: &TypeNotation,
        registry: &TypeRegistry,
    ) -> Result<Arc<RemoteType>, CarpentryError>;
}

/// Default carpenter producing dynamic record types.
///
/// No code is generated: the handle wraps the flattened field table and
/// a factory for map-backed instances (see [`crate::dynamic`]).
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordCarpenter;

impl RecordCarpenter {
    fn resolve_supertype(
        notation: &TypeNotation,
        registry: &TypeRegistry,
    ) -> Result<Option<Arc<RemoteType>>, CarpentryError> {
        let Some(supertype) = &notation.supertype else {
            return Ok(None);
        };
        let invalid = |supertype: &str| CarpentryError::InvalidSupertype {
            type_name: notation.name.clone(),
            supertype: supertype.to_string(),
        };
        match supertype {
            TypeRef::Primitive(p) => Err(invalid(p.name())),
            TypeRef::Named(name) => registry
                .lookup(name)
                .cloned()
                .map(Some)
                .ok_or_else(|| invalid(name)),
        }
    }
}

impl Carpenter for RecordCarpenter {
    fn build(
        &self,
        notation: &TypeNotation,
        registry: &TypeRegistry,
    ) -> Result<Arc<RemoteType>, CarpentryError> {
        check_identifier(&notation.name)?;

        // Supertype fields come first in the wire layout.
        let mut fields: Vec<RecordField> = Vec::with_capacity(notation.fields.len());
        if let Some(base) = Self::resolve_supertype(notation, registry)? {
            fields.extend(base.fields().iter().cloned());
        }

        for field in &notation.fields {
            check_identifier(&field.name)?;
            if fields.iter().any(|existing| existing.name == field.name) {
                return Err(CarpentryError::DuplicateField {
                    type_name: notation.name.clone(),
                    field: field.name.clone(),
                });
            }
            let ty = match &field.ty {
                TypeRef::Primitive(p) => SemanticType::Primitive(*p),
                TypeRef::Named(referenced) => registry
                    .lookup(referenced)
                    .cloned()
                    .map(SemanticType::Record)
                    .ok_or_else(|| CarpentryError::UnresolvedField {
                        type_name: notation.name.clone(),
                        field: field.name.clone(),
                        referenced: referenced.clone(),
                    })?,
            };
            fields.push(RecordField::new(field.name.clone(), ty));
        }

        log::debug!(
            "[CARPENTER] built type='{}' fields={}",
            notation.name,
            fields.len()
        );
        Ok(Arc::new(RemoteType::new(notation.name.clone(), fields)))
    }
}

fn check_identifier(name: &str) -> Result<(), CarpentryError> {
    if name.is_empty() || RESERVED_IDENTIFIERS.contains(&name) {
        return Err(CarpentryError::ReservedIdentifier(name.to_string()));
    }
    Ok(())
}
