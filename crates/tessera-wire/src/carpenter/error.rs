// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Error types for type synthesis.
//!
//! Defines `CarpentryError` for failures while materializing one
//! resolved notation, and `SynthesisError` for session-level failures of
//! the dependency-resolution driver. All errors surface synchronously
//! from the call that triggered them; none are retried internally, and a
//! failed session must be discarded and re-seeded before retrying.

use std::fmt;

/// Type construction failure modes.
#[derive(Debug)]
pub enum CarpentryError {
    /// A type or field name is reserved or empty.
    ReservedIdentifier(String),
    /// A field name appears twice in the flattened field table.
    DuplicateField {
        /// Type being built.
        type_name: String,
        /// Offending field name.
        field: String,
    },
    /// A field references a composite that is not in the registry.
    UnresolvedField {
        /// Type being built.
        type_name: String,
        /// Offending field name.
        field: String,
        /// Name of the missing composite.
        referenced: String,
    },
    /// The supertype is not a registered record.
    InvalidSupertype {
        /// Type being built.
        type_name: String,
        /// Offending supertype reference.
        supertype: String,
    },
    /// A type with this name is already registered.
    NameClash(String),
}

impl fmt::Display for CarpentryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedIdentifier(name) => {
                write!(f, "reserved or empty identifier: '{}'", name)
            }
            Self::DuplicateField { type_name, field } => {
                write!(f, "duplicate field '{}' in type '{}'", field, type_name)
            }
            Self::UnresolvedField {
                type_name,
                field,
                referenced,
            } => write!(
                f,
                "field '{}' of type '{}' references unbuilt type '{}'",
                field, type_name, referenced
            ),
            Self::InvalidSupertype {
                type_name,
                supertype,
            } => write!(
                f,
                "invalid supertype '{}' for type '{}'",
                supertype, type_name
            ),
            Self::NameClash(name) => write!(f, "type '{}' is already registered", name),
        }
    }
}

impl std::error::Error for CarpentryError {}

/// Session-level synthesis failure modes.
#[derive(Debug)]
pub enum SynthesisError {
    /// The carpenter rejected a fully-resolved notation. Fatal to the
    /// session; types built before the failure stay in the registry.
    Carpentry(CarpentryError),
    /// Bidirectional bookkeeping between the dependents and blockers
    /// maps was violated. Indicates a defect in dependency recording;
    /// the session must be abandoned.
    LedgerCorrupted {
        /// Dependent whose outstanding set was inconsistent.
        dependent: String,
        /// Blocker that should have been outstanding.
        blocker: String,
    },
    /// The pending queue drained while types were still blocked: the
    /// dependency graph has a cycle or a dependency that was never
    /// supplied.
    UnresolvableGraph {
        /// Names still blocked, sorted.
        blocked: Vec<String>,
    },
    /// The session built more types than its configured safety limit.
    LimitExceeded {
        /// Types built so far.
        built: usize,
        /// Configured limit.
        limit: usize,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Carpentry(e) => write!(f, "cannot materialize remote type: {}", e),
            Self::LedgerCorrupted { dependent, blocker } => write!(
                f,
                "dependency ledger corrupted: '{}' does not wait on '{}'",
                dependent, blocker
            ),
            Self::UnresolvableGraph { blocked } => write!(
                f,
                "unresolvable dependency graph, still blocked: {}",
                blocked.join(", ")
            ),
            Self::LimitExceeded { built, limit } => {
                write!(f, "type budget exhausted: {} built, limit {}", built, limit)
            }
        }
    }
}

impl std::error::Error for SynthesisError {}

impl From<CarpentryError> for SynthesisError {
    fn from(value: CarpentryError) -> Self {
        Self::Carpentry(value)
    }
}
