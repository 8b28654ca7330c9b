// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Incremental dependency-resolving type synthesis.
//!
//! When a payload references composite types the node has never loaded,
//! the envelope layer extracts their notations and registers them here.
//! The engine builds them in an order that always satisfies their
//! dependencies, mutating its own work-list as each build completes.
//!
//! # Components
//!
//! - **[`DependencyLedger`]**: which not-yet-built type waits on which,
//!   and the inverse
//! - **[`SynthesisSession`]**: the driver; exhaustive ([`SynthesisSession::drain`])
//!   or one build at a time ([`SynthesisSession::step`])
//! - **[`Carpenter`]** / **[`RecordCarpenter`]**: materializes one
//!   resolved notation as a dynamic record type
//! - **[`TypeRegistry`]**: append-only name-to-type mapping the
//!   deserializer reads
//!
//! # Example
//!
//! ```rust
//! use tessera_wire::carpenter::SynthesisSession;
//! use tessera_wire::schema::{NotationBuilder, PrimitiveKind};
//!
//! let mut session = SynthesisSession::new();
//!
//! // Arrival order does not matter; Transfer waits for Amount.
//! session.enqueue(
//!     NotationBuilder::new("Transfer")
//!         .named_field("amount", "Amount")
//!         .string_field("memo")
//!         .build(),
//! );
//! session.enqueue(
//!     NotationBuilder::new("Amount")
//!         .field("quantity", PrimitiveKind::U64)
//!         .string_field("currency")
//!         .build(),
//! );
//!
//! session.drain().unwrap();
//! assert!(session.registry().contains("Transfer"));
//! ```

mod driver;
mod error;
mod ledger;
mod record_carpenter;
mod registry;

pub use driver::{Elaboration, PassthroughSource, SchemaSource, StepOutcome, SynthesisSession};
pub use error::{CarpentryError, SynthesisError};
pub use ledger::DependencyLedger;
pub use record_carpenter::{Carpenter, RecordCarpenter, RESERVED_IDENTIFIERS};
pub use registry::TypeRegistry;
