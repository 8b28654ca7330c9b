// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! # tessera-wire - Runtime remote-type synthesis
//!
//! Support library for deserializing Tessera ledger payloads that
//! reference composite record types the receiving node has never
//! loaded. The sender's application logic, and therefore its type
//! definitions, need not be installed locally: payloads embed schema
//! notations, and this crate synthesizes matching runtime types in
//! dependency order before field data is decoded into them.
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera_wire::{
//!     NotationBuilder, PrimitiveKind, RecordInstance, SynthesisError, SynthesisSession,
//! };
//!
//! fn main() -> Result<(), SynthesisError> {
//!     let mut session = SynthesisSession::new();
//!
//!     // Notations extracted from a wire envelope, in arrival order.
//!     session.enqueue(
//!         NotationBuilder::new("Transfer")
//!             .named_field("amount", "Amount")
//!             .string_field("memo")
//!             .build(),
//!     );
//!     session.enqueue(
//!         NotationBuilder::new("Amount")
//!             .field("quantity", PrimitiveKind::U64)
//!             .string_field("currency")
//!             .build(),
//!     );
//!
//!     // Amount is built first, unblocking Transfer.
//!     session.drain()?;
//!
//!     let transfer = session.registry().lookup("Transfer").expect("built");
//!     let mut instance = RecordInstance::new(transfer);
//!     instance.set("memo", "rent").expect("known field");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                envelope extraction (external)                |
//! +--------------------------------------------------------------+
//! |  carpenter: DependencyLedger -> SynthesisSession -> Registry |
//! +--------------------------------------------------------------+
//! |      dynamic: RemoteType handles, RecordInstance values      |
//! +--------------------------------------------------------------+
//! |                 payload decoding (external)                  |
//! +--------------------------------------------------------------+
//! ```
//!
//! One session covers one deserialization attempt and is driven
//! single-threaded to completion; abandoning it is just dropping it.

/// Incremental dependency-resolving type synthesis (start here).
pub mod carpenter;
/// Runtime limits for synthesis sessions.
pub mod config;
/// Dynamic records backing synthesized types.
pub mod dynamic;
/// Schema notations embedded in wire envelopes.
pub mod schema;

pub use carpenter::{
    Carpenter, CarpentryError, DependencyLedger, RecordCarpenter, StepOutcome, SynthesisError,
    SynthesisSession, TypeRegistry,
};
pub use config::SynthesisLimits;
pub use dynamic::{FieldValue, RecordInstance, RemoteType};
pub use schema::{FieldNotation, NotationBuilder, PrimitiveKind, TypeNotation, TypeRef};
