// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Dynamic records for synthesized types.
//!
//! Runtime record manipulation without compile-time type knowledge.
//!
//! # Example
//!
//! ```rust
//! use tessera_wire::dynamic::{RecordField, RecordInstance, RemoteType, SemanticType};
//! use tessera_wire::schema::PrimitiveKind;
//! use std::sync::Arc;
//!
//! let ty = Arc::new(RemoteType::new(
//!     "Amount",
//!     vec![
//!         RecordField::new("quantity", SemanticType::Primitive(PrimitiveKind::U64)),
//!         RecordField::new("currency", SemanticType::Primitive(PrimitiveKind::String)),
//!     ],
//! ));
//!
//! let mut amount = RecordInstance::new(&ty);
//! amount.set("quantity", 1500u64).unwrap();
//! amount.set("currency", "GBP").unwrap();
//!
//! let quantity: u64 = amount.get("quantity").unwrap();
//! assert_eq!(quantity, 1500);
//! ```

mod record;
mod value;

pub use record::{
    FromFieldValue, IntoFieldValue, RecordError, RecordField, RecordInstance, RemoteType,
    SemanticType,
};
pub use value::FieldValue;
