// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Schema notations embedded in wire envelopes.
//!
//! These are the shape descriptions an upstream envelope parser extracts
//! before handing them to the synthesis engine. They carry no behavior of
//! their own; [`crate::carpenter`] turns them into instantiable types.

mod builder;
mod notation;

pub use builder::NotationBuilder;
pub use notation::{FieldNotation, PrimitiveKind, TypeNotation, TypeRef};
