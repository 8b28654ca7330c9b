// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Dependency bookkeeping for one synthesis session.
//!
//! The ledger tracks every not-yet-built composite in exactly one of two
//! places: the pending queue (all dependencies satisfied, awaiting
//! carpentry) or the blocked map (waiting on other not-yet-built names).
//! Two structures mirror each other:
//!
//! - dependents map: blocker name -> names waiting on it, one entry per
//!   recorded pair;
//! - blocked map: dependent name -> stored notation + outstanding
//!   blocker multiset.
//!
//! Dependency units are counted, not deduplicated. A notation with two
//! fields of the same pending composite records two units against that
//! blocker, and resolving the blocker removes both. The unit totals on
//! the two sides are always equal, so a dependent is promoted exactly
//! when its count map empties and never with a phantom remaining
//! blocker.

use crate::carpenter::SynthesisError;
use crate::schema::TypeNotation;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone)]
struct BlockedNotation {
    notation: TypeNotation,
    /// Outstanding blocker name -> remaining dependency units.
    waiting_on: HashMap<String, usize>,
}

/// Mutable dependency bookkeeping for pending and blocked composites.
#[derive(Debug, Default)]
pub struct DependencyLedger {
    pending: VecDeque<TypeNotation>,
    dependents: HashMap<String, Vec<String>>,
    blocked: HashMap<String, BlockedNotation>,
}

impl DependencyLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notation whose dependencies are all satisfied.
    pub fn submit(&mut self, notation: TypeNotation) {
        log::debug!("[LEDGER] enqueue type='{}'", notation.name);
        self.pending.push_back(notation);
    }

    /// Declare that `dependent` cannot be built until `blocker` is.
    ///
    /// Safe to call repeatedly for the same pair: each call adds one
    /// dependency unit on both sides, and each resolution of `blocker`
    /// removes one. The notation is stored on first sight of
    /// `dependent`; later calls only touch the counts.
    pub fn record_dependency(&mut self, dependent: &str, blocker: &str, notation: &TypeNotation) {
        log::debug!(
            "[LEDGER] defer type='{}' waiting_on='{}'",
            dependent,
            blocker
        );
        self.dependents
            .entry(blocker.to_string())
            .or_default()
            .push(dependent.to_string());
        let entry = self
            .blocked
            .entry(dependent.to_string())
            .or_insert_with(|| BlockedNotation {
                notation: notation.clone(),
                waiting_on: HashMap::new(),
            });
        *entry.waiting_on.entry(blocker.to_string()).or_insert(0) += 1;
    }

    /// Remove and return the next pending notation, FIFO.
    pub(crate) fn pop_pending(&mut self) -> Option<TypeNotation> {
        self.pending.pop_front()
    }

    /// Detach the list of names waiting on `blocker`, if any.
    ///
    /// The returned snapshot is no longer reachable from the ledger, so
    /// the caller can feed promotions back in while walking it.
    pub(crate) fn take_dependents(&mut self, blocker: &str) -> Option<Vec<String>> {
        self.dependents.remove(blocker)
    }

    /// Remove one dependency unit of `blocker` from `dependent`.
    ///
    /// Returns the stored notation when the outstanding multiset
    /// empties, promoting the dependent. A unit that is not outstanding
    /// means the two maps have diverged and the session is corrupt.
    pub(crate) fn satisfy(
        &mut self,
        dependent: &str,
        blocker: &str,
    ) -> Result<Option<TypeNotation>, SynthesisError> {
        let corrupted = || SynthesisError::LedgerCorrupted {
            dependent: dependent.to_string(),
            blocker: blocker.to_string(),
        };

        let entry = self.blocked.get_mut(dependent).ok_or_else(corrupted)?;
        let count = entry.waiting_on.get_mut(blocker).ok_or_else(corrupted)?;
        *count -= 1;
        if *count == 0 {
            entry.waiting_on.remove(blocker);
        }
        if entry.waiting_on.is_empty() {
            Ok(self.blocked.remove(dependent).map(|b| b.notation))
        } else {
            Ok(None)
        }
    }

    /// Number of pending notations. Blocked notations are not counted
    /// until promoted.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no notations are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of blocked notations.
    pub fn blocked_len(&self) -> usize {
        self.blocked.len()
    }

    /// Check whether a name is currently blocked.
    pub fn is_blocked(&self, name: &str) -> bool {
        self.blocked.contains_key(name)
    }

    /// Sorted names of all blocked notations.
    pub fn blocked_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.blocked.keys().cloned().collect();
        names.sort();
        names
    }
}
