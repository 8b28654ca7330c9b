// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Synthesis driver: builds pending notations in dependency order.
//!
//! One [`SynthesisSession`] covers one deserialization attempt: its own
//! ledger, its own registry, nothing shared with concurrent sessions.
//! The driver repeatedly takes a notation whose dependencies are all
//! satisfied, invokes the carpenter, registers the result, and cascades
//! the resolution to blocked dependents, possibly unlocking further
//! builds. Resolution can fan out: promoting a dependent may discover
//! new notations that re-enter the same queue being drained, so the
//! list of names to notify is detached from the ledger before any
//! promotion mutates it.
//!
//! No rollback: after an error the registry keeps everything built up
//! to that point, and retrying requires a fresh session.

use crate::carpenter::{
    Carpenter, DependencyLedger, RecordCarpenter, SynthesisError, TypeRegistry,
};
use crate::config::SynthesisLimits;
use crate::schema::TypeNotation;

/// Result of elaborating a promoted notation.
pub struct Elaboration {
    /// The notation to feed back, possibly fuller than the stored one.
    pub notation: TypeNotation,
    /// Further notations discovered during elaboration.
    pub discovered: Vec<TypeNotation>,
}

impl Elaboration {
    /// Elaboration that reuses a notation unchanged.
    pub fn reuse(notation: TypeNotation) -> Self {
        Self {
            notation,
            discovered: Vec::new(),
        }
    }
}

/// Hook invoked when a blocked notation's last dependency clears.
///
/// The upstream schema layer can substitute a fully-formed notation for
/// the stored one and surface additional notations found along the way;
/// everything returned is fed back through dependency classification
/// and may land in either the pending queue or the blocked map.
pub trait SchemaSource {
    fn elaborate(&mut self, notation: TypeNotation, registry: &TypeRegistry) -> Elaboration;
}

/// Source that reuses every stored notation verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughSource;

impl SchemaSource for PassthroughSource {
    fn elaborate(&mut self, notation: TypeNotation, _registry: &TypeRegistry) -> Elaboration {
        Elaboration::reuse(notation)
    }
}

/// What a single driving step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// One notation was built and registered under this name.
    Built(String),
    /// The pending queue was empty; nothing was done.
    Idle,
}

/// One synthesis session: ledger, registry, carpenter and limits.
#[derive(Debug)]
pub struct SynthesisSession<C = RecordCarpenter, S = PassthroughSource> {
    ledger: DependencyLedger,
    registry: TypeRegistry,
    carpenter: C,
    source: S,
    limits: SynthesisLimits,
    built: usize,
}

impl SynthesisSession {
    /// Create a session with the default carpenter, passthrough source
    /// and default limits.
    pub fn new() -> Self {
        Self::with_parts(
            RecordCarpenter,
            PassthroughSource,
            SynthesisLimits::default(),
        )
    }

    /// Create a default session with explicit limits.
    pub fn with_limits(limits: SynthesisLimits) -> Self {
        Self::with_parts(RecordCarpenter, PassthroughSource, limits)
    }
}

impl Default for SynthesisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Carpenter, S: SchemaSource> SynthesisSession<C, S> {
    /// Create a session from explicit parts.
    pub fn with_parts(carpenter: C, source: S, limits: SynthesisLimits) -> Self {
        Self {
            ledger: DependencyLedger::new(),
            registry: TypeRegistry::new(),
            carpenter,
            source,
            limits,
            built: 0,
        }
    }

    /// Register a notation for synthesis.
    ///
    /// Named references not yet in the registry become recorded
    /// dependencies, one unit per occurrence; a notation with none goes
    /// straight to the pending queue. This is the entry point the
    /// envelope extraction layer drives while walking a payload's
    /// embedded schema.
    pub fn enqueue(&mut self, notation: TypeNotation) {
        let unresolved: Vec<String> = notation
            .named_refs()
            .filter(|name| !self.registry.contains(name))
            .map(str::to_string)
            .collect();
        if unresolved.is_empty() {
            self.ledger.submit(notation);
        } else {
            let dependent = notation.name.clone();
            for blocker in &unresolved {
                self.ledger.record_dependency(&dependent, blocker, &notation);
            }
        }
    }

    /// Build one resolved notation and cascade the resolution.
    ///
    /// The carpenter materializes the notation and the result is
    /// registered under its name. Every dependent blocked on that name
    /// has one dependency unit cleared; dependents whose outstanding
    /// set empties are promoted through the schema source and fed back
    /// into the ledger.
    pub fn resolve_one(&mut self, notation: TypeNotation) -> Result<(), SynthesisError> {
        let name = notation.name.clone();
        let ty = self.carpenter.build(&notation, &self.registry)?;
        self.registry.register(ty)?;
        self.built += 1;
        log::debug!(
            "[SYNTH] built type='{}' ({} registered, {} pending, {} blocked)",
            name,
            self.registry.len(),
            self.ledger.len(),
            self.ledger.blocked_len()
        );

        let Some(waiters) = self.ledger.take_dependents(&name) else {
            return Ok(());
        };
        for dependent in waiters {
            if let Some(promoted) = self.ledger.satisfy(&dependent, &name)? {
                log::debug!("[SYNTH] promote type='{}'", promoted.name);
                let Elaboration {
                    notation,
                    discovered,
                } = self.source.elaborate(promoted, &self.registry);
                self.enqueue(notation);
                for extra in discovered {
                    self.enqueue(extra);
                }
            }
        }
        Ok(())
    }

    /// Drive the session until nothing is pending.
    ///
    /// Draining an already-empty session is a no-op. If the queue
    /// empties while notations are still blocked, the graph contains a
    /// cycle or a dependency that was never supplied, and the drive
    /// fails instead of spinning.
    pub fn drain(&mut self) -> Result<(), SynthesisError> {
        while let Some(notation) = self.ledger.pop_pending() {
            self.check_budget()?;
            self.resolve_one(notation)?;
        }
        if self.ledger.blocked_len() != 0 {
            return Err(SynthesisError::UnresolvableGraph {
                blocked: self.ledger.blocked_names(),
            });
        }
        Ok(())
    }

    /// Drive exactly one build, or report [`StepOutcome::Idle`] if the
    /// pending queue is empty. State persists across calls.
    pub fn step(&mut self) -> Result<StepOutcome, SynthesisError> {
        let Some(notation) = self.ledger.pop_pending() else {
            return Ok(StepOutcome::Idle);
        };
        self.check_budget()?;
        let name = notation.name.clone();
        self.resolve_one(notation)?;
        Ok(StepOutcome::Built(name))
    }

    fn check_budget(&self) -> Result<(), SynthesisError> {
        if self.built >= self.limits.max_types {
            return Err(SynthesisError::LimitExceeded {
                built: self.built,
                limit: self.limits.max_types,
            });
        }
        Ok(())
    }

    /// Synthesized types registered so far.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Dependency bookkeeping, for progress observation.
    pub fn ledger(&self) -> &DependencyLedger {
        &self.ledger
    }

    /// Consume the session, keeping only the registry.
    pub fn into_registry(self) -> TypeRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NotationBuilder, PrimitiveKind};

    fn amount() -> TypeNotation {
        NotationBuilder::new("Amount")
            .field("quantity", PrimitiveKind::U64)
            .string_field("currency")
            .build()
    }

    fn transfer() -> TypeNotation {
        NotationBuilder::new("Transfer")
            .named_field("amount", "Amount")
            .string_field("memo")
            .build()
    }

    #[test]
    fn test_drain_empty_session_is_noop() {
        let mut session = SynthesisSession::new();
        session.drain().expect("empty drain");
        assert!(session.registry().is_empty());
    }

    #[test]
    fn test_dependent_enqueued_before_dependency() {
        let mut session = SynthesisSession::new();
        session.enqueue(transfer());
        session.enqueue(amount());
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.ledger().blocked_len(), 1);

        session.drain().expect("drain");
        assert_eq!(session.registry().len(), 2);
        assert!(session.registry().contains("Transfer"));
        assert!(session.ledger().is_empty());
        assert_eq!(session.ledger().blocked_len(), 0);
    }

    #[test]
    fn test_enqueue_after_dependency_built_goes_pending() {
        let mut session = SynthesisSession::new();
        session.enqueue(amount());
        session.drain().expect("drain");

        session.enqueue(transfer());
        assert_eq!(session.ledger().len(), 1, "Amount already built");
        session.drain().expect("drain");
        assert!(session.registry().contains("Transfer"));
    }

    #[test]
    fn test_step_reports_build_order() {
        let mut session = SynthesisSession::new();
        session.enqueue(transfer());
        session.enqueue(amount());

        assert_eq!(
            session.step().expect("step"),
            StepOutcome::Built("Amount".to_string())
        );
        assert_eq!(
            session.step().expect("step"),
            StepOutcome::Built("Transfer".to_string())
        );
        assert_eq!(session.step().expect("step"), StepOutcome::Idle);
        assert_eq!(session.step().expect("step"), StepOutcome::Idle);
    }

    #[test]
    fn test_cycle_detected() {
        let mut session = SynthesisSession::new();
        session.enqueue(NotationBuilder::new("A").named_field("b", "B").build());
        session.enqueue(NotationBuilder::new("B").named_field("a", "A").build());

        let err = session.drain().unwrap_err();
        match err {
            SynthesisError::UnresolvableGraph { blocked } => {
                assert_eq!(blocked, vec!["A", "B"]);
            }
            other => panic!("expected unresolvable graph, got {:?}", other),
        }
    }

    #[test]
    fn test_budget_enforced() {
        let mut session = SynthesisSession::with_limits(SynthesisLimits::with_max_types(1));
        session.enqueue(amount());
        session.enqueue(
            NotationBuilder::new("Party")
                .field("key", PrimitiveKind::Bytes)
                .build(),
        );

        let err = session.drain().unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::LimitExceeded { built: 1, limit: 1 }
        ));
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn test_into_registry() {
        let mut session = SynthesisSession::new();
        session.enqueue(amount());
        session.drain().expect("drain");

        let registry = session.into_registry();
        assert!(registry.contains("Amount"));
    }
}
