// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Runtime limits for synthesis sessions.

/// Safety limits applied by the synthesis driver.
///
/// Wire schemas arrive from untrusted peers, so an exhaustive drive is
/// capped rather than trusted to terminate on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesisLimits {
    /// Maximum number of types one session may build.
    pub max_types: usize,
}

impl SynthesisLimits {
    /// Default cap on types built per session.
    pub const DEFAULT_MAX_TYPES: usize = 10_000;

    /// Limits with an explicit type cap.
    pub fn with_max_types(max_types: usize) -> Self {
        Self { max_types }
    }
}

impl Default for SynthesisLimits {
    fn default() -> Self {
        Self {
            max_types: Self::DEFAULT_MAX_TYPES,
        }
    }
}
