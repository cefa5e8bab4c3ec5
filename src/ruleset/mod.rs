//! Canonical rule set model and derived statistics.

mod config;

pub use config::{ListMeta, NormalizeOptions};

use std::collections::BTreeSet;

use crate::RuleType;

const KIND_COUNT: usize = RuleType::ALL.len();

/// RuleSet is the canonical in-memory model: one ordered value set per rule
/// kind, indexed by the closed kind enumeration.
///
/// Values within a kind are unique and iterate in byte order, which is what
/// makes both serializers deterministic. A rule set is built fresh per
/// processing run and discarded after serialization.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    sets: [BTreeSet<String>; KIND_COUNT],
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a normalized value. Duplicates collapse silently; returns
    /// whether the value was newly added.
    pub fn insert(&mut self, kind: RuleType, value: impl Into<String>) -> bool {
        self.sets[kind.index()].insert(value.into())
    }

    /// Check whether a value is present under a kind.
    pub fn contains(&self, kind: RuleType, value: &str) -> bool {
        self.sets[kind.index()].contains(value)
    }

    /// Values of one kind, in byte order.
    pub fn values(&self, kind: RuleType) -> impl Iterator<Item = &str> {
        self.sets[kind.index()].iter().map(String::as_str)
    }

    /// Take ownership of one kind's value set, leaving it empty.
    pub fn take(&mut self, kind: RuleType) -> BTreeSet<String> {
        std::mem::take(&mut self.sets[kind.index()])
    }

    /// Number of values under one kind.
    pub fn count(&self, kind: RuleType) -> usize {
        self.sets[kind.index()].len()
    }

    /// Total number of rules across all kinds.
    pub fn len(&self) -> usize {
        self.sets.iter().map(BTreeSet::len).sum()
    }

    /// Check whether the rule set holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(BTreeSet::is_empty)
    }

    /// Derive per-kind counts from the current contents.
    pub fn stats(&self) -> RuleStats {
        let mut counts = [0usize; KIND_COUNT];
        for kind in RuleType::ALL {
            counts[kind.index()] = self.count(kind);
        }
        RuleStats { counts }
    }
}

/// Per-kind rule counts plus total, derived from a [`RuleSet`].
///
/// Purely presentational: recomputed every run, never stored independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleStats {
    counts: [usize; KIND_COUNT],
}

impl RuleStats {
    /// Count for one kind.
    pub fn get(&self, kind: RuleType) -> usize {
        self.counts[kind.index()]
    }

    /// Sum of all per-kind counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(kind, count)` pairs in canonical kind order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleType, usize)> + '_ {
        RuleType::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}
