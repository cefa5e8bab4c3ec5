//! Redundancy elimination among domain rules.
//!
//! A `DOMAIN-SUFFIX` rule matches the domain itself and every subdomain, so
//! it subsumes any narrower suffix rule and any `DOMAIN` rule inside its
//! tree. Containment is evaluated on dotted-label boundaries (the same walk
//! the downstream suffix matcher performs), never on raw string suffixes,
//! so `notexample.com` is not covered by `example.com`.
//!
//! `DOMAIN-KEYWORD` and IP rules have different match semantics and never
//! participate.

use ahash::AHashSet;

use crate::ruleset::RuleSet;
use crate::RuleType;

/// Remove rules whose effect is subsumed by a broader `DOMAIN-SUFFIX` rule.
///
/// Runs two passes: suffix self-dedup, then domain-vs-suffix dedup. Never
/// fails; empty kinds simply contribute nothing.
pub fn filter_redundant(rules: &mut RuleSet) {
    let survivors = dedup_suffixes(rules);
    drop_covered_domains(rules, &survivors);
}

/// Within `DOMAIN-SUFFIX`, drop every value that is a strict subdomain of
/// another value. Returns the surviving suffixes for the second pass.
fn dedup_suffixes(rules: &mut RuleSet) -> AHashSet<String> {
    let mut candidates: Vec<String> = rules.take(RuleType::DomainSuffix).into_iter().collect();
    // Broader rules are established first: ascending label count, then
    // byte order. Equal label counts cannot contain each other strictly.
    candidates.sort_by(|a, b| {
        label_count(a)
            .cmp(&label_count(b))
            .then_with(|| a.cmp(b))
    });

    let mut survivors: AHashSet<String> = AHashSet::with_capacity(candidates.len());
    for value in candidates {
        if label_tails(&value).any(|tail| survivors.contains(tail)) {
            log::debug!("dropping DOMAIN-SUFFIX,{value}: covered by a broader suffix");
            continue;
        }
        survivors.insert(value);
    }

    for value in &survivors {
        rules.insert(RuleType::DomainSuffix, value.clone());
    }
    survivors
}

/// Drop every `DOMAIN` value equal to, or a subdomain of, a surviving
/// `DOMAIN-SUFFIX` value.
fn drop_covered_domains(rules: &mut RuleSet, suffixes: &AHashSet<String>) {
    if suffixes.is_empty() {
        return;
    }
    for value in rules.take(RuleType::Domain) {
        let covered = suffixes.contains(value.as_str())
            || label_tails(&value).any(|tail| suffixes.contains(tail));
        if covered {
            log::debug!("dropping DOMAIN,{value}: covered by DOMAIN-SUFFIX");
            continue;
        }
        rules.insert(RuleType::Domain, value);
    }
}

/// Number of dotted labels in a domain.
fn label_count(domain: &str) -> usize {
    domain.split('.').count()
}

/// Proper dotted tails of a domain: for `a.b.com`, yields `b.com`, `com`.
fn label_tails(domain: &str) -> impl Iterator<Item = &str> {
    domain.match_indices('.').map(move |(i, _)| &domain[i + 1..])
}
