//! Metadata banner generation.

use chrono::{DateTime, Utc};

use crate::ruleset::{ListMeta, RuleStats};

/// Render the metadata banner for a list artifact.
///
/// Fixed order: name, author, repository, generation timestamp (UTC, second
/// precision), one count line per kind with rules (canonical kind order),
/// then the total. Kinds with a zero count are omitted.
pub fn render_header(meta: &ListMeta, stats: &RuleStats, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# NAME: {}\n", meta.name));
    out.push_str(&format!("# AUTHOR: {}\n", meta.author));
    out.push_str(&format!("# REPO: {}\n", meta.repo));
    out.push_str(&format!(
        "# UPDATED: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    for (kind, count) in stats.iter() {
        if count > 0 {
            out.push_str(&format!("# {}: {}\n", kind, count));
        }
    }
    out.push_str(&format!("# TOTAL: {}\n", stats.total()));
    out
}
