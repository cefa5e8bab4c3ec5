//! The rule normalization engine.

use chrono::Utc;

use crate::classify::{classify, Classified};
use crate::dedup::filter_redundant;
use crate::render::{render_header, render_json, render_list};
use crate::ruleset::{ListMeta, NormalizeOptions, RuleSet, RuleStats};
use crate::Result;

/// Result of one normalization run.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Canonical text artifact (regenerated header + sorted rule lines)
    pub list_text: String,
    /// JSON rule-set artifact
    pub json_text: String,
    /// Per-kind counts in the final rule set
    pub stats: RuleStats,
    /// Lines that matched neither a typed rule nor the implicit-domain
    /// grammar
    pub invalid_lines: usize,
}

/// Engine turns raw rule-list text into the two canonical artifacts.
///
/// One invocation is fully independent: the engine owns no cross-run state
/// and never touches the filesystem, so a caller may drive it over
/// independent inputs in parallel. It never terminates the process; it
/// always returns a best-effort result plus diagnostics.
pub struct Engine {
    meta: ListMeta,
    options: NormalizeOptions,
}

impl Engine {
    /// Create an engine with the given banner configuration and options.
    pub fn new(meta: ListMeta, options: NormalizeOptions) -> Self {
        Self { meta, options }
    }

    /// Normalize one rule list.
    pub fn process(&self, input: &str) -> Result<Normalized> {
        let body = strip_metadata_block(input);

        let mut rules = RuleSet::new();
        let mut invalid_lines = 0usize;
        for line in body.lines() {
            match classify(line) {
                Classified::Rule { kind, value } => {
                    rules.insert(kind, value);
                }
                Classified::Blank | Classified::Comment => {}
                Classified::Invalid => {
                    log::warn!("skipping unparsable line: {}", line.trim());
                    invalid_lines += 1;
                }
            }
        }

        if self.options.dedup {
            filter_redundant(&mut rules);
        }

        let stats = rules.stats();
        let header = render_header(&self.meta, &stats, Utc::now());
        let list_text = render_list(&header, &rules);
        let json_text = render_json(&rules)?;

        log::debug!(
            "normalized \"{}\": {} rules, {} invalid lines",
            self.meta.name,
            stats.total(),
            invalid_lines
        );

        Ok(Normalized {
            list_text,
            json_text,
            stats,
            invalid_lines,
        })
    }
}

/// Strip a previously generated metadata block.
///
/// The block is recognized only at the very start of the input: a `# NAME:`
/// line followed by consecutive comment lines. Its contents are never
/// trusted; the engine regenerates the banner from the final rule set.
fn strip_metadata_block(input: &str) -> &str {
    if !input.starts_with("# NAME:") {
        return input;
    }
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        if line.starts_with('#') {
            offset += line.len();
        } else {
            break;
        }
    }
    &input[offset..]
}
