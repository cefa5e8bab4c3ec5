//! Text artifact rendering.

use crate::ruleset::RuleSet;
use crate::RuleType;

/// Render the text artifact: header, a blank separator line, then one
/// `KIND,value` line per rule.
///
/// Rules are grouped by kind in canonical order and sorted by value within
/// a kind, so re-running on identical input reproduces byte-identical rule
/// lines.
pub fn render_list(header: &str, rules: &RuleSet) -> String {
    let mut out = String::with_capacity(header.len() + 24 * rules.len());
    out.push_str(header);
    out.push('\n');
    for kind in RuleType::ALL {
        for value in rules.values(kind) {
            out.push_str(kind.as_str());
            out.push(',');
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}
