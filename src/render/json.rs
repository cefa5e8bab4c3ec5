//! JSON rule-set artifact (sing-box source format).
//!
//! The document is the grouped form: one rule object mapping each present
//! kind to its sorted value array. [`parse_json`] is the exact inverse of
//! [`render_json`], which is what makes the artifact round-trip testable.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ruleset::RuleSet;
use crate::RuleType;

/// Rule-set document format version.
pub const FORMAT_VERSION: u32 = 1;

/// Top-level rule-set document.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleSetDocument {
    /// Format version marker
    pub version: u32,
    /// Rule groups (a normalized document holds at most one)
    pub rules: Vec<RuleGroup>,
}

/// One grouped rule object.
///
/// Field order is the canonical kind order; kinds with no rules are omitted
/// entirely, never emitted as empty arrays. IPv4 and IPv6 CIDR values share
/// the `ip_cidr` field.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RuleGroup {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_keyword: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_suffix: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub process_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_agent: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_cidr: Vec<String>,
}

impl RuleGroup {
    fn from_rules(rules: &RuleSet) -> Self {
        let collect =
            |kind: RuleType| rules.values(kind).map(str::to_owned).collect::<Vec<_>>();

        let mut ip_cidr = collect(RuleType::IpCidr);
        ip_cidr.extend(rules.values(RuleType::IpCidr6).map(str::to_owned));
        ip_cidr.sort();

        Self {
            domain: collect(RuleType::Domain),
            domain_keyword: collect(RuleType::DomainKeyword),
            domain_suffix: collect(RuleType::DomainSuffix),
            process_name: collect(RuleType::ProcessName),
            user_agent: collect(RuleType::UserAgent),
            ip_cidr,
        }
    }

    fn is_empty(&self) -> bool {
        self.domain.is_empty()
            && self.domain_keyword.is_empty()
            && self.domain_suffix.is_empty()
            && self.process_name.is_empty()
            && self.user_agent.is_empty()
            && self.ip_cidr.is_empty()
    }
}

/// Render the JSON artifact, pretty-printed and newline-terminated.
pub fn render_json(rules: &RuleSet) -> Result<String> {
    let group = RuleGroup::from_rules(rules);
    let doc = RuleSetDocument {
        version: FORMAT_VERSION,
        rules: if group.is_empty() { Vec::new() } else { vec![group] },
    };
    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    Ok(text)
}

/// Parse a JSON artifact back into a [`RuleSet`].
///
/// Rejects unknown format versions. IPv6-shaped `ip_cidr` entries are
/// restored under `IP-CIDR6`, undoing the merge [`render_json`] performs.
pub fn parse_json(text: &str) -> Result<RuleSet> {
    let doc: RuleSetDocument = serde_json::from_str(text)?;
    if doc.version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion(doc.version));
    }

    let mut rules = RuleSet::new();
    for group in doc.rules {
        for v in group.domain {
            rules.insert(RuleType::Domain, v);
        }
        for v in group.domain_keyword {
            rules.insert(RuleType::DomainKeyword, v);
        }
        for v in group.domain_suffix {
            rules.insert(RuleType::DomainSuffix, v);
        }
        for v in group.process_name {
            rules.insert(RuleType::ProcessName, v);
        }
        for v in group.user_agent {
            rules.insert(RuleType::UserAgent, v);
        }
        for v in group.ip_cidr {
            let kind = if v.contains(':') {
                RuleType::IpCidr6
            } else {
                RuleType::IpCidr
            };
            rules.insert(kind, v);
        }
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_shape() {
        let mut rules = RuleSet::new();
        rules.insert(RuleType::Domain, "a.com");
        rules.insert(RuleType::DomainSuffix, "b.com");

        let text = render_json(&rules).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["rules"].as_array().unwrap().len(), 1);
        assert_eq!(value["rules"][0]["domain"][0], "a.com");
        assert_eq!(value["rules"][0]["domain_suffix"][0], "b.com");
    }

    #[test]
    fn test_absent_kinds_omitted() {
        let mut rules = RuleSet::new();
        rules.insert(RuleType::Domain, "a.com");

        let text = render_json(&rules).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let group = value["rules"][0].as_object().unwrap();

        assert!(group.contains_key("domain"));
        assert!(!group.contains_key("domain_suffix"));
        assert!(!group.contains_key("ip_cidr"));
    }

    #[test]
    fn test_empty_rule_set_yields_empty_rules_array() {
        let text = render_json(&RuleSet::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rules"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_ip_cidr_merged_and_sorted() {
        let mut rules = RuleSet::new();
        rules.insert(RuleType::IpCidr6, "fc00::/7");
        rules.insert(RuleType::IpCidr, "10.0.0.0/8");

        let text = render_json(&rules).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let cidrs = value["rules"][0]["ip_cidr"].as_array().unwrap();
        assert_eq!(cidrs[0], "10.0.0.0/8");
        assert_eq!(cidrs[1], "fc00::/7");
    }

    #[test]
    fn test_round_trip() {
        let mut rules = RuleSet::new();
        rules.insert(RuleType::Domain, "a.com");
        rules.insert(RuleType::DomainKeyword, "tracker");
        rules.insert(RuleType::DomainSuffix, "b.com");
        rules.insert(RuleType::ProcessName, "mpv");
        rules.insert(RuleType::UserAgent, "agent*");
        rules.insert(RuleType::IpCidr, "10.0.0.0/8");
        rules.insert(RuleType::IpCidr6, "fc00::/7");

        let text = render_json(&rules).unwrap();
        let parsed = parse_json(&text).unwrap();

        for kind in RuleType::ALL {
            let before: Vec<&str> = rules.values(kind).collect();
            let after: Vec<&str> = parsed.values(kind).collect();
            assert_eq!(before, after, "kind {kind} did not round-trip");
        }
    }

    #[test]
    fn test_unknown_version_rejected() {
        let text = r#"{"version": 99, "rules": []}"#;
        assert!(matches!(
            parse_json(text),
            Err(Error::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(parse_json("not json"), Err(Error::Json(_))));
    }
}
