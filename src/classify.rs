//! Rule line classification.
//!
//! One raw input line is turned into a typed rule or a non-rule artifact.
//! Classification is a pure function of the line: it never consults other
//! lines or any kind-scoped state.

use ipnet::{Ipv4Net, Ipv6Net};
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::RuleType;

/// Outcome of classifying one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// A typed rule with a normalized value.
    Rule {
        /// Rule kind (for IP rules, derived from the value's shape)
        kind: RuleType,
        /// Normalized value (lower-cased unless the kind is an IP kind)
        value: String,
    },
    /// An empty or whitespace-only line.
    Blank,
    /// A `#`-prefixed comment line.
    Comment,
    /// A line that matches neither a typed rule nor the implicit-domain
    /// grammar.
    Invalid,
}

/// Typed rule line: a known kind, a `,` or whitespace separator, the value
/// (ending at whitespace or `#`), and an optional trailing comment.
static RULE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(DOMAIN|DOMAIN-KEYWORD|DOMAIN-SUFFIX|PROCESS-NAME|USER-AGENT|IP-CIDR6?|IP6-CIDR)[,\s]+([^#\s]+)(?:\s*#.*)?$",
    )
    .unwrap()
});

/// Classify one raw line.
///
/// Lines carrying no kind prefix fall back to the implicit-domain grammar
/// (dotted LDH labels with at least one dot); anything else is `Invalid`.
/// The permissive accept-any-line-as-domain behavior is deliberately not
/// supported.
pub fn classify(line: &str) -> Classified {
    let line = line.trim();

    if line.is_empty() {
        return Classified::Blank;
    }
    if line.starts_with('#') {
        return Classified::Comment;
    }

    if let Some(caps) = RULE_LINE.captures(line) {
        // The pattern only admits kinds the enumeration knows.
        let kind = match RuleType::parse(&caps[1]) {
            Some(kind) => kind,
            None => return Classified::Invalid,
        };
        let raw = &caps[2];

        if !kind.folds_case() {
            // IP rules keep the literal value but must parse; the stored
            // kind follows the value's shape, not the input label.
            return match ip_kind(raw) {
                Some(kind) => Classified::Rule {
                    kind,
                    value: raw.to_string(),
                },
                None => Classified::Invalid,
            };
        }

        return Classified::Rule {
            kind,
            value: raw.to_lowercase(),
        };
    }

    // Implicit DOMAIN fallback, validated against the domain-literal grammar.
    let lower = line.to_lowercase();
    if is_domain_literal(&lower) {
        return Classified::Rule {
            kind: RuleType::Domain,
            value: lower,
        };
    }

    Classified::Invalid
}

/// Derive the IP rule kind from the value's shape.
///
/// Accepts CIDR notation and bare addresses, IPv4 and IPv6.
fn ip_kind(value: &str) -> Option<RuleType> {
    if value.parse::<Ipv4Net>().is_ok() || value.parse::<Ipv4Addr>().is_ok() {
        return Some(RuleType::IpCidr);
    }
    if value.parse::<Ipv6Net>().is_ok() || value.parse::<Ipv6Addr>().is_ok() {
        return Some(RuleType::IpCidr6);
    }
    None
}

/// Implicit-domain grammar: dotted LDH labels (letters, digits, `-`, `_`),
/// each 1..=63 bytes, no label starting or ending with `-`, and at least
/// one dot.
fn is_domain_literal(s: &str) -> bool {
    if !s.contains('.') || s.len() > 253 {
        return false;
    }
    s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(kind: RuleType, value: &str) -> Classified {
        Classified::Rule {
            kind,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(classify(""), Classified::Blank);
        assert_eq!(classify("   "), Classified::Blank);
        assert_eq!(classify("# a comment"), Classified::Comment);
        assert_eq!(classify("  # indented comment"), Classified::Comment);
    }

    #[test]
    fn test_typed_rule_comma() {
        assert_eq!(
            classify("DOMAIN,example.com"),
            rule(RuleType::Domain, "example.com")
        );
        assert_eq!(
            classify("DOMAIN-KEYWORD,tracker"),
            rule(RuleType::DomainKeyword, "tracker")
        );
    }

    #[test]
    fn test_typed_rule_whitespace_separator() {
        assert_eq!(
            classify("DOMAIN-SUFFIX  example.com"),
            rule(RuleType::DomainSuffix, "example.com")
        );
    }

    #[test]
    fn test_kind_and_value_normalization() {
        assert_eq!(
            classify("domain-suffix, Example.COM"),
            rule(RuleType::DomainSuffix, "example.com")
        );
    }

    #[test]
    fn test_trailing_comment_stripped() {
        assert_eq!(
            classify("DOMAIN,example.com # media server"),
            rule(RuleType::Domain, "example.com")
        );
    }

    #[test]
    fn test_implicit_domain() {
        assert_eq!(classify("google.com"), rule(RuleType::Domain, "google.com"));
        assert_eq!(
            classify("Static.Example.ORG"),
            rule(RuleType::Domain, "static.example.org")
        );
    }

    #[test]
    fn test_invalid_lines() {
        assert_eq!(classify("???not-a-domain???"), Classified::Invalid);
        assert_eq!(classify("localhost"), Classified::Invalid);
        assert_eq!(classify("bad..labels.com"), Classified::Invalid);
        assert_eq!(classify("-leading.hyphen.com"), Classified::Invalid);
    }

    #[test]
    fn test_ip_cidr_validation() {
        assert_eq!(
            classify("IP-CIDR,192.168.0.0/16"),
            rule(RuleType::IpCidr, "192.168.0.0/16")
        );
        assert_eq!(classify("IP-CIDR,8.8.8.8"), rule(RuleType::IpCidr, "8.8.8.8"));
        assert_eq!(classify("IP-CIDR,not-an-ip/8"), Classified::Invalid);
    }

    #[test]
    fn test_ipv6_reclassified() {
        // The stored kind follows the value's shape regardless of the label.
        assert_eq!(
            classify("IP-CIDR,fc00::/7"),
            rule(RuleType::IpCidr6, "fc00::/7")
        );
        assert_eq!(
            classify("IP-CIDR6,2001:db8::/32"),
            rule(RuleType::IpCidr6, "2001:db8::/32")
        );
    }

    #[test]
    fn test_ip_literal_form_kept() {
        // IP values are not case-folded.
        assert_eq!(
            classify("IP-CIDR6,2001:DB8::/32"),
            rule(RuleType::IpCidr6, "2001:DB8::/32")
        );
    }
}
