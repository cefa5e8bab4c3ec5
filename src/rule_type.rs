//! Rule type definitions.

use std::fmt;

/// RuleType represents the type of a rule line.
///
/// The enumeration is closed: unknown kinds are rejected at parse time
/// rather than carried through as strings. `IpCidr6` is the IPv6 sub-kind
/// of `IpCidr`; both map to the same JSON field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// Exact domain matching
    Domain,
    /// Substring domain matching
    DomainKeyword,
    /// Domain suffix matching (matches the domain itself and all subdomains)
    DomainSuffix,
    /// Client process name matching
    ProcessName,
    /// HTTP User-Agent matching
    UserAgent,
    /// IPv4 CIDR range matching
    IpCidr,
    /// IPv6 CIDR range matching
    IpCidr6,
}

impl RuleType {
    /// All rule types in canonical output order.
    ///
    /// Header count lines and list sections are emitted in this order.
    pub const ALL: [RuleType; 7] = [
        RuleType::Domain,
        RuleType::DomainKeyword,
        RuleType::DomainSuffix,
        RuleType::ProcessName,
        RuleType::UserAgent,
        RuleType::IpCidr,
        RuleType::IpCidr6,
    ];

    /// Parse a rule type from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DOMAIN" => Some(RuleType::Domain),
            "DOMAIN-KEYWORD" => Some(RuleType::DomainKeyword),
            "DOMAIN-SUFFIX" => Some(RuleType::DomainSuffix),
            "PROCESS-NAME" => Some(RuleType::ProcessName),
            "USER-AGENT" => Some(RuleType::UserAgent),
            "IP-CIDR" => Some(RuleType::IpCidr),
            "IP-CIDR6" | "IP6-CIDR" => Some(RuleType::IpCidr6),
            _ => None,
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Domain => "DOMAIN",
            RuleType::DomainKeyword => "DOMAIN-KEYWORD",
            RuleType::DomainSuffix => "DOMAIN-SUFFIX",
            RuleType::ProcessName => "PROCESS-NAME",
            RuleType::UserAgent => "USER-AGENT",
            RuleType::IpCidr => "IP-CIDR",
            RuleType::IpCidr6 => "IP-CIDR6",
        }
    }

    /// Index into canonical-order tables.
    pub fn index(&self) -> usize {
        match self {
            RuleType::Domain => 0,
            RuleType::DomainKeyword => 1,
            RuleType::DomainSuffix => 2,
            RuleType::ProcessName => 3,
            RuleType::UserAgent => 4,
            RuleType::IpCidr => 5,
            RuleType::IpCidr6 => 6,
        }
    }

    /// Whether values of this kind are lower-cased during normalization.
    ///
    /// IP kinds keep their literal form; everything else is folded.
    pub fn folds_case(&self) -> bool {
        !matches!(self, RuleType::IpCidr | RuleType::IpCidr6)
    }

    /// JSON rule-set field name for this kind.
    ///
    /// IPv4 and IPv6 CIDR rules share the `ip_cidr` field.
    pub fn json_field(&self) -> &'static str {
        match self {
            RuleType::Domain => "domain",
            RuleType::DomainKeyword => "domain_keyword",
            RuleType::DomainSuffix => "domain_suffix",
            RuleType::ProcessName => "process_name",
            RuleType::UserAgent => "user_agent",
            RuleType::IpCidr | RuleType::IpCidr6 => "ip_cidr",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
