//! Rulenorm - canonical rule-list normalization.
//!
//! This crate normalizes human-maintained domain/IP rule lists (Surge-style
//! `.list` files) into two synchronized artifacts: an annotated,
//! deterministically sorted text file, and a sing-box source-format JSON
//! rule set for a downstream matching engine.
//!
//! # Features
//!
//! - **Line classification**: typed `KIND,value` rules, implicit bare-domain
//!   lines, comments, and a strict invalid-line policy
//! - **Suffix subsumption**: rules covered by a broader `DOMAIN-SUFFIX` rule
//!   are removed on dotted-label boundaries, never raw string suffixes
//! - **Deterministic output**: canonical kind order, byte-ordered values,
//!   byte-identical rule lines across runs
//! - **Dual serialization**: annotated text list and versioned JSON with a
//!   lossless round-trip parser
//!
//! # Quick Start
//!
//! ```ignore
//! use rulenorm::{Engine, ListMeta, NormalizeOptions};
//!
//! let engine = Engine::new(
//!     ListMeta::new("Emby", "KuGouGo", "https://github.com/KuGouGo/Rules"),
//!     NormalizeOptions::default(),
//! );
//!
//! let out = engine.process("DOMAIN-SUFFIX,example.com\nDOMAIN,sub.example.com\n")?;
//! print!("{}", out.list_text);   // header + "DOMAIN-SUFFIX,example.com"
//! print!("{}", out.json_text);   // {"version": 1, "rules": [...]}
//! ```
//!
//! # Pipeline
//!
//! Raw text → line classifier → rule set → redundancy filter → {list
//! serializer, JSON serializer}. Every stage is a pure in-memory transform;
//! file handling belongs to the caller (see the `rulenorm-fmt` binary).

mod classify;
mod dedup;
mod engine;
mod error;
mod rule_type;

pub mod render;
pub mod ruleset;

// Re-export core types
pub use classify::{classify, Classified};
pub use dedup::filter_redundant;
pub use engine::{Engine, Normalized};
pub use error::{Error, Result};
pub use rule_type::RuleType;

// Re-export ruleset and serializer types
pub use render::{parse_json, render_json, FORMAT_VERSION};
pub use ruleset::{ListMeta, NormalizeOptions, RuleSet, RuleStats};
