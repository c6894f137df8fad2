//! Public suffix rule engine.
//!
//! Splits a domain name into its public suffix (the part under which
//! independent parties can register names, e.g. `com`, `co.uk`,
//! `github.io`), the registrable second-level domain, and any subdomain
//! prefix, driven by an ordered list of suffix rules:
//! - plain rules (`com`, `co.uk`)
//! - wildcard rules (`*.ck`)
//! - exception rules (`!www.ck`)
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{get, is_valid, parse};
//!
//! let parsed = parse("a.b.example.co.uk");
//! assert_eq!(parsed.tld.as_deref(), Some("co.uk"));
//! assert_eq!(parsed.sld.as_deref(), Some("example"));
//! assert_eq!(parsed.domain.as_deref(), Some("example.co.uk"));
//! assert_eq!(parsed.subdomain.as_deref(), Some("a.b"));
//! assert!(parsed.listed);
//!
//! assert_eq!(get("www.example.COM").as_deref(), Some("example.com"));
//! assert!(is_valid("example.com"));
//! assert!(!is_valid("co.uk")); // a bare public suffix is not registrable
//! ```
//!
//! The free functions use a process-wide table built once from the bundled
//! rule snapshot. A custom list (e.g. a fresher registry snapshot) can be
//! injected instead:
//!
//! ```rust
//! use psl_engine_r::RuleTable;
//!
//! let table = RuleTable::build(["com", "co.uk"]);
//! assert_eq!(
//!     table.get("www.example.co.uk").as_deref(),
//!     Some("example.co.uk"),
//! );
//! ```
//!
//! All queries are pure and lock-free; a built table is immutable and safe
//! to share across threads.

pub mod error;
mod idn;
pub mod parse;
pub mod rules;
pub mod validate;

// Re-export commonly used items
pub use error::{ErrorKind, PslError, Result};
pub use parse::{get, is_valid, parse, ParseResult};
pub use rules::{default_table, Rule, RuleTable};
pub use validate::validate;
