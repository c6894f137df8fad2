use serde::Serialize;

use crate::error::ErrorKind;
use crate::idn::{to_ascii, ACE_PREFIX};
use crate::rules::{default_table, RuleTable};
use crate::validate::validate;

/// Outcome of parsing a single domain name.
///
/// On validation failure only `input` and `error` are populated. For a
/// suffix-only input (the domain *is* a public suffix) `tld` is set but
/// `sld`/`domain`/`subdomain` stay `None`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseResult {
    /// Original input, exactly as given.
    pub input: String,
    /// Public suffix, e.g. `com`, `gov.uk`.
    pub tld: Option<String>,
    /// Second-level domain: the label immediately left of the suffix.
    pub sld: Option<String>,
    /// Registrable domain: `sld` + `.` + `tld`.
    pub domain: Option<String>,
    /// Labels left of the registrable domain, joined with `.`.
    pub subdomain: Option<String>,
    /// True iff a rule from the table matched (not the unlisted fallback).
    pub listed: bool,
    /// Validation failure, if any.
    pub error: Option<ErrorKind>,
}

impl ParseResult {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            ..Self::default()
        }
    }
}

impl RuleTable {
    /// Parse a domain name against this rule table.
    ///
    /// The input is lowercased and one trailing dot is stripped (FQDN
    /// form), then validated; validation failures come back on
    /// [`ParseResult::error`] rather than as an `Err`. The literal
    /// top-level label `local` is treated as a non-Internet pseudo-TLD and
    /// never consulted against the table.
    pub fn parse(&self, input: &str) -> ParseResult {
        let mut parsed = ParseResult::new(input);

        let mut domain = input.to_lowercase();
        if domain.ends_with('.') {
            domain.pop();
        }

        if let Some(error) = validate(&domain) {
            parsed.error = Some(error);
            return parsed;
        }

        let mut parts: Vec<&str> = domain.split('.').collect();

        // Non-Internet TLD.
        if parts.last() == Some(&"local") {
            return parsed;
        }

        let Some(rule) = self.find_best_rule(&to_ascii(&domain)) else {
            // Unlisted tld: fall back to rightmost-label-is-the-suffix.
            if parts.len() < 2 {
                return parsed;
            }
            let (tld, sld) = match (parts.pop(), parts.pop()) {
                (Some(tld), Some(sld)) => (tld, sld),
                _ => return parsed,
            };
            parsed.domain = Some(format!("{}.{}", sld, tld));
            parsed.tld = Some(tld.to_string());
            parsed.sld = Some(sld.to_string());
            if !parts.is_empty() {
                parsed.subdomain = Some(parts.join("."));
            }
            return ace_output(parsed, &domain);
        };

        parsed.listed = true;

        // The suffix labels come from the rule itself, so a Unicode rule
        // yields a Unicode tld even for an ASCII-encoded input.
        let mut tld_parts: Vec<&str> = rule.suffix.split('.').collect();
        let keep = parts.len().saturating_sub(tld_parts.len());
        let mut private_parts = parts;
        private_parts.truncate(keep);

        // An exception rule carves the first suffix label back out as
        // registrable, e.g. `!www.ck` makes `www.ck` itself registrable.
        if rule.exception && !tld_parts.is_empty() {
            private_parts.push(tld_parts.remove(0));
        }

        parsed.tld = Some(tld_parts.join("."));

        if private_parts.is_empty() {
            return ace_output(parsed, &domain);
        }

        // A wildcard rule consumes one more label into the suffix, e.g.
        // for `*.ck` matching `www.ck` the tld becomes `www.ck`.
        if rule.wildcard {
            if let Some(label) = private_parts.pop() {
                tld_parts.insert(0, label);
                parsed.tld = Some(tld_parts.join("."));
            }
        }

        if private_parts.is_empty() {
            return ace_output(parsed, &domain);
        }

        if let Some(sld) = private_parts.pop() {
            parsed.domain = Some(format!("{}.{}", sld, tld_parts.join(".")));
            parsed.sld = Some(sld.to_string());
        }
        if !private_parts.is_empty() {
            parsed.subdomain = Some(private_parts.join("."));
        }

        ace_output(parsed, &domain)
    }

    /// Registrable domain for `domain`, or `None` if the input is empty,
    /// invalid, or exactly a public suffix.
    pub fn get(&self, domain: &str) -> Option<String> {
        if domain.is_empty() {
            return None;
        }
        self.parse(domain).domain
    }

    /// Whether `domain` is a registrable name under a listed public suffix.
    pub fn is_valid(&self, domain: &str) -> bool {
        let parsed = self.parse(domain);
        parsed.error.is_none() && parsed.listed && parsed.domain.is_some()
    }
}

/// Re-encode outputs when the input carried ASCII-compatible encoding.
///
/// Pure-Unicode input keeps Unicode output; input already in (or mixed
/// with) ACE form gets ASCII output for `domain` and `subdomain`.
fn ace_output(mut parsed: ParseResult, normalized: &str) -> ParseResult {
    if !normalized.contains(ACE_PREFIX) {
        return parsed;
    }
    if let Some(domain) = parsed.domain.take() {
        parsed.domain = Some(to_ascii(&domain));
    }
    if let Some(subdomain) = parsed.subdomain.take() {
        parsed.subdomain = Some(to_ascii(&subdomain));
    }
    parsed
}

/// Parse a domain name against the default rule table.
pub fn parse(input: &str) -> ParseResult {
    default_table().parse(input)
}

/// Registrable domain for `domain` per the default rule table.
pub fn get(domain: &str) -> Option<String> {
    default_table().get(domain)
}

/// Whether `domain` is registrable under a listed public suffix, per the
/// default rule table.
pub fn is_valid(domain: &str) -> bool {
    default_table().is_valid(domain)
}
