use std::fs;
use std::path::Path;

use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, trace};

use crate::error::{PslError, Result};
use crate::idn::to_ascii;

/// A single public-suffix rule.
///
/// Rules come in three shapes: plain suffixes (`com`, `co.uk`), wildcards
/// (`*.ck`) and exceptions (`!www.ck`). A rule is never both wildcard and
/// exception. Rule syntax is not validated; a malformed entry simply never
/// matches anything.
#[derive(Debug)]
pub struct Rule {
    /// Original rule text, e.g. `*.ck`, `!www.ck`, `co.uk`.
    pub raw: String,
    /// `raw` with the leading `*.` or `!` stripped.
    pub suffix: String,
    /// True if `raw` starts with `*`.
    pub wildcard: bool,
    /// True if `raw` starts with `!`.
    pub exception: bool,
    ascii_suffix: OnceCell<String>,
}

impl Rule {
    fn new(raw: String) -> Self {
        let suffix = raw
            .strip_prefix("*.")
            .or_else(|| raw.strip_prefix('!'))
            .unwrap_or(&raw)
            .to_string();
        let wildcard = raw.starts_with('*');
        let exception = raw.starts_with('!');
        Self {
            raw,
            suffix,
            wildcard,
            exception,
            ascii_suffix: OnceCell::new(),
        }
    }

    /// ASCII-compatible encoding of the suffix, computed on first use.
    ///
    /// `suffix` never changes, so recomputing under concurrent first use is
    /// idempotent and the memoization is safe to share across threads.
    pub fn ascii_suffix(&self) -> &str {
        self.ascii_suffix.get_or_init(|| to_ascii(&self.suffix))
    }
}

/// Ordered, immutable set of public-suffix rules.
///
/// Built once from an externally supplied rule list and queried read-only
/// for the process lifetime.
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table from an ordered sequence of rule strings.
    ///
    /// Each string is taken as exactly one rule. Construction never fails:
    /// the list is a trusted, pre-vetted snapshot and malformed entries are
    /// left in place to silently never match.
    pub fn build<I, S>(rule_strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules: Vec<Rule> = rule_strings
            .into_iter()
            .map(|s| Rule::new(s.into()))
            .collect();
        debug!(rules = rules.len(), "rule table built");
        Self { rules }
    }

    /// Build a table from a JSON array of rule strings.
    pub fn from_json(text: &str) -> Result<Self> {
        let rule_strings: Vec<String> = serde_json::from_str(text)?;
        Ok(Self::build(rule_strings))
    }

    /// Build a table from a JSON rule-list snapshot on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| PslError::RuleListRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let table = Self::from_json(&text)?;
        debug!(path = %path.display(), rules = table.len(), "rule list loaded");
        Ok(table)
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the best rule for an ASCII-encoded domain.
    ///
    /// A rule matches when the domain equals its ASCII suffix or ends with
    /// `"." + suffix`. Among all matching rules the *last* one in table
    /// order wins. That is the reference tie-break; real lists contain
    /// overlapping entries where table order matters, so this must not be
    /// "optimized" into longest-suffix-wins.
    pub fn find_best_rule(&self, ascii_domain: &str) -> Option<&Rule> {
        let mut best = None;
        for rule in &self.rules {
            let suffix = rule.ascii_suffix();
            let matched = ascii_domain == suffix
                || ascii_domain
                    .strip_suffix(suffix)
                    .is_some_and(|head| head.ends_with('.'));
            if matched {
                best = Some(rule);
            }
        }
        if let Some(rule) = best {
            trace!(domain = ascii_domain, rule = %rule.raw, "rule matched");
        }
        best
    }
}

/// The process-wide rule table, built lazily from the bundled snapshot.
///
/// The snapshot is produced by the out-of-band list-refresh tooling; this
/// crate only consumes it.
pub fn default_table() -> &'static RuleTable {
    static DEFAULT_TABLE: Lazy<RuleTable> = Lazy::new(|| {
        RuleTable::from_json(include_str!("../data/rules.json"))
            .expect("bundled data/rules.json is invalid")
    });
    &DEFAULT_TABLE
}
