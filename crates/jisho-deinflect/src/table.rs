// Rule table: suffix-indexed lookup over the rewrite rules.

use std::sync::OnceLock;

use hashbrown::HashMap;
use jisho_core::WordClass;

use crate::rules::{RULES, Rule};

/// Validation errors for custom rule tables.
///
/// The built-in table satisfies all of these by construction (enforced by
/// its tests); the checks exist for tables assembled at runtime, where an
/// authoring mistake could otherwise break the engine's termination
/// argument.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A rule with an empty `from` suffix would match every word.
    #[error("rule {index} has an empty from-suffix")]
    EmptyFromSuffix { index: usize },

    /// A rewrite that grows the word allows unbounded chains.
    #[error("rule {from:?} -> {to:?} grows the word")]
    GrowingRewrite { from: String, to: String },

    /// A rule with an empty class mask can never apply (or never produce
    /// a valid candidate).
    #[error("rule {from:?} has an empty class mask")]
    EmptyClassMask { from: String },
}

/// Immutable set of rewrite rules, indexed by the final character of each
/// rule's `from` suffix.
///
/// A word can only match rules whose suffix ends in the word's own final
/// character, so one bucket lookup replaces a scan of the whole table.
/// Within a bucket, longer suffixes come first.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
    /// Final char of `from` -> indices into `rules`, longest suffix first.
    buckets: HashMap<char, Vec<usize>>,
}

impl RuleTable {
    /// The built-in Japanese rule table, constructed on first use and
    /// shared for the life of the process.
    pub fn builtin() -> &'static RuleTable {
        static BUILTIN: OnceLock<RuleTable> = OnceLock::new();
        BUILTIN.get_or_init(|| RuleTable::build(RULES.to_vec()))
    }

    /// Build a table from custom rules, validating the authoring
    /// invariants the engine relies on.
    pub fn from_rules(rules: Vec<Rule>) -> Result<RuleTable, RuleError> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.from.is_empty() {
                return Err(RuleError::EmptyFromSuffix { index });
            }
            if rule.to.chars().count() > rule.from.chars().count() {
                return Err(RuleError::GrowingRewrite {
                    from: rule.from.to_string(),
                    to: rule.to.to_string(),
                });
            }
            if rule.from_classes.is_empty() || rule.to_classes.is_empty() {
                return Err(RuleError::EmptyClassMask {
                    from: rule.from.to_string(),
                });
            }
        }
        Ok(RuleTable::build(rules))
    }

    fn build(rules: Vec<Rule>) -> RuleTable {
        let mut buckets: HashMap<char, Vec<usize>> = HashMap::new();
        for (i, rule) in rules.iter().enumerate() {
            if let Some(last) = rule.from.chars().last() {
                buckets.entry(last).or_default().push(i);
            }
        }
        for indices in buckets.values_mut() {
            indices.sort_by_key(|&i| std::cmp::Reverse(rules[i].from.chars().count()));
        }
        RuleTable { rules, buckets }
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule applicable to `word` with the given class set, paired
    /// with the rewritten word. A word matching nothing yields an empty
    /// iterator; that is not an error.
    pub fn matches<'t>(
        &'t self,
        word: &'t str,
        classes: WordClass,
    ) -> impl Iterator<Item = (&'t Rule, String)> + 't {
        let bucket = word
            .chars()
            .last()
            .and_then(|last| self.buckets.get(&last))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        bucket.iter().filter_map(move |&i| {
            let rule = &self.rules[i];
            if classes.intersects(rule.from_classes) && word.ends_with(rule.from) {
                let stem = &word[..word.len() - rule.from.len()];
                let mut reduced = String::with_capacity(stem.len() + rule.to.len());
                reduced.push_str(stem);
                reduced.push_str(rule.to);
                Some((rule, reduced))
            } else {
                None
            }
        })
    }
}
