// Reduction engine: breadth-first search over the rule table.
//
// The search runs on an explicit work-list rather than the call stack, so
// stack usage is independent of derivation-path length. Each (word, class)
// pair is expanded exactly once; later arrivals at an already-seen pair
// only contribute their derivation path. Word length never increases along
// a chain (the table guarantees non-growing rewrites), which together with
// the visited-pair guard makes the search finite.

use std::collections::VecDeque;

use hashbrown::HashMap;
use jisho_core::{Candidate, DerivationPath, WordClass};

use crate::table::RuleTable;

/// Upper bound on work-list expansions per call. The built-in table can
/// never reach it; it exists so that a hand-authored table with a cycle of
/// equal-length rewrites still terminates.
pub const MAX_EXPANSIONS: usize = 10_000;

/// Accumulates candidates in discovery order, merging derivation paths
/// that arrive at an already-known (word, class) pair.
struct CandidateSet {
    candidates: Vec<Candidate>,
    index: HashMap<(String, WordClass), usize>,
}

impl CandidateSet {
    fn new() -> CandidateSet {
        CandidateSet {
            candidates: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn position(&self, word: &str, class: WordClass) -> Option<usize> {
        self.index.get(&(word.to_string(), class)).copied()
    }

    fn insert_new(&mut self, candidate: Candidate) {
        self.index.insert(
            (candidate.word.clone(), candidate.class),
            self.candidates.len(),
        );
        self.candidates.push(candidate);
    }

    /// Add one more derivation path to an existing candidate. Paths are
    /// compared structurally; an already-recorded path is not duplicated.
    fn merge_path(&mut self, position: usize, path: DerivationPath) {
        let candidate = &mut self.candidates[position];
        if !candidate.has_path(&path) {
            candidate.reasons.push(path);
        }
    }

    fn into_vec(self) -> Vec<Candidate> {
        self.candidates
    }
}

/// The deinflection engine.
///
/// Immutable after construction and shared freely: `deinflect` is a pure
/// function of its input, safe to call concurrently from any number of
/// threads without synchronization.
pub struct Deinflector<'t> {
    table: &'t RuleTable,
}

impl Deinflector<'static> {
    /// Engine over the built-in Japanese rule table.
    pub fn new() -> Deinflector<'static> {
        Deinflector {
            table: RuleTable::builtin(),
        }
    }
}

impl Default for Deinflector<'static> {
    fn default() -> Self {
        Deinflector::new()
    }
}

impl<'t> Deinflector<'t> {
    /// Engine over a custom rule table (see [`RuleTable::from_rules`]).
    pub fn with_table(table: &'t RuleTable) -> Deinflector<'t> {
        Deinflector { table }
    }

    /// Recover every plausible dictionary form of a surface-form word.
    ///
    /// Returns candidates in discovery order: the identity candidate (the
    /// input itself, any class, empty derivation path) first, then
    /// breadth-first by number of layers peeled. A word matching no rule
    /// returns just the identity candidate; the empty string returns an
    /// empty vector. This never fails for any input.
    pub fn deinflect(&self, word: &str) -> Vec<Candidate> {
        if word.is_empty() {
            return Vec::new();
        }

        let mut out = CandidateSet::new();
        out.insert_new(Candidate::identity(word));

        let mut queue: VecDeque<(String, WordClass, DerivationPath)> = VecDeque::new();
        queue.push_back((word.to_string(), WordClass::ALL, Vec::new()));

        let mut expansions = 0usize;
        while let Some((current, classes, path)) = queue.pop_front() {
            expansions += 1;
            if expansions > MAX_EXPANSIONS {
                break;
            }

            for (rule, reduced) in self.table.matches(&current, classes) {
                // The rule's output classes are authoritative for the
                // reduced form; an empty set would be a contradictory
                // reading, but the table validation already forbids it.
                let reduced_classes = rule.to_classes;
                if reduced_classes.is_empty() {
                    continue;
                }

                // Derivation paths read innermost-first: the layer just
                // stripped is the most superficial one, so it goes last.
                let mut next_path = Vec::with_capacity(path.len() + 1);
                next_path.push(rule.reason);
                next_path.extend_from_slice(&path);

                match out.position(&reduced, reduced_classes) {
                    Some(position) => out.merge_path(position, next_path),
                    None => {
                        out.insert_new(Candidate {
                            word: reduced.clone(),
                            class: reduced_classes,
                            reasons: vec![next_path.clone()],
                        });
                        queue.push_back((reduced, reduced_classes, next_path));
                    }
                }
            }
        }

        out.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;
    use jisho_core::Reason;

    fn rule(
        from: &'static str,
        to: &'static str,
        from_classes: WordClass,
        to_classes: WordClass,
        reason: Reason,
    ) -> Rule {
        Rule {
            from,
            to,
            from_classes,
            to_classes,
            reason,
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(Deinflector::new().deinflect("").is_empty());
    }

    #[test]
    fn unmatched_word_yields_identity_only() {
        let result = Deinflector::new().deinflect("パン");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].word, "パン");
        assert_eq!(result[0].class, WordClass::ALL);
        assert_eq!(result[0].reasons, vec![Vec::<Reason>::new()]);
    }

    #[test]
    fn identity_comes_first() {
        let result = Deinflector::new().deinflect("走ります");
        assert!(result[0].is_identity());
        assert_eq!(result[0].word, "走ります");
    }

    #[test]
    fn distinct_reasons_to_same_pair_are_merged() {
        let table = RuleTable::from_rules(vec![
            rule("た", "る", WordClass::ALL, WordClass::ICHIDAN, Reason::Past),
            rule(
                "た",
                "る",
                WordClass::ALL,
                WordClass::ICHIDAN,
                Reason::Conditional,
            ),
        ])
        .unwrap();
        let result = Deinflector::with_table(&table).deinflect("見た");

        let matches: Vec<_> = result.iter().filter(|c| c.word == "見る").collect();
        assert_eq!(matches.len(), 1, "one candidate per (word, class) pair");
        assert!(matches[0].has_path(&[Reason::Past]));
        assert!(matches[0].has_path(&[Reason::Conditional]));
    }

    #[test]
    fn identical_paths_are_not_duplicated() {
        // Two copies of the same rewrite discover the same path twice.
        let table = RuleTable::from_rules(vec![
            rule("た", "る", WordClass::ALL, WordClass::ICHIDAN, Reason::Past),
            rule("た", "る", WordClass::ALL, WordClass::ICHIDAN, Reason::Past),
        ])
        .unwrap();
        let result = Deinflector::with_table(&table).deinflect("見た");

        let candidate = result.iter().find(|c| c.word == "見る").unwrap();
        assert_eq!(candidate.reasons.len(), 1);
    }

    #[test]
    fn contradictory_class_chain_is_discarded() {
        // The second rewrite requires a godan word, but the first rewrite
        // narrows the class set to ichidan only.
        let table = RuleTable::from_rules(vec![
            rule("ば", "る", WordClass::ALL, WordClass::ICHIDAN, Reason::Provisional),
            rule("る", "む", WordClass::GODAN, WordClass::GODAN, Reason::Past),
        ])
        .unwrap();
        let result = Deinflector::with_table(&table).deinflect("飲ば");

        assert!(result.iter().any(|c| c.word == "飲る"));
        assert!(!result.iter().any(|c| c.word == "飲む"));
    }

    #[test]
    fn equal_length_rewrite_cycle_terminates() {
        let table = RuleTable::from_rules(vec![
            rule("あ", "い", WordClass::ALL, WordClass::ALL, Reason::Past),
            rule("い", "あ", WordClass::ALL, WordClass::ALL, Reason::Past),
        ])
        .unwrap();
        // The visited-pair guard stops the あ <-> い oscillation.
        let result = Deinflector::with_table(&table).deinflect("ああ");
        assert!(result.len() <= 4);
    }

    #[test]
    fn deterministic_across_calls() {
        let engine = Deinflector::new();
        let first = engine.deinflect("踊りたくなかった");
        let second = engine.deinflect("踊りたくなかった");
        assert_eq!(first, second);
    }
}
