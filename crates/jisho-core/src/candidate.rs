// Recovered dictionary-form candidates

use crate::reason::Reason;
use crate::word_class::WordClass;

/// One sequence of grammatical layers peeled off to reach a candidate,
/// ordered innermost first: the element closest to the dictionary form
/// leads, the most recently stripped surface layer trails. Reducing
/// 踊りたくなかった to 踊る yields `[Tai, Negative, Past]`.
pub type DerivationPath = Vec<Reason>;

/// A candidate dictionary form recovered from a surface form.
///
/// Several independent rule sequences may arrive at the same
/// `(word, class)` pair; every distinct derivation path is retained in
/// `reasons` rather than collapsed to one. The unreduced input itself is
/// always a candidate, with [`WordClass::ALL`] and a single empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// The candidate dictionary form to look up.
    pub word: String,

    /// Classes this reading may belong to. Lookup must exclude dictionary
    /// entries whose part-of-speech does not intersect this set. Never empty.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub class: WordClass,

    /// Every derivation path that reaches this `(word, class)` pair,
    /// in discovery order. Display-only; has no effect on lookup.
    pub reasons: Vec<DerivationPath>,
}

impl Candidate {
    /// The identity candidate: the input itself, any class, empty path.
    pub fn identity(word: impl Into<String>) -> Candidate {
        Candidate {
            word: word.into(),
            class: WordClass::ALL,
            reasons: vec![Vec::new()],
        }
    }

    /// Structural membership test for a derivation path. Paths are
    /// compared elementwise, not by identity.
    pub fn has_path(&self, path: &[Reason]) -> bool {
        self.reasons.iter().any(|p| p.as_slice() == path)
    }

    /// True for the untouched input: no rewrite was applied.
    pub fn is_identity(&self) -> bool {
        self.class == WordClass::ALL && self.reasons.iter().any(|p| p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_candidate_shape() {
        let c = Candidate::identity("見る");
        assert_eq!(c.word, "見る");
        assert_eq!(c.class, WordClass::ALL);
        assert_eq!(c.reasons, vec![Vec::<Reason>::new()]);
        assert!(c.is_identity());
    }

    #[test]
    fn has_path_compares_structurally() {
        let c = Candidate {
            word: "踊る".to_string(),
            class: WordClass::GODAN,
            reasons: vec![vec![Reason::Tai, Reason::Negative, Reason::Past]],
        };
        // A fresh vector with the same elements must be found.
        assert!(c.has_path(&[Reason::Tai, Reason::Negative, Reason::Past]));
        assert!(!c.has_path(&[Reason::Past, Reason::Negative, Reason::Tai]));
        assert!(!c.has_path(&[]));
    }

    #[test]
    fn reduced_candidate_is_not_identity() {
        let c = Candidate {
            word: "走る".to_string(),
            class: WordClass::GODAN,
            reasons: vec![vec![Reason::Polite]],
        };
        assert!(!c.is_identity());
    }
}
