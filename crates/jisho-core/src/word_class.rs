// Conjugation class bitmask

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Set of conjugation classes a word form may belong to, as a bitmask.
///
/// The unreduced input starts out as [`WordClass::ALL`] (it could be
/// anything); every suffix rewrite narrows the set to the classes the
/// reduced form can legally belong to. The numeric bit values are part
/// of the public contract: the downstream dictionary tags its entries
/// with the same numbers, and lookup filters entries whose class does
/// not intersect the candidate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WordClass(u16);

impl WordClass {
    /// Ichidan ("ru") verbs: 食べる, 見る.
    pub const ICHIDAN: WordClass = WordClass(1);
    /// Godan ("u") verbs: 走る, 飲む, 書く.
    pub const GODAN: WordClass = WordClass(2);
    /// I-adjectives: 高い. Inflected -ない and -たい forms conjugate here too.
    pub const I_ADJECTIVE: WordClass = WordClass(4);
    /// The irregular verb 来る.
    pub const KURU: WordClass = WordClass(8);
    /// する and suru-compound verbs.
    pub const SURU: WordClass = WordClass(16);

    /// The empty set. Never a valid candidate class; a chain whose class
    /// set becomes empty is a contradictory reading and is discarded.
    pub const NONE: WordClass = WordClass(0);

    /// Wildcard: every class at once, the type of an unreduced word.
    pub const ALL: WordClass =
        WordClass(1 | 2 | 4 | 8 | 16);

    /// Raw bit representation.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Build from raw bits, dropping any bit outside the defined classes.
    pub const fn from_bits_truncate(bits: u16) -> WordClass {
        WordClass(bits & WordClass::ALL.0)
    }

    /// True if no class bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if the two sets share at least one class.
    pub const fn intersects(self, other: WordClass) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every class in `other` is also in `self`.
    pub const fn contains(self, other: WordClass) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set union. `const` so rule tables can combine classes statically.
    pub const fn union(self, other: WordClass) -> WordClass {
        WordClass(self.0 | other.0)
    }

    /// Set intersection.
    pub const fn intersection(self, other: WordClass) -> WordClass {
        WordClass(self.0 & other.0)
    }
}

impl BitOr for WordClass {
    type Output = WordClass;

    fn bitor(self, rhs: WordClass) -> WordClass {
        self.union(rhs)
    }
}

impl BitOrAssign for WordClass {
    fn bitor_assign(&mut self, rhs: WordClass) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for WordClass {
    type Output = WordClass;

    fn bitand(self, rhs: WordClass) -> WordClass {
        self.intersection(rhs)
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == WordClass::ALL {
            return f.write_str("any");
        }
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (bit, name) in [
            (WordClass::ICHIDAN, "ichidan"),
            (WordClass::GODAN, "godan"),
            (WordClass::I_ADJECTIVE, "i-adjective"),
            (WordClass::KURU, "kuru"),
            (WordClass::SURU, "suru"),
        ] {
            if self.intersects(bit) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn godan_is_bit_value_two() {
        // The dictionary tags godan verbs with 2; 走る and 踊る must
        // surface with exactly this value.
        assert_eq!(WordClass::GODAN.bits(), 2);
        assert_eq!(WordClass::ICHIDAN.bits(), 1);
    }

    #[test]
    fn all_covers_every_class() {
        for class in [
            WordClass::ICHIDAN,
            WordClass::GODAN,
            WordClass::I_ADJECTIVE,
            WordClass::KURU,
            WordClass::SURU,
        ] {
            assert!(WordClass::ALL.contains(class));
        }
        assert_eq!(WordClass::ALL.bits(), 0x1f);
    }

    #[test]
    fn union_and_intersection() {
        let verbs = WordClass::ICHIDAN | WordClass::GODAN;
        assert!(verbs.intersects(WordClass::GODAN));
        assert!(!verbs.intersects(WordClass::SURU));
        assert_eq!(verbs & WordClass::GODAN, WordClass::GODAN);
        assert!((verbs & WordClass::SURU).is_empty());
    }

    #[test]
    fn from_bits_truncate_drops_undefined_bits() {
        assert_eq!(WordClass::from_bits_truncate(0xffff), WordClass::ALL);
        assert_eq!(WordClass::from_bits_truncate(2), WordClass::GODAN);
    }

    #[test]
    fn display_names() {
        assert_eq!(WordClass::ALL.to_string(), "any");
        assert_eq!(WordClass::NONE.to_string(), "none");
        assert_eq!(WordClass::GODAN.to_string(), "godan");
        assert_eq!(
            (WordClass::ICHIDAN | WordClass::GODAN).to_string(),
            "ichidan|godan"
        );
    }
}
