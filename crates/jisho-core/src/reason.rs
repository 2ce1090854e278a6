// Grammatical operations undone by suffix rewrites

use std::fmt;

/// A grammatical layer that a single suffix rewrite peels off.
///
/// Each rule in the table undoes exactly one of these. The engine
/// accumulates them into derivation paths so the UI can explain how a
/// surface form relates to the dictionary form it matched
/// ("-tai < negative < past").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reason {
    /// Polite non-past: ます.
    Polite,
    /// Polite negative: ません.
    PoliteNegative,
    /// Polite past: ました.
    PolitePast,
    /// Polite past negative: ませんでした.
    PolitePastNegative,
    /// Polite volitional: ましょう.
    PoliteVolitional,
    /// Plain negative: ない.
    Negative,
    /// Plain past: た / った / んだ.
    Past,
    /// Te-form: て / って / んで.
    Te,
    /// Desiderative: たい.
    Tai,
    /// Potential: 書ける, 飲める.
    Potential,
    /// Ichidan られる, ambiguous between potential and passive.
    PotentialOrPassive,
    /// Passive: 書かれる.
    Passive,
    /// Causative: 書かせる.
    Causative,
    /// Causative passive: 書かされる, 食べさせられる.
    CausativePassive,
    /// Volitional: 書こう, 食べよう.
    Volitional,
    /// Imperative: 書け, 食べろ.
    Imperative,
    /// Negative imperative: dictionary form + な.
    ImperativeNegative,
    /// Progressive ている and the contracted てる.
    Progressive,
    /// -たら conditional.
    Conditional,
    /// -ば provisional.
    Provisional,
    /// Archaic/formal negative: ず.
    Zu,
    /// Bare masu stem: 走り.
    MasuStem,
    /// Adjective adverbial: 高く.
    Adverbial,
    /// Adjective nominalizer: 高さ.
    NounSa,
    /// Appearance: 降りそう, 高そう.
    Sou,
    /// Excess: 食べすぎる, 高すぎる.
    Sugiru,
}

impl Reason {
    /// Conventional English gloss, as shown in dictionary popups.
    pub const fn gloss(self) -> &'static str {
        match self {
            Reason::Polite => "polite",
            Reason::PoliteNegative => "polite negative",
            Reason::PolitePast => "polite past",
            Reason::PolitePastNegative => "polite past negative",
            Reason::PoliteVolitional => "polite volitional",
            Reason::Negative => "negative",
            Reason::Past => "past",
            Reason::Te => "te-form",
            Reason::Tai => "-tai",
            Reason::Potential => "potential",
            Reason::PotentialOrPassive => "potential or passive",
            Reason::Passive => "passive",
            Reason::Causative => "causative",
            Reason::CausativePassive => "causative passive",
            Reason::Volitional => "volitional",
            Reason::Imperative => "imperative",
            Reason::ImperativeNegative => "imperative negative",
            Reason::Progressive => "progressive",
            Reason::Conditional => "-tara",
            Reason::Provisional => "-ba",
            Reason::Zu => "-zu",
            Reason::MasuStem => "masu stem",
            Reason::Adverbial => "adv",
            Reason::NounSa => "noun",
            Reason::Sou => "-sou",
            Reason::Sugiru => "-sugiru",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gloss())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_equality() {
        assert_eq!(Reason::Polite, Reason::Polite);
        assert_ne!(Reason::Past, Reason::PolitePast);
    }

    #[test]
    fn reason_is_copy() {
        let a = Reason::Tai;
        let b = a; // Copy
        assert_eq!(a, b);
    }

    #[test]
    fn display_uses_gloss() {
        assert_eq!(Reason::Tai.to_string(), "-tai");
        assert_eq!(Reason::Te.to_string(), "te-form");
        assert_eq!(Reason::PotentialOrPassive.to_string(), "potential or passive");
    }
}
