// Suffix rewrite rules for Japanese conjugation.
//
// Each rule undoes exactly one grammatical layer: it strips `from` off the
// end of a word, appends `to`, and declares which classes the word could
// have belonged to before (`from_classes`) and which classes the rewritten
// word can belong to (`to_classes`). `from_classes` describes the inflected
// form as a conjugating word in its own right: the -ない and -たい forms
// conjugate as i-adjectives, potential/passive/causative forms as ichidan
// verbs. That is what lets chains like 踊りたくなかった → 踊りたくない →
// 踊りたい → 踊る type-check step by step.
//
// Authoring invariant: `to` never has more characters than `from`, so word
// length is non-increasing along any chain and the search space is finite.

use jisho_core::Reason::{self, *};
use jisho_core::WordClass;

/// A single suffix rewrite rule.
///
/// Applicable to a word `w` with class set `c` iff `w` ends with `from`
/// and `c` intersects `from_classes`. Produces `w` with `from` replaced
/// by `to`, carrying exactly `to_classes` (the rule's authoritative
/// statement of what the reduced form can be).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub from: &'static str,
    pub to: &'static str,
    pub from_classes: WordClass,
    pub to_classes: WordClass,
    pub reason: Reason,
}

const IV: WordClass = WordClass::ICHIDAN;
const GV: WordClass = WordClass::GODAN;
const AI: WordClass = WordClass::I_ADJECTIVE;
const KV: WordClass = WordClass::KURU;
const SV: WordClass = WordClass::SURU;
/// Any verb class: dictionary-form targets of the negative imperative.
const VERB: WordClass = IV.union(GV).union(KV).union(SV);
/// Dictionary forms ending in る whose provisional is れば: ichidan or godan.
const RU_VERB: WordClass = IV.union(GV);

const fn r(
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

/// The built-in rule table, grouped by the grammatical layer each rule
/// undoes. Within a group the order is: ichidan, the nine godan rows
/// (う く ぐ す つ ぬ ぶ む る), する, 来る, i-adjective where applicable.
pub static RULES: &[Rule] = &[
    // -- Polite (ます) ------------------------------------------------------
    r("ます", "る", IV, IV, Polite),
    r("います", "う", GV, GV, Polite),
    r("きます", "く", GV, GV, Polite),
    r("ぎます", "ぐ", GV, GV, Polite),
    r("します", "す", GV, GV, Polite),
    r("ちます", "つ", GV, GV, Polite),
    r("にます", "ぬ", GV, GV, Polite),
    r("びます", "ぶ", GV, GV, Polite),
    r("みます", "む", GV, GV, Polite),
    r("ります", "る", GV, GV, Polite),
    r("します", "する", SV, SV, Polite),
    r("きます", "くる", KV, KV, Polite),
    r("来ます", "来る", KV, KV, Polite),
    // -- Polite negative (ません) -------------------------------------------
    r("ません", "る", IV, IV, PoliteNegative),
    r("いません", "う", GV, GV, PoliteNegative),
    r("きません", "く", GV, GV, PoliteNegative),
    r("ぎません", "ぐ", GV, GV, PoliteNegative),
    r("しません", "す", GV, GV, PoliteNegative),
    r("ちません", "つ", GV, GV, PoliteNegative),
    r("にません", "ぬ", GV, GV, PoliteNegative),
    r("びません", "ぶ", GV, GV, PoliteNegative),
    r("みません", "む", GV, GV, PoliteNegative),
    r("りません", "る", GV, GV, PoliteNegative),
    r("しません", "する", SV, SV, PoliteNegative),
    r("きません", "くる", KV, KV, PoliteNegative),
    r("来ません", "来る", KV, KV, PoliteNegative),
    // -- Polite past (ました) -----------------------------------------------
    r("ました", "る", IV, IV, PolitePast),
    r("いました", "う", GV, GV, PolitePast),
    r("きました", "く", GV, GV, PolitePast),
    r("ぎました", "ぐ", GV, GV, PolitePast),
    r("しました", "す", GV, GV, PolitePast),
    r("ちました", "つ", GV, GV, PolitePast),
    r("にました", "ぬ", GV, GV, PolitePast),
    r("びました", "ぶ", GV, GV, PolitePast),
    r("みました", "む", GV, GV, PolitePast),
    r("りました", "る", GV, GV, PolitePast),
    r("しました", "する", SV, SV, PolitePast),
    r("きました", "くる", KV, KV, PolitePast),
    r("来ました", "来る", KV, KV, PolitePast),
    // -- Polite past negative (ませんでした) --------------------------------
    r("ませんでした", "る", IV, IV, PolitePastNegative),
    r("いませんでした", "う", GV, GV, PolitePastNegative),
    r("きませんでした", "く", GV, GV, PolitePastNegative),
    r("ぎませんでした", "ぐ", GV, GV, PolitePastNegative),
    r("しませんでした", "す", GV, GV, PolitePastNegative),
    r("ちませんでした", "つ", GV, GV, PolitePastNegative),
    r("にませんでした", "ぬ", GV, GV, PolitePastNegative),
    r("びませんでした", "ぶ", GV, GV, PolitePastNegative),
    r("みませんでした", "む", GV, GV, PolitePastNegative),
    r("りませんでした", "る", GV, GV, PolitePastNegative),
    r("しませんでした", "する", SV, SV, PolitePastNegative),
    r("きませんでした", "くる", KV, KV, PolitePastNegative),
    r("来ませんでした", "来る", KV, KV, PolitePastNegative),
    // -- Polite volitional (ましょう) ---------------------------------------
    r("ましょう", "る", IV, IV, PoliteVolitional),
    r("いましょう", "う", GV, GV, PoliteVolitional),
    r("きましょう", "く", GV, GV, PoliteVolitional),
    r("ぎましょう", "ぐ", GV, GV, PoliteVolitional),
    r("しましょう", "す", GV, GV, PoliteVolitional),
    r("ちましょう", "つ", GV, GV, PoliteVolitional),
    r("にましょう", "ぬ", GV, GV, PoliteVolitional),
    r("びましょう", "ぶ", GV, GV, PoliteVolitional),
    r("みましょう", "む", GV, GV, PoliteVolitional),
    r("りましょう", "る", GV, GV, PoliteVolitional),
    r("しましょう", "する", SV, SV, PoliteVolitional),
    r("きましょう", "くる", KV, KV, PoliteVolitional),
    r("来ましょう", "来る", KV, KV, PoliteVolitional),
    // -- Plain negative (ない); the ない form conjugates as an i-adjective --
    r("ない", "る", AI, IV, Negative),
    r("わない", "う", AI, GV, Negative),
    r("かない", "く", AI, GV, Negative),
    r("がない", "ぐ", AI, GV, Negative),
    r("さない", "す", AI, GV, Negative),
    r("たない", "つ", AI, GV, Negative),
    r("なない", "ぬ", AI, GV, Negative),
    r("ばない", "ぶ", AI, GV, Negative),
    r("まない", "む", AI, GV, Negative),
    r("らない", "る", AI, GV, Negative),
    r("しない", "する", AI, SV, Negative),
    r("こない", "くる", AI, KV, Negative),
    r("来ない", "来る", AI, KV, Negative),
    r("くない", "い", AI, AI, Negative),
    // -- Plain past (た / った / んだ) --------------------------------------
    r("た", "る", IV, IV, Past),
    r("った", "う", GV, GV, Past),
    r("いた", "く", GV, GV, Past),
    r("いだ", "ぐ", GV, GV, Past),
    r("した", "す", GV, GV, Past),
    r("った", "つ", GV, GV, Past),
    r("んだ", "ぬ", GV, GV, Past),
    r("んだ", "ぶ", GV, GV, Past),
    r("んだ", "む", GV, GV, Past),
    r("った", "る", GV, GV, Past),
    r("行った", "行く", GV, GV, Past),
    r("した", "する", SV, SV, Past),
    r("きた", "くる", KV, KV, Past),
    r("来た", "来る", KV, KV, Past),
    r("かった", "い", AI, AI, Past),
    // -- Te-form ------------------------------------------------------------
    r("て", "る", IV, IV, Te),
    r("って", "う", GV, GV, Te),
    r("いて", "く", GV, GV, Te),
    r("いで", "ぐ", GV, GV, Te),
    r("して", "す", GV, GV, Te),
    r("って", "つ", GV, GV, Te),
    r("んで", "ぬ", GV, GV, Te),
    r("んで", "ぶ", GV, GV, Te),
    r("んで", "む", GV, GV, Te),
    r("って", "る", GV, GV, Te),
    r("行って", "行く", GV, GV, Te),
    r("して", "する", SV, SV, Te),
    r("きて", "くる", KV, KV, Te),
    r("来て", "来る", KV, KV, Te),
    r("くて", "い", AI, AI, Te),
    // -- Desiderative (たい); conjugates as an i-adjective -------------------
    r("たい", "る", AI, IV, Tai),
    r("いたい", "う", AI, GV, Tai),
    r("きたい", "く", AI, GV, Tai),
    r("ぎたい", "ぐ", AI, GV, Tai),
    r("したい", "す", AI, GV, Tai),
    r("ちたい", "つ", AI, GV, Tai),
    r("にたい", "ぬ", AI, GV, Tai),
    r("びたい", "ぶ", AI, GV, Tai),
    r("みたい", "む", AI, GV, Tai),
    r("りたい", "る", AI, GV, Tai),
    r("したい", "する", AI, SV, Tai),
    r("きたい", "くる", AI, KV, Tai),
    r("来たい", "来る", AI, KV, Tai),
    // -- Potential; the potential form conjugates as an ichidan verb ---------
    r("える", "う", IV, GV, Potential),
    r("ける", "く", IV, GV, Potential),
    r("げる", "ぐ", IV, GV, Potential),
    r("せる", "す", IV, GV, Potential),
    r("てる", "つ", IV, GV, Potential),
    r("ねる", "ぬ", IV, GV, Potential),
    r("べる", "ぶ", IV, GV, Potential),
    r("める", "む", IV, GV, Potential),
    r("れる", "る", IV, GV, Potential),
    r("できる", "する", IV, SV, Potential),
    // -- られる: potential or passive, indistinguishable for ichidan/来る ----
    r("られる", "る", IV, IV, PotentialOrPassive),
    r("こられる", "くる", IV, KV, PotentialOrPassive),
    r("来られる", "来る", IV, KV, PotentialOrPassive),
    // -- Passive (godan); conjugates as an ichidan verb ----------------------
    r("われる", "う", IV, GV, Passive),
    r("かれる", "く", IV, GV, Passive),
    r("がれる", "ぐ", IV, GV, Passive),
    r("される", "す", IV, GV, Passive),
    r("たれる", "つ", IV, GV, Passive),
    r("なれる", "ぬ", IV, GV, Passive),
    r("ばれる", "ぶ", IV, GV, Passive),
    r("まれる", "む", IV, GV, Passive),
    r("られる", "る", IV, GV, Passive),
    r("される", "する", IV, SV, Passive),
    // -- Causative; conjugates as an ichidan verb ----------------------------
    r("させる", "る", IV, IV, Causative),
    r("わせる", "う", IV, GV, Causative),
    r("かせる", "く", IV, GV, Causative),
    r("がせる", "ぐ", IV, GV, Causative),
    r("させる", "す", IV, GV, Causative),
    r("たせる", "つ", IV, GV, Causative),
    r("なせる", "ぬ", IV, GV, Causative),
    r("ばせる", "ぶ", IV, GV, Causative),
    r("ませる", "む", IV, GV, Causative),
    r("らせる", "る", IV, GV, Causative),
    r("させる", "する", IV, SV, Causative),
    r("こさせる", "くる", IV, KV, Causative),
    r("来させる", "来る", IV, KV, Causative),
    // -- Causative passive; conjugates as an ichidan verb --------------------
    r("させられる", "る", IV, IV, CausativePassive),
    r("わされる", "う", IV, GV, CausativePassive),
    r("かされる", "く", IV, GV, CausativePassive),
    r("がされる", "ぐ", IV, GV, CausativePassive),
    r("たされる", "つ", IV, GV, CausativePassive),
    r("なされる", "ぬ", IV, GV, CausativePassive),
    r("ばされる", "ぶ", IV, GV, CausativePassive),
    r("まされる", "む", IV, GV, CausativePassive),
    r("らされる", "る", IV, GV, CausativePassive),
    r("させられる", "する", IV, SV, CausativePassive),
    // -- Volitional ----------------------------------------------------------
    r("よう", "る", IV, IV, Volitional),
    r("おう", "う", GV, GV, Volitional),
    r("こう", "く", GV, GV, Volitional),
    r("ごう", "ぐ", GV, GV, Volitional),
    r("そう", "す", GV, GV, Volitional),
    r("とう", "つ", GV, GV, Volitional),
    r("のう", "ぬ", GV, GV, Volitional),
    r("ぼう", "ぶ", GV, GV, Volitional),
    r("もう", "む", GV, GV, Volitional),
    r("ろう", "る", GV, GV, Volitional),
    r("しよう", "する", SV, SV, Volitional),
    r("こよう", "くる", KV, KV, Volitional),
    r("来よう", "来る", KV, KV, Volitional),
    // -- Imperative ----------------------------------------------------------
    r("ろ", "る", IV, IV, Imperative),
    r("よ", "る", IV, IV, Imperative),
    r("え", "う", GV, GV, Imperative),
    r("け", "く", GV, GV, Imperative),
    r("げ", "ぐ", GV, GV, Imperative),
    r("せ", "す", GV, GV, Imperative),
    r("て", "つ", GV, GV, Imperative),
    r("ね", "ぬ", GV, GV, Imperative),
    r("べ", "ぶ", GV, GV, Imperative),
    r("め", "む", GV, GV, Imperative),
    r("れ", "る", GV, GV, Imperative),
    r("しろ", "する", SV, SV, Imperative),
    r("せよ", "する", SV, SV, Imperative),
    r("こい", "くる", KV, KV, Imperative),
    r("来い", "来る", KV, KV, Imperative),
    // -- Negative imperative: dictionary form + な ---------------------------
    r("な", "", VERB, VERB, ImperativeNegative),
    // -- Progressive (ている); conjugates as an ichidan verb (いる) ----------
    r("ている", "る", IV, IV, Progressive),
    r("っている", "う", IV, GV, Progressive),
    r("いている", "く", IV, GV, Progressive),
    r("いでいる", "ぐ", IV, GV, Progressive),
    r("している", "す", IV, GV, Progressive),
    r("っている", "つ", IV, GV, Progressive),
    r("んでいる", "ぬ", IV, GV, Progressive),
    r("んでいる", "ぶ", IV, GV, Progressive),
    r("んでいる", "む", IV, GV, Progressive),
    r("っている", "る", IV, GV, Progressive),
    r("行っている", "行く", IV, GV, Progressive),
    r("している", "する", IV, SV, Progressive),
    r("きている", "くる", IV, KV, Progressive),
    r("来ている", "来る", IV, KV, Progressive),
    // -- Contracted progressive (てる) ---------------------------------------
    r("てる", "る", IV, IV, Progressive),
    r("ってる", "う", IV, GV, Progressive),
    r("いてる", "く", IV, GV, Progressive),
    r("いでる", "ぐ", IV, GV, Progressive),
    r("してる", "す", IV, GV, Progressive),
    r("ってる", "つ", IV, GV, Progressive),
    r("んでる", "ぬ", IV, GV, Progressive),
    r("んでる", "ぶ", IV, GV, Progressive),
    r("んでる", "む", IV, GV, Progressive),
    r("ってる", "る", IV, GV, Progressive),
    r("してる", "する", IV, SV, Progressive),
    r("きてる", "くる", IV, KV, Progressive),
    // -- Conditional (たら) --------------------------------------------------
    r("たら", "る", IV, IV, Conditional),
    r("ったら", "う", GV, GV, Conditional),
    r("いたら", "く", GV, GV, Conditional),
    r("いだら", "ぐ", GV, GV, Conditional),
    r("したら", "す", GV, GV, Conditional),
    r("ったら", "つ", GV, GV, Conditional),
    r("んだら", "ぬ", GV, GV, Conditional),
    r("んだら", "ぶ", GV, GV, Conditional),
    r("んだら", "む", GV, GV, Conditional),
    r("ったら", "る", GV, GV, Conditional),
    r("行ったら", "行く", GV, GV, Conditional),
    r("したら", "する", SV, SV, Conditional),
    r("きたら", "くる", KV, KV, Conditional),
    r("来たら", "来る", KV, KV, Conditional),
    r("かったら", "い", AI, AI, Conditional),
    // -- Provisional (ば) ----------------------------------------------------
    r("れば", "る", RU_VERB, RU_VERB, Provisional),
    r("えば", "う", GV, GV, Provisional),
    r("けば", "く", GV, GV, Provisional),
    r("げば", "ぐ", GV, GV, Provisional),
    r("せば", "す", GV, GV, Provisional),
    r("てば", "つ", GV, GV, Provisional),
    r("ねば", "ぬ", GV, GV, Provisional),
    r("べば", "ぶ", GV, GV, Provisional),
    r("めば", "む", GV, GV, Provisional),
    r("すれば", "する", SV, SV, Provisional),
    r("くれば", "くる", KV, KV, Provisional),
    r("来れば", "来る", KV, KV, Provisional),
    r("ければ", "い", AI, AI, Provisional),
    // -- Archaic negative (ず) -----------------------------------------------
    r("ず", "る", IV, IV, Zu),
    r("わず", "う", GV, GV, Zu),
    r("かず", "く", GV, GV, Zu),
    r("がず", "ぐ", GV, GV, Zu),
    r("さず", "す", GV, GV, Zu),
    r("たず", "つ", GV, GV, Zu),
    r("なず", "ぬ", GV, GV, Zu),
    r("ばず", "ぶ", GV, GV, Zu),
    r("まず", "む", GV, GV, Zu),
    r("らず", "る", GV, GV, Zu),
    r("せず", "する", SV, SV, Zu),
    r("こず", "くる", KV, KV, Zu),
    r("来ず", "来る", KV, KV, Zu),
    // -- Bare masu stem (godan only; the ichidan stem would need a
    //    length-increasing rewrite, which the table forbids) -----------------
    r("い", "う", GV, GV, MasuStem),
    r("き", "く", GV, GV, MasuStem),
    r("ぎ", "ぐ", GV, GV, MasuStem),
    r("し", "す", GV, GV, MasuStem),
    r("ち", "つ", GV, GV, MasuStem),
    r("に", "ぬ", GV, GV, MasuStem),
    r("び", "ぶ", GV, GV, MasuStem),
    r("み", "む", GV, GV, MasuStem),
    r("り", "る", GV, GV, MasuStem),
    // -- Adjective adverbial (く) and nominalizer (さ) -----------------------
    r("く", "い", AI, AI, Adverbial),
    r("さ", "い", AI, AI, NounSa),
    // -- Appearance (そう), attaches to the stem ------------------------------
    r("そう", "る", IV, IV, Sou),
    r("いそう", "う", GV, GV, Sou),
    r("きそう", "く", GV, GV, Sou),
    r("ぎそう", "ぐ", GV, GV, Sou),
    r("しそう", "す", GV, GV, Sou),
    r("ちそう", "つ", GV, GV, Sou),
    r("にそう", "ぬ", GV, GV, Sou),
    r("びそう", "ぶ", GV, GV, Sou),
    r("みそう", "む", GV, GV, Sou),
    r("りそう", "る", GV, GV, Sou),
    r("しそう", "する", SV, SV, Sou),
    r("きそう", "くる", KV, KV, Sou),
    r("そう", "い", AI, AI, Sou),
    // -- Excess (すぎる), itself an ichidan verb ------------------------------
    r("すぎる", "る", IV, IV, Sugiru),
    r("いすぎる", "う", IV, GV, Sugiru),
    r("きすぎる", "く", IV, GV, Sugiru),
    r("ぎすぎる", "ぐ", IV, GV, Sugiru),
    r("しすぎる", "す", IV, GV, Sugiru),
    r("ちすぎる", "つ", IV, GV, Sugiru),
    r("にすぎる", "ぬ", IV, GV, Sugiru),
    r("びすぎる", "ぶ", IV, GV, Sugiru),
    r("みすぎる", "む", IV, GV, Sugiru),
    r("りすぎる", "る", IV, GV, Sugiru),
    r("しすぎる", "する", IV, SV, Sugiru),
    r("すぎる", "い", IV, AI, Sugiru),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_never_grow_words() {
        // The termination argument depends on every rewrite being
        // non-increasing in character count.
        for rule in RULES {
            assert!(
                rule.to.chars().count() <= rule.from.chars().count(),
                "rule {:?} -> {:?} grows the word",
                rule.from,
                rule.to
            );
        }
    }

    #[test]
    fn rules_have_nonempty_from_suffix() {
        for rule in RULES {
            assert!(!rule.from.is_empty(), "rule with empty from suffix");
        }
    }

    #[test]
    fn rules_have_nonempty_class_masks() {
        for rule in RULES {
            assert!(
                !rule.from_classes.is_empty() && !rule.to_classes.is_empty(),
                "rule {:?} has an empty class mask",
                rule.from
            );
        }
    }

    #[test]
    fn no_fully_duplicated_rules() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert!(
                    !(a.from == b.from
                        && a.to == b.to
                        && a.reason == b.reason
                        && a.from_classes == b.from_classes
                        && a.to_classes == b.to_classes),
                    "duplicate rule {:?} -> {:?} ({:?})",
                    a.from,
                    a.to,
                    a.reason
                );
            }
        }
    }

    #[test]
    fn polite_rule_for_godan_ru_exists() {
        assert!(RULES.iter().any(|r| {
            r.from == "ります"
                && r.to == "る"
                && r.reason == Reason::Polite
                && r.to_classes == WordClass::GODAN
        }));
    }
}
