//! Static character-class tables for the seven target scripts.
//!
//! Keys are UAST/IAST notation (`"kh"`, `"ṛ"`, `"ai"`, ASCII digits); values
//! are native codepoint sequences. The const slices are the source of truth;
//! [`script_maps`] builds the hash-lookup views once per process and shares
//! them behind a `OnceLock`, so conversion never synchronizes.

mod devanagari;
mod gujarati;
mod kannada;
mod malayalam;
mod odia;
mod tamil;
mod telugu;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::scheme::Script;

pub type Pairs = &'static [(&'static str, &'static str)];

/// Raw table data for one script, one slice per character class.
pub struct ScriptTable {
    /// Independent vowel letters, keyed by UAST vowel.
    pub vowels: Pairs,
    /// Dependent vowel signs. The inherent `a` maps to the empty string;
    /// anusvara/visarga/candrabindu and the virama (`-`) live here too.
    pub vowel_signs: Pairs,
    pub consonants: Pairs,
    /// ASCII digit → native digit.
    pub numbers: Pairs,
    /// Native symbol → short code (danda, double danda, avagraha, om).
    pub misc: Pairs,
}

pub fn script_table(script: Script) -> &'static ScriptTable {
    match script {
        Script::Devanagari => &devanagari::TABLE,
        Script::Gujarati => &gujarati::TABLE,
        Script::Tamil => &tamil::TABLE,
        Script::Kannada => &kannada::TABLE,
        Script::Telugu => &telugu::TABLE,
        Script::Odia => &odia::TABLE,
        Script::Malayalam => &malayalam::TABLE,
    }
}

/// Hash-lookup view over a [`ScriptTable`].
pub struct ScriptMaps {
    pub vowels: HashMap<&'static str, &'static str>,
    pub vowel_signs: HashMap<&'static str, &'static str>,
    pub consonants: HashMap<&'static str, &'static str>,
    pub numbers: HashMap<&'static str, &'static str>,
    pub misc: HashMap<&'static str, &'static str>,
}

impl ScriptMaps {
    fn build(table: &'static ScriptTable) -> Self {
        let to_map = |pairs: Pairs| pairs.iter().copied().collect::<HashMap<_, _>>();
        Self {
            vowels: to_map(table.vowels),
            vowel_signs: to_map(table.vowel_signs),
            consonants: to_map(table.consonants),
            numbers: to_map(table.numbers),
            misc: to_map(table.misc),
        }
    }
}

pub fn script_maps(script: Script) -> &'static ScriptMaps {
    static MAPS: OnceLock<Vec<ScriptMaps>> = OnceLock::new();
    let all = MAPS.get_or_init(|| {
        Script::ALL
            .iter()
            .map(|&s| ScriptMaps::build(script_table(s)))
            .collect()
    });
    &all[script.index()]
}

/// Consonants that form an aspirate digraph with a following `h`.
pub const UNASPIRATED: &[&str] = &["b", "c", "d", "g", "j", "k", "p", "t", "ḍ", "ṭ"];

pub fn is_unaspirated(s: &str) -> bool {
    UNASPIRATED.contains(&s)
}

/// Punctuation passed through unchanged by the Latin-side passes.
pub const ALLOWED_SYMBOLS: &[char] = &['!', '"', '(', ')', ',', '-', ':', '=', '?', '|'];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_and_consonant_keys_disjoint() {
        for script in Script::ALL {
            let maps = script_maps(script);
            for key in maps.vowels.keys() {
                assert!(
                    !maps.consonants.contains_key(key),
                    "{script:?}: {key:?} is both vowel and consonant"
                );
            }
        }
    }

    #[test]
    fn every_vowel_has_a_sign_entry() {
        for script in Script::ALL {
            let maps = script_maps(script);
            for key in maps.vowels.keys() {
                assert!(
                    maps.vowel_signs.contains_key(key),
                    "{script:?}: vowel {key:?} has no sign entry"
                );
            }
        }
    }

    #[test]
    fn inherent_a_sign_is_empty() {
        for script in Script::ALL {
            assert_eq!(script_maps(script).vowel_signs["a"], "");
        }
    }

    #[test]
    fn digits_cover_zero_through_nine() {
        for script in Script::ALL {
            let table = script_table(script);
            assert_eq!(table.numbers.len(), 10, "{script:?}");
            for d in 0..10u32 {
                let key = d.to_string();
                assert!(
                    script_maps(script).numbers.contains_key(key.as_str()),
                    "{script:?}: missing digit {d}"
                );
            }
        }
    }

    #[test]
    fn misc_carries_danda_avagraha_om() {
        for script in Script::ALL {
            let maps = script_maps(script);
            let codes: Vec<&str> = maps.misc.values().copied().collect();
            for code in [".", "..", "'", "om"] {
                assert!(codes.contains(&code), "{script:?}: missing misc {code:?}");
            }
        }
    }

    #[test]
    fn table_shapes_match_devanagari() {
        let deva = script_table(Script::Devanagari);
        for script in Script::REGIONAL {
            let table = script_table(script);
            assert_eq!(table.vowels.len(), deva.vowels.len(), "{script:?}");
            assert_eq!(table.vowel_signs.len(), deva.vowel_signs.len(), "{script:?}");
            assert_eq!(table.consonants.len(), deva.consonants.len(), "{script:?}");
        }
    }

    #[test]
    fn unaspirated_set_is_ten_stops() {
        assert_eq!(UNASPIRATED.len(), 10);
        assert!(is_unaspirated("k"));
        assert!(is_unaspirated("ḍ"));
        assert!(!is_unaspirated("h"));
        assert!(!is_unaspirated("kh"));
    }
}
