//! Script⇄Devanagari bridge maps.
//!
//! Regional scripts convert to each other through Devanagari, using a
//! direct codepoint map per script. The forward (script→Devanagari) map is
//! derived from the character tables: every table key pairs its script
//! value with the Devanagari value, keeping the tables the single source
//! of truth. The reverse map is the swapped forward map; a collision in
//! either direction is a table-configuration error and panics at first use
//! with the offending entries named.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::scheme::Script;
use crate::tables::{script_table, ALLOWED_SYMBOLS};

pub struct BridgeMap {
    forward: HashMap<&'static str, &'static str>,
    reverse: HashMap<&'static str, &'static str>,
    /// Longest forward key in codepoints (the om ligatures reach 2).
    max_key_len: usize,
}

impl BridgeMap {
    fn build(script: Script) -> Self {
        let table = script_table(script);
        let deva = script_table(Script::Devanagari);

        let mut pairs: Vec<(&'static str, &'static str)> = Vec::new();

        // Misc symbols pair by short code; the Devanagari dandas are shared
        // by every script and so map to themselves.
        let deva_misc: HashMap<&str, &str> =
            deva.misc.iter().map(|&(sym, code)| (code, sym)).collect();
        for &(symbol, code) in table.misc {
            pairs.push((symbol, deva_misc[code]));
        }

        let deva_numbers: HashMap<&str, &str> = deva.numbers.iter().copied().collect();
        for &(ascii, native) in table.numbers {
            pairs.push((native, deva_numbers[ascii]));
        }

        for (own, hub) in [
            (table.vowels, deva.vowels),
            (table.vowel_signs, deva.vowel_signs),
            (table.consonants, deva.consonants),
        ] {
            let hub_by_key: HashMap<&str, &str> = hub.iter().copied().collect();
            for &(key, native) in own {
                // The inherent-a sign is empty on both sides.
                if native.is_empty() {
                    continue;
                }
                pairs.push((native, hub_by_key[key]));
            }
        }

        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        let mut max_key_len = 1;
        for (native, hub) in pairs {
            if let Some(prev) = forward.insert(native, hub) {
                if prev != hub {
                    panic!(
                        "{script:?} bridge: {native:?} maps to both {prev:?} and {hub:?}"
                    );
                }
            }
            if let Some(prev) = reverse.insert(hub, native) {
                if prev != native {
                    panic!(
                        "{script:?} bridge: {hub:?} maps back to both {prev:?} and {native:?}"
                    );
                }
            }
            max_key_len = max_key_len.max(native.chars().count());
        }

        BridgeMap {
            forward,
            reverse,
            max_key_len,
        }
    }
}

pub fn bridge(script: Script) -> &'static BridgeMap {
    static MAPS: OnceLock<Vec<BridgeMap>> = OnceLock::new();
    let all = MAPS.get_or_init(|| Script::ALL.iter().map(|&s| BridgeMap::build(s)).collect());
    &all[script.index()]
}

/// Convert native `script` text into the Devanagari equivalents.
///
/// Longest match first, so the two-codepoint om ligatures resolve before
/// their leading vowel letter. Allowed punctuation passes through; anything
/// else is dropped.
pub fn to_devanagari(script: Script, token: &str) -> String {
    let map = bridge(script);
    let chars: Vec<char> = token.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    'outer: while i < chars.len() {
        let longest = map.max_key_len.min(chars.len() - i);
        for len in (1..=longest).rev() {
            let window: String = chars[i..i + len].iter().collect();
            if let Some(hub) = map.forward.get(window.as_str()) {
                out.push_str(hub);
                i += len;
                continue 'outer;
            }
        }

        if ALLOWED_SYMBOLS.contains(&chars[i]) {
            out.push(chars[i]);
        } else {
            tracing::trace!(script = script.tag(), codepoint = %chars[i], "dropping unmapped codepoint");
        }
        i += 1;
    }

    out
}

/// Convert Devanagari text into native `script` equivalents. Unmapped
/// codepoints are dropped.
pub fn from_devanagari(script: Script, token: &str) -> String {
    let map = bridge(script);
    let mut out = String::new();
    for c in token.chars() {
        let key = c.to_string();
        if let Some(native) = map.reverse.get(key.as_str()) {
            out.push_str(native);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bridges_build_without_collision() {
        for script in Script::ALL {
            let map = bridge(script);
            assert_eq!(map.forward.len(), map.reverse.len(), "{script:?}");
        }
    }

    #[test]
    fn basic_letters() {
        assert_eq!(to_devanagari(Script::Gujarati, "ક"), "क");
        assert_eq!(from_devanagari(Script::Gujarati, "क"), "ક");
        assert_eq!(to_devanagari(Script::Odia, "ୱ"), "व");
        assert_eq!(to_devanagari(Script::Tamil, "𑌕"), "क");
    }

    #[test]
    fn words_round_trip() {
        let gujarati = "રામ";
        let deva = to_devanagari(Script::Gujarati, gujarati);
        assert_eq!(deva, "राम");
        assert_eq!(from_devanagari(Script::Gujarati, &deva), gujarati);
    }

    #[test]
    fn om_ligatures_match_longest_first() {
        assert_eq!(to_devanagari(Script::Telugu, "ఓం"), "ॐ");
        assert_eq!(to_devanagari(Script::Kannada, "ಓಂ"), "ॐ");
        assert_eq!(to_devanagari(Script::Odia, "ଓଁ"), "ॐ");
        assert_eq!(to_devanagari(Script::Malayalam, "ഓം"), "ॐ");
        assert_eq!(from_devanagari(Script::Telugu, "ॐ"), "ఓం");
    }

    #[test]
    fn dandas_shared_across_scripts() {
        assert_eq!(to_devanagari(Script::Kannada, "।"), "।");
        assert_eq!(from_devanagari(Script::Kannada, "॥"), "॥");
    }

    #[test]
    fn digits() {
        assert_eq!(to_devanagari(Script::Malayalam, "൫"), "५");
        assert_eq!(from_devanagari(Script::Telugu, "५"), "౫");
    }

    #[test]
    fn punctuation_forward_only() {
        assert_eq!(to_devanagari(Script::Gujarati, "ક?"), "क?");
        assert_eq!(from_devanagari(Script::Gujarati, "क?"), "ક");
    }

    #[test]
    fn unmapped_dropped() {
        assert_eq!(to_devanagari(Script::Gujarati, "xક"), "क");
        assert_eq!(from_devanagari(Script::Gujarati, "xक"), "ક");
    }

    #[test]
    fn virama_and_signs() {
        assert_eq!(to_devanagari(Script::Gujarati, "ક્ત"), "क्त");
        assert_eq!(to_devanagari(Script::Malayalam, "കി"), "कि");
    }
}
