//! SLP1→IAST substitution.
//!
//! SLP1 is a closed ASCII alphabet, so this is the one lossy pass: input
//! codepoints outside the table are dropped rather than passed through.

use std::collections::HashMap;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

use crate::tables::Pairs;

const SLP_DATA: Pairs = &[
    ("a", "a"),
    ("A", "ā"),
    ("i", "i"),
    ("I", "ī"),
    ("u", "u"),
    ("U", "ū"),
    ("e", "e"),
    ("E", "ai"),
    ("o", "o"),
    ("O", "au"),
    ("f", "ṛ"),
    ("F", "ṝ"),
    ("x", "ḷ"),
    ("X", "ḹ"),
    ("L", "ḻ"),
    ("|", "ḻh"),
    ("k", "k"),
    ("K", "kh"),
    ("g", "g"),
    ("G", "gh"),
    ("N", "ṅ"),
    ("c", "c"),
    ("C", "ch"),
    ("j", "j"),
    ("J", "jh"),
    ("Y", "ñ"),
    ("w", "ṭ"),
    ("W", "ṭh"),
    ("q", "ḍ"),
    ("Q", "ḍh"),
    ("R", "ṇ"),
    ("t", "t"),
    ("T", "th"),
    ("d", "d"),
    ("D", "dh"),
    ("n", "n"),
    ("p", "p"),
    ("P", "ph"),
    ("b", "b"),
    ("B", "bh"),
    ("m", "m"),
    ("M", "ṃ"),
    ("H", "ḥ"),
    ("y", "y"),
    ("r", "r"),
    ("l", "l"),
    ("v", "v"),
    ("S", "ś"),
    ("z", "ṣ"),
    ("s", "s"),
    ("h", "h"),
    ("'", "'"),
    ("~", "ã"),
];

fn slp_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| SLP_DATA.iter().copied().collect())
}

pub fn slp_to_iast(token: &str) -> String {
    let map = slp_map();
    let mut out = String::new();
    for c in token.chars() {
        let key = c.to_string();
        if let Some(iast) = map.get(key.as_str()) {
            out.push_str(iast);
        } else {
            tracing::trace!(codepoint = %c, "dropping character outside the SLP1 alphabet");
        }
    }
    out.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_distinguishes_length_and_aspiration() {
        assert_eq!(slp_to_iast("saMskftam"), "saṃskṛtam");
        assert_eq!(slp_to_iast("Darma"), "dharma");
        assert_eq!(slp_to_iast("kfzRa"), "kṛṣṇa");
    }

    #[test]
    fn retroflex_row() {
        assert_eq!(slp_to_iast("wWqQR"), "ṭṭhḍḍhṇ");
    }

    #[test]
    fn unmapped_input_is_dropped() {
        assert_eq!(slp_to_iast("ka ga"), "kaga");
        assert_eq!(slp_to_iast("4"), "");
    }

    #[test]
    fn avagraha_and_candrabindu() {
        assert_eq!(slp_to_iast("'"), "'");
        assert_eq!(slp_to_iast("~"), "ã");
    }
}
