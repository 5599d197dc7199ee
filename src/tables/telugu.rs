//! Telugu (తెలుగు) character tables.

use super::{Pairs, ScriptTable};

pub(super) const TABLE: ScriptTable = ScriptTable {
    vowels: VOWELS,
    vowel_signs: VOWEL_SIGNS,
    consonants: CONSONANTS,
    numbers: NUMBERS,
    misc: MISC,
};

// om is the two-codepoint ligature ఓ + anusvara.
const MISC: Pairs = &[("।", "."), ("॥", ".."), ("ఽ", "'"), ("ఓం", "om")];

const NUMBERS: Pairs = &[
    ("0", "౦"),
    ("1", "౧"),
    ("2", "౨"),
    ("3", "౩"),
    ("4", "౪"),
    ("5", "౫"),
    ("6", "౬"),
    ("7", "౭"),
    ("8", "౮"),
    ("9", "౯"),
];

const VOWELS: Pairs = &[
    ("a", "అ"),
    ("ā", "ఆ"),
    ("i", "ఇ"),
    ("ī", "ఈ"),
    ("u", "ఉ"),
    ("ū", "ఊ"),
    ("ṛ", "ఋ"),
    ("ṝ", "ౠ"),
    ("ḷ", "ఌ"),
    ("ḹ", "ౡ"),
    ("e", "ఎ"),
    ("ai", "ఐ"),
    ("o", "ఒ"),
    ("au", "ఔ"),
];

const VOWEL_SIGNS: Pairs = &[
    ("a", ""),
    ("ā", "ా"),
    ("i", "ి"),
    ("ī", "ీ"),
    ("u", "ు"),
    ("ū", "ూ"),
    ("ṛ", "ృ"),
    ("ṝ", "ౄ"),
    ("ḷ", "ౢ"),
    ("ḹ", "ౣ"),
    ("e", "ె"),
    ("ai", "ై"),
    ("o", "ొ"),
    ("au", "ౌ"),
    ("ṃ", "ం"),
    ("ḥ", "ః"),
    ("ã", "ఁ"),
    ("-", "్"),
];

const CONSONANTS: Pairs = &[
    ("k", "క"),
    ("kh", "ఖ"),
    ("g", "గ"),
    ("gh", "ఘ"),
    ("ṅ", "ఙ"),
    ("c", "చ"),
    ("ch", "ఛ"),
    ("j", "జ"),
    ("jh", "ఝ"),
    ("ñ", "ఞ"),
    ("ṭ", "ట"),
    ("ṭh", "ఠ"),
    ("ḍ", "డ"),
    ("ḍh", "ఢ"),
    ("ṇ", "ణ"),
    ("t", "త"),
    ("th", "థ"),
    ("d", "ద"),
    ("dh", "ధ"),
    ("n", "న"),
    ("p", "ప"),
    ("ph", "ఫ"),
    ("b", "బ"),
    ("bh", "భ"),
    ("m", "మ"),
    ("y", "య"),
    ("r", "ర"),
    ("l", "ల"),
    ("v", "వ"),
    ("ś", "శ"),
    ("ṣ", "ష"),
    ("s", "స"),
    ("h", "హ"),
    ("ḻ", "ళ"),
];
