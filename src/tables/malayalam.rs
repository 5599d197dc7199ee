//! Malayalam (മലയാളം) character tables.

use super::{Pairs, ScriptTable};

pub(super) const TABLE: ScriptTable = ScriptTable {
    vowels: VOWELS,
    vowel_signs: VOWEL_SIGNS,
    consonants: CONSONANTS,
    numbers: NUMBERS,
    misc: MISC,
};

// om is the two-codepoint ligature ഓ + anusvara.
const MISC: Pairs = &[("।", "."), ("॥", ".."), ("ഽ", "'"), ("ഓം", "om")];

const NUMBERS: Pairs = &[
    ("0", "൦"),
    ("1", "൧"),
    ("2", "൨"),
    ("3", "൩"),
    ("4", "൪"),
    ("5", "൫"),
    ("6", "൬"),
    ("7", "൭"),
    ("8", "൮"),
    ("9", "൯"),
];

const VOWELS: Pairs = &[
    ("a", "അ"),
    ("ā", "ആ"),
    ("i", "ഇ"),
    ("ī", "ഈ"),
    ("u", "ഉ"),
    ("ū", "ഊ"),
    ("ṛ", "ഋ"),
    ("ṝ", "ൠ"),
    ("ḷ", "ഌ"),
    ("ḹ", "ൡ"),
    ("e", "എ"),
    ("ai", "ഐ"),
    ("o", "ഒ"),
    ("au", "ഔ"),
];

const VOWEL_SIGNS: Pairs = &[
    ("a", ""),
    ("ā", "ാ"),
    ("i", "ി"),
    ("ī", "ീ"),
    ("u", "ു"),
    ("ū", "ൂ"),
    ("ṛ", "ൃ"),
    ("ṝ", "ൄ"),
    ("ḷ", "ൢ"),
    ("ḹ", "ൣ"),
    ("e", "െ"),
    ("ai", "ൈ"),
    ("o", "ൊ"),
    ("au", "ൗ"),
    ("ṃ", "ം"),
    ("ḥ", "ഃ"),
    ("ã", "ഁ"),
    ("-", "്"),
];

const CONSONANTS: Pairs = &[
    ("k", "ക"),
    ("kh", "ഖ"),
    ("g", "ഗ"),
    ("gh", "ഘ"),
    ("ṅ", "ങ"),
    ("c", "ച"),
    ("ch", "ഛ"),
    ("j", "ജ"),
    ("jh", "ഝ"),
    ("ñ", "ഞ"),
    ("ṭ", "ട"),
    ("ṭh", "ഠ"),
    ("ḍ", "ഡ"),
    ("ḍh", "ഢ"),
    ("ṇ", "ണ"),
    ("t", "ത"),
    ("th", "ഥ"),
    ("d", "ദ"),
    ("dh", "ധ"),
    ("n", "ന"),
    ("p", "പ"),
    ("ph", "ഫ"),
    ("b", "ബ"),
    ("bh", "ഭ"),
    ("m", "മ"),
    ("y", "യ"),
    ("r", "ര"),
    ("l", "ല"),
    ("v", "വ"),
    ("ś", "ശ"),
    ("ṣ", "ഷ"),
    ("s", "സ"),
    ("h", "ഹ"),
    ("ḻ", "ള"),
];
