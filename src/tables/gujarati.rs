//! Gujarati (ગુજરાતી) character tables.

use super::{Pairs, ScriptTable};

pub(super) const TABLE: ScriptTable = ScriptTable {
    vowels: VOWELS,
    vowel_signs: VOWEL_SIGNS,
    consonants: CONSONANTS,
    numbers: NUMBERS,
    misc: MISC,
};

// Gujarati has no danda of its own; the Devanagari ones are used as-is.
const MISC: Pairs = &[("।", "."), ("॥", ".."), ("ઽ", "'"), ("ૐ", "om")];

const NUMBERS: Pairs = &[
    ("0", "૦"),
    ("1", "૧"),
    ("2", "૨"),
    ("3", "૩"),
    ("4", "૪"),
    ("5", "૫"),
    ("6", "૬"),
    ("7", "૭"),
    ("8", "૮"),
    ("9", "૯"),
];

const VOWELS: Pairs = &[
    ("a", "અ"),
    ("ā", "આ"),
    ("i", "ઇ"),
    ("ī", "ઈ"),
    ("u", "ઉ"),
    ("ū", "ઊ"),
    ("ṛ", "ઋ"),
    ("ṝ", "ૠ"),
    ("ḷ", "ઌ"),
    ("ḹ", "ૡ"),
    ("e", "એ"),
    ("ai", "ઐ"),
    ("o", "ઓ"),
    ("au", "ઔ"),
];

const VOWEL_SIGNS: Pairs = &[
    ("a", ""),
    ("ā", "ા"),
    ("i", "િ"),
    ("ī", "ી"),
    ("u", "ુ"),
    ("ū", "ૂ"),
    ("ṛ", "ૃ"),
    ("ṝ", "ૄ"),
    ("ḷ", "ૢ"),
    ("ḹ", "ૣ"),
    ("e", "ે"),
    ("ai", "ૈ"),
    ("o", "ો"),
    ("au", "ૌ"),
    ("ṃ", "ં"),
    ("ḥ", "ઃ"),
    ("ã", "ઁ"),
    ("-", "્"),
];

const CONSONANTS: Pairs = &[
    ("k", "ક"),
    ("kh", "ખ"),
    ("g", "ગ"),
    ("gh", "ઘ"),
    ("ṅ", "ઙ"),
    ("c", "ચ"),
    ("ch", "છ"),
    ("j", "જ"),
    ("jh", "ઝ"),
    ("ñ", "ઞ"),
    ("ṭ", "ટ"),
    ("ṭh", "ઠ"),
    ("ḍ", "ડ"),
    ("ḍh", "ઢ"),
    ("ṇ", "ણ"),
    ("t", "ત"),
    ("th", "થ"),
    ("d", "દ"),
    ("dh", "ધ"),
    ("n", "ન"),
    ("p", "પ"),
    ("ph", "ફ"),
    ("b", "બ"),
    ("bh", "ભ"),
    ("m", "મ"),
    ("y", "ય"),
    ("r", "ર"),
    ("l", "લ"),
    ("v", "વ"),
    ("ś", "શ"),
    ("ṣ", "ષ"),
    ("s", "સ"),
    ("h", "હ"),
    ("ḻ", "ળ"),
];
