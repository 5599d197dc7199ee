//! Odia (ଓଡ଼ିଆ) character tables.

use super::{Pairs, ScriptTable};

pub(super) const TABLE: ScriptTable = ScriptTable {
    vowels: VOWELS,
    vowel_signs: VOWEL_SIGNS,
    consonants: CONSONANTS,
    numbers: NUMBERS,
    misc: MISC,
};

// om is the two-codepoint ligature ଓ + candrabindu.
const MISC: Pairs = &[("।", "."), ("॥", ".."), ("ଽ", "'"), ("ଓଁ", "om")];

const NUMBERS: Pairs = &[
    ("0", "୦"),
    ("1", "୧"),
    ("2", "୨"),
    ("3", "୩"),
    ("4", "୪"),
    ("5", "୫"),
    ("6", "୬"),
    ("7", "୭"),
    ("8", "୮"),
    ("9", "୯"),
];

const VOWELS: Pairs = &[
    ("a", "ଅ"),
    ("ā", "ଆ"),
    ("i", "ଇ"),
    ("ī", "ଈ"),
    ("u", "ଉ"),
    ("ū", "ଊ"),
    ("ṛ", "ଋ"),
    ("ṝ", "ୠ"),
    ("ḷ", "ଌ"),
    ("ḹ", "ୡ"),
    ("e", "ଏ"),
    ("ai", "ଐ"),
    ("o", "ଓ"),
    ("au", "ଔ"),
];

const VOWEL_SIGNS: Pairs = &[
    ("a", ""),
    ("ā", "ା"),
    ("i", "ି"),
    ("ī", "ୀ"),
    ("u", "ୁ"),
    ("ū", "ୂ"),
    ("ṛ", "ୃ"),
    ("ṝ", "ୄ"),
    ("ḷ", "ୢ"),
    ("ḹ", "ୣ"),
    ("e", "େ"),
    ("ai", "ୈ"),
    ("o", "ୋ"),
    ("au", "ୌ"),
    ("ṃ", "ଂ"),
    ("ḥ", "ଃ"),
    ("ã", "ଁ"),
    ("-", "୍"),
];

const CONSONANTS: Pairs = &[
    ("k", "କ"),
    ("kh", "ଖ"),
    ("g", "ଗ"),
    ("gh", "ଘ"),
    ("ṅ", "ଙ"),
    ("c", "ଚ"),
    ("ch", "ଛ"),
    ("j", "ଜ"),
    ("jh", "ଝ"),
    ("ñ", "ଞ"),
    ("ṭ", "ଟ"),
    ("ṭh", "ଠ"),
    ("ḍ", "ଡ"),
    ("ḍh", "ଢ"),
    ("ṇ", "ଣ"),
    ("t", "ତ"),
    ("th", "ଥ"),
    ("d", "ଦ"),
    ("dh", "ଧ"),
    ("n", "ନ"),
    ("p", "ପ"),
    ("ph", "ଫ"),
    ("b", "ବ"),
    ("bh", "ଭ"),
    ("m", "ମ"),
    ("y", "ୟ"),
    ("r", "ର"),
    ("l", "ଲ"),
    ("v", "ୱ"),
    ("ś", "ଶ"),
    ("ṣ", "ଷ"),
    ("s", "ସ"),
    ("h", "ହ"),
    ("ḻ", "ଳ"),
];
