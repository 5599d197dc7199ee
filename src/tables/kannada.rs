//! Kannada (ಕನ್ನಡ) character tables.

use super::{Pairs, ScriptTable};

pub(super) const TABLE: ScriptTable = ScriptTable {
    vowels: VOWELS,
    vowel_signs: VOWEL_SIGNS,
    consonants: CONSONANTS,
    numbers: NUMBERS,
    misc: MISC,
};

// om is the two-codepoint ligature ಓ + anusvara.
const MISC: Pairs = &[("।", "."), ("॥", ".."), ("ಽ", "'"), ("ಓಂ", "om")];

const NUMBERS: Pairs = &[
    ("0", "೦"),
    ("1", "೧"),
    ("2", "೨"),
    ("3", "೩"),
    ("4", "೪"),
    ("5", "೫"),
    ("6", "೬"),
    ("7", "೭"),
    ("8", "೮"),
    ("9", "೯"),
];

const VOWELS: Pairs = &[
    ("a", "ಅ"),
    ("ā", "ಆ"),
    ("i", "ಇ"),
    ("ī", "ಈ"),
    ("u", "ಉ"),
    ("ū", "ಊ"),
    ("ṛ", "ಋ"),
    ("ṝ", "ೠ"),
    ("ḷ", "ಌ"),
    ("ḹ", "ೡ"),
    ("e", "ಎ"),
    ("ai", "ಐ"),
    ("o", "ಒ"),
    ("au", "ಔ"),
];

const VOWEL_SIGNS: Pairs = &[
    ("a", ""),
    ("ā", "ಾ"),
    ("i", "ಿ"),
    ("ī", "ೀ"),
    ("u", "ು"),
    ("ū", "ೂ"),
    ("ṛ", "ೃ"),
    ("ṝ", "ೄ"),
    ("ḷ", "ೢ"),
    ("ḹ", "ೣ"),
    ("e", "ೆ"),
    ("ai", "ೈ"),
    ("o", "ೊ"),
    ("au", "ೌ"),
    ("ṃ", "ಂ"),
    ("ḥ", "ಃ"),
    ("ã", "ಁ"),
    ("-", "್"),
];

const CONSONANTS: Pairs = &[
    ("k", "ಕ"),
    ("kh", "ಖ"),
    ("g", "ಗ"),
    ("gh", "ಘ"),
    ("ṅ", "ಙ"),
    ("c", "ಚ"),
    ("ch", "ಛ"),
    ("j", "ಜ"),
    ("jh", "ಝ"),
    ("ñ", "ಞ"),
    ("ṭ", "ಟ"),
    ("ṭh", "ಠ"),
    ("ḍ", "ಡ"),
    ("ḍh", "ಢ"),
    ("ṇ", "ಣ"),
    ("t", "ತ"),
    ("th", "ಥ"),
    ("d", "ದ"),
    ("dh", "ಧ"),
    ("n", "ನ"),
    ("p", "ಪ"),
    ("ph", "ಫ"),
    ("b", "ಬ"),
    ("bh", "ಭ"),
    ("m", "ಮ"),
    ("y", "ಯ"),
    ("r", "ರ"),
    ("l", "ಲ"),
    ("v", "ವ"),
    ("ś", "ಶ"),
    ("ṣ", "ಷ"),
    ("s", "ಸ"),
    ("h", "ಹ"),
    ("ḻ", "ಳ"),
];
