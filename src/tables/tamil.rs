//! Tamil-country Sanskrit tables: Grantha letters with Tamil digits.
//!
//! Plain Tamil lacks the voiced/aspirated distinctions Sanskrit needs, so
//! UAST targets the Grantha block (U+11300..U+1137F) and keeps the familiar
//! Tamil digits for numerals.

use super::{Pairs, ScriptTable};

pub(super) const TABLE: ScriptTable = ScriptTable {
    vowels: VOWELS,
    vowel_signs: VOWEL_SIGNS,
    consonants: CONSONANTS,
    numbers: NUMBERS,
    misc: MISC,
};

const MISC: Pairs = &[("।", "."), ("॥", ".."), ("𑌽", "'"), ("𑍐", "om")];

const NUMBERS: Pairs = &[
    ("0", "௦"),
    ("1", "௧"),
    ("2", "௨"),
    ("3", "௩"),
    ("4", "௪"),
    ("5", "௫"),
    ("6", "௬"),
    ("7", "௭"),
    ("8", "௮"),
    ("9", "௯"),
];

const VOWELS: Pairs = &[
    ("a", "𑌅"),
    ("ā", "𑌆"),
    ("i", "𑌇"),
    ("ī", "𑌈"),
    ("u", "𑌉"),
    ("ū", "𑌊"),
    ("ṛ", "𑌋"),
    ("ṝ", "𑍠"),
    ("ḷ", "𑌌"),
    ("ḹ", "𑍡"),
    ("e", "𑌏"),
    ("ai", "𑌐"),
    ("o", "𑌓"),
    ("au", "𑌔"),
];

const VOWEL_SIGNS: Pairs = &[
    ("a", ""),
    ("ā", "𑌾"),
    ("i", "𑌿"),
    ("ī", "𑍀"),
    ("u", "𑍁"),
    ("ū", "𑍂"),
    ("ṛ", "𑍃"),
    ("ṝ", "𑍄"),
    ("ḷ", "𑍢"),
    ("ḹ", "𑍣"),
    ("e", "𑍇"),
    ("ai", "𑍈"),
    ("o", "𑍋"),
    ("au", "𑍗"),
    ("ṃ", "𑌂"),
    ("ḥ", "𑌃"),
    ("ã", "𑌁"),
    ("-", "𑍍"),
];

const CONSONANTS: Pairs = &[
    ("k", "𑌕"),
    ("kh", "𑌖"),
    ("g", "𑌗"),
    ("gh", "𑌘"),
    ("ṅ", "𑌙"),
    ("c", "𑌚"),
    ("ch", "𑌛"),
    ("j", "𑌜"),
    ("jh", "𑌝"),
    ("ñ", "𑌞"),
    ("ṭ", "𑌟"),
    ("ṭh", "𑌠"),
    ("ḍ", "𑌡"),
    ("ḍh", "𑌢"),
    ("ṇ", "𑌣"),
    ("t", "𑌤"),
    ("th", "𑌥"),
    ("d", "𑌦"),
    ("dh", "𑌧"),
    ("n", "𑌨"),
    ("p", "𑌪"),
    ("ph", "𑌫"),
    ("b", "𑌬"),
    ("bh", "𑌭"),
    ("m", "𑌮"),
    ("y", "𑌯"),
    ("r", "𑌰"),
    ("l", "𑌲"),
    ("v", "𑌵"),
    ("ś", "𑌶"),
    ("ṣ", "𑌷"),
    ("s", "𑌸"),
    ("h", "𑌹"),
    ("ḻ", "𑌳"),
];
