//! Devanagari (देवनागरी) character tables.
//!
//! This is the hub script: every regional script bridges through these
//! values, so the key set here defines the shared table shape.

use super::{Pairs, ScriptTable};

pub(super) const TABLE: ScriptTable = ScriptTable {
    vowels: VOWELS,
    vowel_signs: VOWEL_SIGNS,
    consonants: CONSONANTS,
    numbers: NUMBERS,
    misc: MISC,
};

const MISC: Pairs = &[("।", "."), ("॥", ".."), ("ऽ", "'"), ("ॐ", "om")];

const NUMBERS: Pairs = &[
    ("0", "०"),
    ("1", "१"),
    ("2", "२"),
    ("3", "३"),
    ("4", "४"),
    ("5", "५"),
    ("6", "६"),
    ("7", "७"),
    ("8", "८"),
    ("9", "९"),
];

const VOWELS: Pairs = &[
    ("a", "अ"),
    ("ā", "आ"),
    ("i", "इ"),
    ("ī", "ई"),
    ("u", "उ"),
    ("ū", "ऊ"),
    ("ṛ", "ऋ"),
    ("ṝ", "ॠ"),
    ("ḷ", "ऌ"),
    ("ḹ", "ॡ"),
    ("e", "ए"),
    ("ai", "ऐ"),
    ("o", "ओ"),
    ("au", "औ"),
];

const VOWEL_SIGNS: Pairs = &[
    ("a", ""),
    ("ā", "ा"),
    ("i", "ि"),
    ("ī", "ी"),
    ("u", "ु"),
    ("ū", "ू"),
    ("ṛ", "ृ"),
    ("ṝ", "ॄ"),
    ("ḷ", "ॢ"),
    ("ḹ", "ॣ"),
    ("e", "े"),
    ("ai", "ै"),
    ("o", "ो"),
    ("au", "ौ"),
    ("ṃ", "ं"),
    ("ḥ", "ः"),
    ("ã", "ँ"),
    ("-", "्"),
];

const CONSONANTS: Pairs = &[
    ("k", "क"),
    ("kh", "ख"),
    ("g", "ग"),
    ("gh", "घ"),
    ("ṅ", "ङ"),
    ("c", "च"),
    ("ch", "छ"),
    ("j", "ज"),
    ("jh", "झ"),
    ("ñ", "ञ"),
    ("ṭ", "ट"),
    ("ṭh", "ठ"),
    ("ḍ", "ड"),
    ("ḍh", "ढ"),
    ("ṇ", "ण"),
    ("t", "त"),
    ("th", "थ"),
    ("d", "द"),
    ("dh", "ध"),
    ("n", "न"),
    ("p", "प"),
    ("ph", "फ"),
    ("b", "ब"),
    ("bh", "भ"),
    ("m", "म"),
    ("y", "य"),
    ("r", "र"),
    ("l", "ल"),
    ("v", "व"),
    ("ś", "श"),
    ("ṣ", "ष"),
    ("s", "स"),
    ("h", "ह"),
    ("ḻ", "ळ"),
];
