//! Devanagari→UAST decoder.
//!
//! Walks native codepoints and rebuilds UAST notation: diacritic letters
//! become `/code/` escapes, specials become backslash-fenced escape
//! segments, the virama becomes `-`. Two re-insertion rules keep the
//! round trip invertible: a vowel letter followed by a consonant gets an
//! explicit `\` boundary, and an unaspirated consonant followed by a bare
//! `h` gets its inherent `a` spelled out so the digraph re-parses.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

use crate::scheme::Script;
use crate::tables::{is_unaspirated, script_table, Pairs};

const UDATTA: char = '\u{0951}';
const ANUDATTA: char = '\u{0952}';

/// Devanagari codepoint → UAST notation.
const DATA: Pairs = &[
    ("क", "k"),
    ("ख", "kh"),
    ("ग", "g"),
    ("घ", "gh"),
    ("ङ", "/nu/"),
    ("च", "c"),
    ("छ", "ch"),
    ("ज", "j"),
    ("झ", "jh"),
    ("ञ", "/n/"),
    ("ट", "/t/"),
    ("ठ", "/t/h"),
    ("ड", "/d/"),
    ("ढ", "/d/h"),
    ("ण", "/nl/"),
    ("त", "t"),
    ("थ", "th"),
    ("द", "d"),
    ("ध", "dh"),
    ("न", "n"),
    ("प", "p"),
    ("फ", "ph"),
    ("ब", "b"),
    ("भ", "bh"),
    ("म", "m"),
    ("य", "y"),
    ("र", "r"),
    ("ल", "l"),
    ("व", "v"),
    ("श", "/su/"),
    ("ष", "/sl/"),
    ("स", "s"),
    ("ह", "h"),
    ("ळ", "/ll/"),
    ("अ", "a"),
    ("आ", "/a/"),
    ("इ", "i"),
    ("ई", "/i/"),
    ("उ", "u"),
    ("ऊ", "/u/"),
    ("ऋ", "/r/"),
    ("ॠ", "/ru/"),
    ("ऌ", "/l/"),
    ("ॡ", "/lu/"),
    ("ए", "e"),
    ("ऐ", "ai"),
    ("ओ", "o"),
    ("औ", "au"),
    ("ा", "/a/"),
    ("ि", "i"),
    ("ी", "/i/"),
    ("ु", "u"),
    ("ू", "/u/"),
    ("ृ", "/r/"),
    ("ॄ", "/ru/"),
    ("ॢ", "/l/"),
    ("ॣ", "/lu/"),
    ("े", "e"),
    ("ै", "ai"),
    ("ो", "o"),
    ("ौ", "au"),
    ("ं", "/m/"),
    ("ः", "/h/"),
    ("ँ", "/au/"),
    ("्", "-"),
    ("ऽ", "\\/'/\\"),
    ("।", "\\/./\\"),
    ("॥", "\\/../\\"),
    ("ॐ", "\\/om/\\"),
    ("०", "\\0\\"),
    ("१", "\\1\\"),
    ("२", "\\2\\"),
    ("३", "\\3\\"),
    ("४", "\\4\\"),
    ("५", "\\5\\"),
    ("६", "\\6\\"),
    ("७", "\\7\\"),
    ("८", "\\8\\"),
    ("९", "\\9\\"),
];

struct Decoder {
    data: HashMap<&'static str, &'static str>,
    vowel_letters: HashSet<&'static str>,
    consonant_glyphs: HashSet<&'static str>,
}

fn decoder() -> &'static Decoder {
    static INSTANCE: OnceLock<Decoder> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let table = script_table(Script::Devanagari);
        Decoder {
            data: DATA.iter().copied().collect(),
            vowel_letters: table.vowels.iter().map(|&(_, glyph)| glyph).collect(),
            consonant_glyphs: table.consonants.iter().map(|&(_, glyph)| glyph).collect(),
        }
    })
}

pub fn devanagari_to_uast(token: &str) -> String {
    let dec = decoder();
    let chars: Vec<char> = token.nfc().collect();
    let mut out = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == UDATTA {
            out.push_str("\\'");
            continue;
        }
        if c == ANUDATTA {
            out.push_str("\\`");
            continue;
        }

        let curr = c.to_string();
        let val = dec.data.get(curr.as_str()).copied();

        let next = chars.get(i + 1).map(|n| n.to_string());
        let next_val = next
            .as_deref()
            .map(|n| dec.data.get(n).copied().unwrap_or(n));

        // A vowel letter directly before a consonant needs an explicit
        // segment boundary, or the re-encoder would read it as a sign.
        if dec.vowel_letters.contains(curr.as_str())
            && next
                .as_deref()
                .is_some_and(|n| dec.consonant_glyphs.contains(n))
        {
            out.push_str(val.unwrap_or(&curr));
            out.push('\\');
            continue;
        }

        // An unaspirated consonant before a bare `h` must spell its
        // inherent vowel, or the pair would re-parse as an aspirate. The
        // retroflex stops decode to their escaped forms, so the check
        // covers those spellings as well.
        if let Some(v) = val {
            if (is_unaspirated(v) || matches!(v, "/t/" | "/d/")) && next_val == Some("h") {
                out.push_str(v);
                out.push('a');
                continue;
            }
        }

        match val {
            Some(v) => out.push_str(v),
            None => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word() {
        assert_eq!(devanagari_to_uast("राम"), "r/a/m");
        assert_eq!(devanagari_to_uast("कि"), "ki");
    }

    #[test]
    fn conjunct_with_virama() {
        assert_eq!(devanagari_to_uast("मङ्गलं"), "m/nu/-gl/m/");
        assert_eq!(devanagari_to_uast("क्त"), "k-t");
    }

    #[test]
    fn vowel_letter_before_consonant_gets_boundary() {
        assert_eq!(devanagari_to_uast("अक"), "a\\k");
        assert_eq!(devanagari_to_uast("इति"), "i\\ti");
    }

    #[test]
    fn unaspirated_before_bare_h_spells_inherent_a() {
        assert_eq!(devanagari_to_uast("दह"), "dah");
        // An actual aspirate glyph is untouched.
        assert_eq!(devanagari_to_uast("ध"), "dh");
        // Retroflex stops decode as escapes but still take the rule.
        assert_eq!(devanagari_to_uast("टह"), "/t/ah");
        assert_eq!(devanagari_to_uast("डह"), "/d/ah");
    }

    #[test]
    fn specials_become_fenced_escapes() {
        assert_eq!(devanagari_to_uast("।"), "\\/./\\");
        assert_eq!(devanagari_to_uast("॥"), "\\/../\\");
        assert_eq!(devanagari_to_uast("ऽ"), "\\/'/\\");
        assert_eq!(devanagari_to_uast("ॐ"), "\\/om/\\");
    }

    #[test]
    fn digits_become_fenced_segments() {
        assert_eq!(devanagari_to_uast("५"), "\\5\\");
        assert_eq!(devanagari_to_uast("१०८"), "\\1\\\\0\\\\8\\");
    }

    #[test]
    fn accents() {
        assert_eq!(devanagari_to_uast("क॑"), "k\\'");
        assert_eq!(devanagari_to_uast("क॒"), "k\\`");
    }

    #[test]
    fn unmapped_passes_through() {
        assert_eq!(devanagari_to_uast("x"), "x");
        assert_eq!(devanagari_to_uast("क?"), "k?");
    }

    #[test]
    fn retroflex_letters_escape() {
        assert_eq!(devanagari_to_uast("ड"), "/d/");
        assert_eq!(devanagari_to_uast("ढ"), "/d/h");
        assert_eq!(devanagari_to_uast("गरुडध्वजः"), "gru/d/dh-vj/h/");
    }
}
