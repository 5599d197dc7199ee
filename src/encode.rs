//! UAST→native-script abugida encoder.
//!
//! Consumes an escape-expanded UAST token and emits native text. Backslashes
//! mark explicit segment boundaries; within a segment the encoder resolves
//! aspirate digraphs (`kh`), `ai`/`au` diphthongs, and vowel-sign attachment.
//! A consonant with no following sign carries the inherent `a` and gets no
//! visible vowel glyph; a bare consonant must spell its virama with `-`.

use unicode_normalization::UnicodeNormalization;

use crate::cursor::Cursor;
use crate::scheme::Script;
use crate::tables::{is_unaspirated, script_maps};

/// Punctuation the encoder passes through (quotes and pairing marks only;
/// `-` and `|` are structural on this side).
const PASSTHROUGH: &[char] = &['!', '"', '(', ')', ',', ':', '=', '?'];

const UDATTA: char = '\u{0951}';
const ANUDATTA: char = '\u{0952}';

pub fn encode_script(script: Script, token: &str) -> String {
    let maps = script_maps(script);
    let mut out = String::new();

    for segment in token.split('\\') {
        // Whole-segment forms first: native misc symbols echo unchanged,
        // digit strings map through the numerals table, and an isolated
        // vowel takes its independent letter rather than the sign.
        if maps.misc.contains_key(segment) {
            out.push_str(segment);
            continue;
        }
        if let Some(native) = maps.numbers.get(segment) {
            out.push_str(native);
            continue;
        }
        if let Some(native) = maps.vowels.get(segment) {
            out.push_str(native);
            continue;
        }

        let mut cur = Cursor::new(segment);
        while let Some(c) = cur.peek(0) {
            // Vedic accents exist only in the Devanagari repertoire.
            if script == Script::Devanagari {
                if c == '\'' {
                    out.push(UDATTA);
                    cur.advance(1);
                    continue;
                }
                if c == '`' {
                    out.push(ANUDATTA);
                    cur.advance(1);
                    continue;
                }
            }

            if PASSTHROUGH.contains(&c) {
                out.push(c);
                cur.advance(1);
                continue;
            }

            let curr = c.to_string();

            if is_unaspirated(&curr) {
                let consonant = if cur.peek(1) == Some('h') {
                    let digraph = cur.peek_str(2);
                    cur.advance(2);
                    digraph
                } else {
                    cur.advance(1);
                    curr
                };
                if let Some(native) = maps.consonants.get(consonant.as_str()) {
                    out.push_str(native);
                }
                continue;
            }

            if let Some(native) = maps.consonants.get(curr.as_str()) {
                out.push_str(native);
            }

            // The vowel unit starts at the same position: a consonant just
            // emitted never matches a sign, while a/ai/au resolve here.
            let vowel = if c == 'a' && matches!(cur.peek(1), Some('i') | Some('u')) {
                let diphthong = cur.peek_str(2);
                cur.advance(2);
                diphthong
            } else {
                cur.advance(1);
                curr
            };
            if let Some(sign) = maps.vowel_signs.get(vowel.as_str()) {
                out.push_str(sign);
            }
        }
    }

    out.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deva(token: &str) -> String {
        encode_script(Script::Devanagari, token)
    }

    #[test]
    fn consonant_carries_inherent_a() {
        assert_eq!(deva("rāma"), "राम");
        // No conjunct forms without an explicit virama in the source.
        assert_eq!(deva("namaste"), "नमसते");
    }

    #[test]
    fn explicit_virama() {
        assert_eq!(deva("k-"), "क्");
        assert_eq!(deva("kṛṣ-ṇa"), "कृष्ण");
        assert_eq!(deva("k-t"), "क्त");
    }

    #[test]
    fn aspirate_digraphs() {
        assert_eq!(deva("kha"), "ख");
        assert_eq!(deva("ḍha"), "ढ");
        assert_eq!(deva("dhī"), "धी");
    }

    #[test]
    fn diphthongs() {
        assert_eq!(deva("kai"), "कै");
        assert_eq!(deva("kau"), "कौ");
    }

    #[test]
    fn isolated_vowel_segment_takes_letter() {
        assert_eq!(deva("a"), "अ");
        assert_eq!(deva("ai"), "ऐ");
        assert_eq!(deva("a\\k"), "अक");
    }

    #[test]
    fn vowel_mid_segment_takes_sign() {
        assert_eq!(deva("ki"), "कि");
        assert_eq!(deva("kī"), "की");
    }

    #[test]
    fn digit_segments() {
        assert_eq!(deva("5"), "५");
        assert_eq!(encode_script(Script::Gujarati, "5"), "૫");
        assert_eq!(deva("1\\2"), "१२");
    }

    #[test]
    fn misc_segments_echo() {
        assert_eq!(deva("।"), "।");
        assert_eq!(deva("ॐ"), "ॐ");
        assert_eq!(encode_script(Script::Gujarati, "ૐ"), "ૐ");
    }

    #[test]
    fn anusvara_visarga_candrabindu() {
        assert_eq!(deva("kaṃ"), "कं");
        assert_eq!(deva("kaḥ"), "कः");
        assert_eq!(deva("kaã"), "कँ");
    }

    #[test]
    fn accents_devanagari_only() {
        assert_eq!(deva("'ka"), "\u{0951}क");
        assert_eq!(deva("k`"), "क\u{0952}");
        // Other scripts drop the accent marks entirely.
        assert_eq!(encode_script(Script::Gujarati, "k'"), "ક");
    }

    #[test]
    fn punctuation_passthrough() {
        assert_eq!(deva("ka?"), "क?");
        assert_eq!(deva("(ka)"), "(क)");
    }

    #[test]
    fn regional_scripts() {
        assert_eq!(encode_script(Script::Gujarati, "rāma"), "રામ");
        assert_eq!(encode_script(Script::Telugu, "rāma"), "రామ");
        assert_eq!(encode_script(Script::Malayalam, "kṛṣ-ṇa"), "കൃഷ്ണ");
        assert_eq!(encode_script(Script::Tamil, "rāma"), "𑌰𑌾𑌮");
    }
}
