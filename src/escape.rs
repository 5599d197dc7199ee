//! UAST escape expansion: `/code/` → precomposed Unicode.
//!
//! Codes inside slash brackets name diacritic-bearing letters and symbols
//! that plain ASCII cannot spell (`/d/` → `ḍ`, `/../` → `॥`). The code set
//! is shared across scripts except for `om` and the avagraha, which take the
//! target script's own symbols. Unknown codes are swallowed, an unterminated
//! bracket closes at end of input, and everything else passes through.

use std::collections::HashMap;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

use crate::cursor::Cursor;
use crate::scheme::Script;
use crate::tables::{script_table, Pairs};

/// Script-independent escape codes.
const ESCAPE_CODES: Pairs = &[
    ("a", "ā"),
    ("i", "ī"),
    ("u", "ū"),
    ("r", "ṛ"),
    ("ru", "ṝ"),
    ("l", "ḷ"),
    ("lu", "ḹ"),
    ("ll", "ḻ"),
    ("t", "ṭ"),
    ("d", "ḍ"),
    ("m", "ṃ"),
    ("h", "ḥ"),
    ("n", "ñ"),
    ("nu", "ṅ"),
    ("nl", "ṇ"),
    ("su", "ś"),
    ("sl", "ṣ"),
    (".", "।"),
    ("..", "॥"),
    ("au", "ã"),
];

/// Escape table for one script: the shared codes plus the script's own
/// `om` and avagraha, pulled from its misc table.
fn escape_map(script: Script) -> &'static HashMap<&'static str, &'static str> {
    static MAPS: OnceLock<Vec<HashMap<&'static str, &'static str>>> = OnceLock::new();
    let all = MAPS.get_or_init(|| {
        Script::ALL
            .iter()
            .map(|&s| {
                let mut map: HashMap<_, _> = ESCAPE_CODES.iter().copied().collect();
                for &(symbol, code) in script_table(s).misc {
                    if code == "om" || code == "'" {
                        map.insert(code, symbol);
                    }
                }
                map
            })
            .collect()
    });
    &all[script.index()]
}

/// Expand every `/code/` escape in `token` for the given target script.
///
/// The token is lowercased and stripped of leading/trailing backslashes
/// first; interior backslashes survive as segment boundaries for the
/// encoder. Output is NFC-composed.
pub fn expand_escapes(script: Script, token: &str) -> String {
    let map = escape_map(script);
    let lowered = token.to_lowercase();
    let mut cur = Cursor::new(lowered.trim_matches('\\'));
    let mut out = String::new();

    while let Some(c) = cur.peek(0) {
        if c != '/' {
            out.push(c);
            cur.advance(1);
            continue;
        }

        cur.advance(1);
        let mut code = String::new();
        while let Some(c) = cur.peek(0) {
            if c == '/' {
                break;
            }
            code.push(c);
            cur.advance(1);
        }
        // Closing slash, if any; end of input closes the bracket implicitly.
        cur.advance(1);

        match map.get(code.as_str()) {
            Some(mapped) => out.push_str(mapped),
            None => {
                tracing::trace!(script = script.tag(), code = %code, "dropping unknown escape code")
            }
        }
    }

    out.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_single_code() {
        assert_eq!(expand_escapes(Script::Devanagari, "/d/"), "ḍ");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(expand_escapes(Script::Devanagari, "d"), "d");
        assert_eq!(expand_escapes(Script::Devanagari, "namaste"), "namaste");
    }

    #[test]
    fn mixed_escapes_and_text() {
        assert_eq!(expand_escapes(Script::Devanagari, "l/i//au/"), "līã");
        assert_eq!(expand_escapes(Script::Devanagari, "k/r//sl/-/nl/a"), "kṛṣ-ṇa");
    }

    #[test]
    fn om_and_avagraha_vary_per_script() {
        assert_eq!(expand_escapes(Script::Devanagari, "/om/"), "ॐ");
        assert_eq!(expand_escapes(Script::Gujarati, "/om/"), "ૐ");
        assert_eq!(expand_escapes(Script::Telugu, "/om/"), "ఓం");
        assert_eq!(expand_escapes(Script::Devanagari, "/'/"), "ऽ");
        assert_eq!(expand_escapes(Script::Malayalam, "/'/"), "ഽ");
    }

    #[test]
    fn danda_codes() {
        assert_eq!(expand_escapes(Script::Devanagari, "/./"), "।");
        assert_eq!(expand_escapes(Script::Devanagari, "/../"), "॥");
    }

    #[test]
    fn unknown_code_is_swallowed() {
        assert_eq!(expand_escapes(Script::Devanagari, "k/zz/a"), "ka");
        assert_eq!(expand_escapes(Script::Devanagari, "//"), "");
    }

    #[test]
    fn unterminated_bracket_closes_at_end() {
        assert_eq!(expand_escapes(Script::Devanagari, "x/d"), "xḍ");
        assert_eq!(expand_escapes(Script::Devanagari, "x/"), "x");
    }

    #[test]
    fn outer_backslashes_stripped_inner_kept() {
        assert_eq!(expand_escapes(Script::Devanagari, "\\/'/\\"), "ऽ");
        assert_eq!(expand_escapes(Script::Devanagari, "k/a/\\m"), "kā\\m");
    }

    #[test]
    fn input_is_lowercased() {
        assert_eq!(expand_escapes(Script::Devanagari, "/D/"), "ḍ");
        assert_eq!(expand_escapes(Script::Devanagari, "KA"), "ka");
    }

    #[test]
    fn idempotent_on_expanded_text() {
        for input in ["l/i//au/", "k/r//sl/-/nl/a", "/om/ab", "dh-"] {
            let once = expand_escapes(Script::Devanagari, input);
            let twice = expand_escapes(Script::Devanagari, &once);
            assert_eq!(twice, once, "not idempotent for {input:?}");
        }
    }
}
