//! Pass composition and the (from, to) routing table.
//!
//! Every supported conversion is an ordered list of at most four passes,
//! composed left to right over one whitespace token at a time. The table is
//! flat and pre-enumerated, with no path search; a missing entry means the
//! pair is unrouted and tokens echo through unchanged.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::scheme::{Scheme, Script};
use crate::{bridge, devanagari, encode, escape, iast, slp};

/// One conversion step. Each variant is a pure `String → String` function,
/// parameterized by script where the underlying tables differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Expand `/code/` escapes using the script's symbol set.
    ExpandEscapes(Script),
    /// UAST→native abugida encoding.
    Encode(Script),
    DevanagariToUast,
    UastToIast,
    IastToUast,
    SlpToIast,
    /// Regional script → Devanagari bridge.
    ToDevanagari(Script),
    /// Devanagari → regional script bridge.
    FromDevanagari(Script),
}

impl Pass {
    pub fn apply(self, input: &str) -> String {
        match self {
            Pass::ExpandEscapes(script) => escape::expand_escapes(script, input),
            Pass::Encode(script) => encode::encode_script(script, input),
            Pass::DevanagariToUast => devanagari::devanagari_to_uast(input),
            Pass::UastToIast => iast::uast_to_iast(input),
            Pass::IastToUast => iast::iast_to_uast(input),
            Pass::SlpToIast => slp::slp_to_iast(input),
            Pass::ToDevanagari(script) => bridge::to_devanagari(script, input),
            Pass::FromDevanagari(script) => bridge::from_devanagari(script, input),
        }
    }
}

type Registry = HashMap<(Scheme, Scheme), Vec<Pass>>;

fn build_registry() -> Registry {
    use Pass::*;

    let deva = Script::Devanagari;
    let mut reg = Registry::new();

    // Raw UAST ("uast-io"): expand escapes in the target symbol set, then
    // normalize through the IAST→UAST segmenter before encoding.
    reg.insert((Scheme::Raw, Scheme::Iast), vec![ExpandEscapes(deva)]);
    reg.insert(
        (Scheme::Raw, Scheme::Uast),
        vec![ExpandEscapes(deva), IastToUast],
    );
    for s in Script::ALL {
        reg.insert(
            (Scheme::Raw, Scheme::Script(s)),
            vec![ExpandEscapes(s), IastToUast, ExpandEscapes(s), Encode(s)],
        );
    }

    reg.insert(
        (Scheme::Uast, Scheme::Iast),
        vec![ExpandEscapes(deva), UastToIast],
    );
    for s in Script::ALL {
        reg.insert(
            (Scheme::Uast, Scheme::Script(s)),
            vec![ExpandEscapes(s), Encode(s)],
        );
    }

    reg.insert((Scheme::Script(deva), Scheme::Uast), vec![DevanagariToUast]);
    reg.insert(
        (Scheme::Script(deva), Scheme::Iast),
        vec![DevanagariToUast, ExpandEscapes(deva), UastToIast],
    );
    for s in Script::REGIONAL {
        reg.insert(
            (Scheme::Script(deva), Scheme::Script(s)),
            vec![FromDevanagari(s)],
        );
    }

    reg.insert((Scheme::Slp1, Scheme::Iast), vec![SlpToIast]);
    reg.insert((Scheme::Slp1, Scheme::Uast), vec![SlpToIast, IastToUast]);
    for s in Script::ALL {
        reg.insert(
            (Scheme::Slp1, Scheme::Script(s)),
            vec![SlpToIast, IastToUast, ExpandEscapes(s), Encode(s)],
        );
    }

    reg.insert((Scheme::Iast, Scheme::Uast), vec![IastToUast]);
    for s in Script::ALL {
        reg.insert(
            (Scheme::Iast, Scheme::Script(s)),
            vec![IastToUast, ExpandEscapes(s), Encode(s)],
        );
    }

    // Regional scripts route through Devanagari.
    for a in Script::REGIONAL {
        reg.insert((Scheme::Script(a), Scheme::Script(deva)), vec![ToDevanagari(a)]);
        reg.insert(
            (Scheme::Script(a), Scheme::Uast),
            vec![ToDevanagari(a), DevanagariToUast],
        );
        reg.insert(
            (Scheme::Script(a), Scheme::Iast),
            vec![
                ToDevanagari(a),
                DevanagariToUast,
                ExpandEscapes(deva),
                UastToIast,
            ],
        );
        for b in Script::REGIONAL {
            if a != b {
                reg.insert(
                    (Scheme::Script(a), Scheme::Script(b)),
                    vec![ToDevanagari(a), FromDevanagari(b)],
                );
            }
        }
    }

    reg
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

/// The pass list for a scheme pair, or `None` when the pair is unrouted.
///
/// `convert` treats `None` as pass-through; callers that want strictness
/// can treat it as an error instead.
pub fn route(from: Scheme, to: Scheme) -> Option<&'static [Pass]> {
    registry().get(&(from, to)).map(Vec::as_slice)
}

/// Run one whitespace-delimited token through the pipeline for (from, to).
pub fn convert_token(from: Scheme, to: Scheme, token: &str) -> String {
    match route(from, to) {
        Some(passes) => passes
            .iter()
            .fold(token.to_string(), |text, pass| pass.apply(&text)),
        None => {
            tracing::debug!(%from, %to, "no pipeline registered; passing token through");
            token.to_string()
        }
    }
}

/// Convert whole text: lines split on `\n`, tokens on single spaces, each
/// token converted independently, separators preserved.
pub fn convert(from: Scheme, to: Scheme, text: &str) -> String {
    text.split('\n')
        .map(|line| {
            line.split(' ')
                .map(|token| convert_token(from, to, token))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
