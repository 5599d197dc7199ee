//! Scheme identifiers and the string tags used at the tool boundary.
//!
//! A `Scheme` names one of the supported encodings; the seven Indic scripts
//! carry native character tables and are grouped under [`Script`]. Both sets
//! are closed sets; conversion routes are enumerated per pair, never computed.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the seven Indic scripts with native character tables.
///
/// Tamil here means the Grantha letter repertoire with Tamil digits, the
/// convention UAST uses for Sanskrit in Tamil country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Devanagari,
    Gujarati,
    Tamil,
    Kannada,
    Telugu,
    Odia,
    Malayalam,
}

impl Script {
    /// Declaration order doubles as the table index; keep in sync with the enum.
    pub const ALL: [Script; 7] = [
        Script::Devanagari,
        Script::Gujarati,
        Script::Tamil,
        Script::Kannada,
        Script::Telugu,
        Script::Odia,
        Script::Malayalam,
    ];

    /// The scripts that route through Devanagari bridge tables.
    pub const REGIONAL: [Script; 6] = [
        Script::Gujarati,
        Script::Tamil,
        Script::Kannada,
        Script::Telugu,
        Script::Odia,
        Script::Malayalam,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Script::Devanagari => "devanāgarī",
            Script::Gujarati => "gu",
            Script::Tamil => "ta",
            Script::Kannada => "kn",
            Script::Telugu => "te",
            Script::Odia => "or",
            Script::Malayalam => "ml",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A supported encoding, as accepted by [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// UAST with unprocessed escape brackets ("uast-io"; legacy tag "raw").
    Raw,
    Uast,
    Iast,
    Slp1,
    Script(Script),
}

impl Scheme {
    pub const ALL: [Scheme; 11] = [
        Scheme::Raw,
        Scheme::Uast,
        Scheme::Iast,
        Scheme::Slp1,
        Scheme::Script(Script::Devanagari),
        Scheme::Script(Script::Gujarati),
        Scheme::Script(Script::Tamil),
        Scheme::Script(Script::Kannada),
        Scheme::Script(Script::Telugu),
        Scheme::Script(Script::Odia),
        Scheme::Script(Script::Malayalam),
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Scheme::Raw => "uast-io",
            Scheme::Uast => "uast",
            Scheme::Iast => "iast",
            Scheme::Slp1 => "slp",
            Scheme::Script(s) => s.tag(),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Rejected scheme identifier. Validation happens at the tool boundary;
/// the conversion core never sees an unparsed tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheme identifier: {0:?}")]
pub struct UnknownScheme(pub String);

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "uast-io" | "raw" => Scheme::Raw,
            "uast" => Scheme::Uast,
            "iast" => Scheme::Iast,
            "slp" => Scheme::Slp1,
            "devanāgarī" | "devanagari" => Scheme::Script(Script::Devanagari),
            "gu" => Scheme::Script(Script::Gujarati),
            "ta" => Scheme::Script(Script::Tamil),
            "kn" => Scheme::Script(Script::Kannada),
            "te" => Scheme::Script(Script::Telugu),
            "or" => Scheme::Script(Script::Odia),
            "ml" => Scheme::Script(Script::Malayalam),
            _ => return Err(UnknownScheme(s.to_string())),
        })
    }
}

impl Serialize for Scheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Scheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_tags() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.tag().parse::<Scheme>(), Ok(scheme));
        }
    }

    #[test]
    fn parse_legacy_aliases() {
        assert_eq!("raw".parse::<Scheme>(), Ok(Scheme::Raw));
        assert_eq!(
            "devanagari".parse::<Scheme>(),
            Ok(Scheme::Script(Script::Devanagari))
        );
    }

    #[test]
    fn parse_unknown() {
        let err = "klingon".parse::<Scheme>().unwrap_err();
        assert_eq!(err, UnknownScheme("klingon".to_string()));
    }

    #[test]
    fn serde_round_trip() {
        for scheme in Scheme::ALL {
            let json = serde_json::to_string(&scheme).unwrap();
            assert_eq!(json, format!("{:?}", scheme.tag()));
            let back: Scheme = serde_json::from_str(&json).unwrap();
            assert_eq!(back, scheme);
        }
    }

    #[test]
    fn script_index_matches_all_order() {
        for (i, script) in Script::ALL.iter().enumerate() {
            assert_eq!(script.index(), i);
        }
    }
}
